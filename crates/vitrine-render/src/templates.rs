//! Template engine for rendering landing pages.
//!
//! Each variant is a pair of embedded minijinja templates: a CSS template
//! that binds the record's accent values to custom properties, and an HTML
//! template that receives the finished stylesheet plus the record copy.

use minijinja::{context, Environment};

use vitrine_catalog::{Feature, PageVariant};

use crate::color::AccentScale;

/// Everything a page template can reference.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PageContext {
    /// Display name.
    pub title: String,
    /// One-line pitch shown under the title.
    pub tagline: String,
    /// Paragraph copy, also used for the description meta tag.
    pub description: String,
    /// Hero logo tile content.
    pub logo: String,
    /// Accent color, normalized with a leading `#`.
    pub accent: String,
    /// Companion color, normalized; equals `accent` when none was authored.
    pub accent_secondary: String,
    /// Derived alpha variants of the accent color.
    pub scale: AccentScale,
    /// Companion color at glow alpha, for the second background layer.
    pub secondary_glow: String,
    /// Feature cards in display order.
    pub features: Vec<Feature>,
    /// Store metadata, present only for the storefront variant.
    pub storefront: Option<StorefrontContext>,
}

/// Store metadata with the display strings derived from it.
#[derive(Debug, Clone, serde::Serialize)]
pub struct StorefrontContext {
    pub genre: String,
    pub price: String,
    /// Line under the price tag ("One-Time Purchase" vs in-app purchases).
    pub price_note: String,
    /// Whether to show the free-demo ribbon.
    pub free_demo: bool,
    pub player_count: String,
    pub rating: String,
    pub intensity: String,
    pub space_needed: String,
    pub rating_code: String,
    pub rating_desc: String,
    pub modes: Vec<String>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the embedded page templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("concept.html".to_string(), CONCEPT_TEMPLATE.to_string())
            .expect("Failed to add concept template");
        env.add_template_owned("concept.css".to_string(), CONCEPT_CSS.to_string())
            .expect("Failed to add concept stylesheet");
        env.add_template_owned(
            "storefront.html".to_string(),
            STOREFRONT_TEMPLATE.to_string(),
        )
        .expect("Failed to add storefront template");
        env.add_template_owned("storefront.css".to_string(), STOREFRONT_CSS.to_string())
            .expect("Failed to add storefront stylesheet");

        Self { env }
    }

    /// Render the stylesheet for a variant.
    pub fn render_stylesheet(
        &self,
        variant: PageVariant,
        ctx: &PageContext,
    ) -> Result<String, minijinja::Error> {
        let name = match variant {
            PageVariant::Concept => "concept.css",
            PageVariant::Storefront => "storefront.css",
        };
        let tmpl = self.env.get_template(name)?;

        tmpl.render(context! {
            accent => &ctx.accent,
            accent_secondary => &ctx.accent_secondary,
            scale => &ctx.scale,
            secondary_glow => &ctx.secondary_glow,
        })
    }

    /// Render the full document for a variant, splicing in the stylesheet.
    pub fn render_page(
        &self,
        variant: PageVariant,
        ctx: &PageContext,
        stylesheet: &str,
    ) -> Result<String, minijinja::Error> {
        let name = match variant {
            PageVariant::Concept => "concept.html",
            PageVariant::Storefront => "storefront.html",
        };
        let tmpl = self.env.get_template(name)?;

        tmpl.render(context! {
            title => &ctx.title,
            tagline => &ctx.tagline,
            description => &ctx.description,
            logo => &ctx.logo,
            features => &ctx.features,
            storefront => &ctx.storefront,
            stylesheet => stylesheet,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const CONCEPT_CSS: &str = r##":root {
    --accent: {{ accent }};
    --accent-soft: {{ accent_secondary }};
    --accent-glow: rgba{{ scale.glow }};
    --accent-border: rgba{{ scale.border }};
    --accent-shadow: rgba{{ scale.shadow }};
    --accent-hover: rgba{{ scale.hover }};
    --secondary-glow: rgba{{ secondary_glow }};
}

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'SF Pro Display', 'Segoe UI', Roboto, sans-serif;
    line-height: 1.6;
    color: #f0f0f0;
    background: #0a0a0f;
    min-height: 100vh;
    overflow-x: hidden;
    position: relative;
}

.bg-layer {
    position: fixed;
    width: 100%;
    height: 100%;
    top: 0;
    left: 0;
    pointer-events: none;
}

.bg-layer-1 {
    background: radial-gradient(circle at 20% 30%, var(--accent-glow) 0%, transparent 50%);
    z-index: 1;
}

.bg-layer-2 {
    background: radial-gradient(circle at 80% 70%, var(--secondary-glow) 0%, transparent 50%);
    z-index: 2;
}

.container {
    max-width: 1400px;
    margin: 0 auto;
    padding: 40px 20px;
    position: relative;
    z-index: 10;
}

header {
    text-align: center;
    padding: 80px 20px;
    position: relative;
}

.hero-badge {
    display: inline-block;
    padding: 8px 20px;
    background: var(--accent-glow);
    backdrop-filter: blur(10px);
    border: 1px solid var(--accent-border);
    border-radius: 20px;
    font-size: 14px;
    color: var(--accent-soft);
    font-weight: 500;
    letter-spacing: 1px;
    text-transform: uppercase;
    margin-bottom: 30px;
    animation: float 3s ease-in-out infinite;
}

@keyframes float {
    0%, 100% { transform: translateY(0px); }
    50% { transform: translateY(-10px); }
}

.logo-container {
    perspective: 1000px;
    margin-bottom: 40px;
}

.logo-icon {
    width: 120px;
    height: 120px;
    background: linear-gradient(135deg, var(--accent) 0%, var(--accent-soft) 100%);
    backdrop-filter: blur(20px);
    border: 2px solid var(--accent-border);
    border-radius: 30px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 54px;
    font-weight: 800;
    color: #ffffff;
    margin: 0 auto;
    box-shadow:
        0 20px 60px var(--accent-shadow),
        0 0 80px var(--accent-border),
        inset 0 1px 0 rgba(255, 255, 255, 0.1);
    letter-spacing: -3px;
    transform-style: preserve-3d;
    animation: rotateY 8s ease-in-out infinite;
}

@keyframes rotateY {
    0%, 100% { transform: rotateY(-5deg) rotateX(2deg); }
    50% { transform: rotateY(5deg) rotateX(-2deg); }
}

h1 {
    font-size: 68px;
    font-weight: 800;
    background: linear-gradient(135deg, #ffffff 0%, var(--accent-soft) 50%, var(--accent) 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    background-clip: text;
    margin-bottom: 24px;
    line-height: 1.1;
    letter-spacing: -2px;
}

.tagline {
    font-size: 28px;
    color: #b5a3e8;
    margin-bottom: 20px;
    font-weight: 400;
    max-width: 800px;
    margin-left: auto;
    margin-right: auto;
}

.hero-message {
    font-size: 18px;
    color: #9388db;
    font-weight: 300;
    max-width: 700px;
    margin: 0 auto 50px;
    line-height: 1.8;
}

.cta-buttons {
    display: flex;
    gap: 20px;
    justify-content: center;
    flex-wrap: wrap;
    margin-bottom: 80px;
}

.btn {
    padding: 20px 48px;
    font-size: 18px;
    font-weight: 600;
    border: none;
    border-radius: 16px;
    cursor: pointer;
    text-decoration: none;
    display: inline-flex;
    align-items: center;
    gap: 10px;
    transition: all 0.4s cubic-bezier(0.4, 0, 0.2, 1);
    position: relative;
    overflow: hidden;
}

.btn-primary {
    background: linear-gradient(135deg, var(--accent) 0%, var(--accent-soft) 100%);
    color: #ffffff;
    box-shadow:
        0 8px 30px var(--accent-shadow),
        0 0 60px var(--accent-border);
}

.btn-primary:hover {
    transform: translateY(-3px);
    box-shadow:
        0 12px 40px var(--accent-hover),
        0 0 80px var(--accent-shadow);
}

.btn-secondary {
    background: var(--accent-glow);
    backdrop-filter: blur(10px);
    color: var(--accent-soft);
    border: 2px solid var(--accent-border);
}

.btn-secondary:hover {
    background: var(--accent-border);
    border-color: var(--accent-hover);
    transform: translateY(-3px);
}

.features {
    padding: 100px 20px;
    position: relative;
}

.features h2 {
    text-align: center;
    font-size: 52px;
    font-weight: 800;
    color: #ffffff;
    margin-bottom: 20px;
    letter-spacing: -1px;
}

.section-subtitle {
    text-align: center;
    font-size: 22px;
    color: #9388db;
    margin-bottom: 80px;
    font-weight: 300;
}

.feature-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
    gap: 40px;
    margin-bottom: 80px;
}

.feature-card {
    background: rgba(30, 27, 75, 0.4);
    backdrop-filter: blur(20px);
    padding: 48px;
    border-radius: 24px;
    border: 1px solid var(--accent-border);
    box-shadow:
        0 8px 32px rgba(0, 0, 0, 0.3),
        inset 0 1px 0 rgba(255, 255, 255, 0.05);
    transition: all 0.4s cubic-bezier(0.4, 0, 0.2, 1);
    position: relative;
    overflow: hidden;
}

.feature-card:hover {
    transform: translateY(-8px) scale(1.02);
    border-color: var(--accent-hover);
    box-shadow:
        0 16px 48px var(--accent-shadow),
        inset 0 1px 0 rgba(255, 255, 255, 0.1);
}

.feature-icon {
    width: 70px;
    height: 70px;
    background: linear-gradient(135deg, var(--accent-shadow) 0%, var(--accent-border) 100%);
    backdrop-filter: blur(10px);
    border: 1px solid var(--accent-border);
    border-radius: 18px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 32px;
    margin-bottom: 28px;
    box-shadow: 0 8px 24px var(--accent-border);
}

.feature-card h3 {
    font-size: 26px;
    margin-bottom: 16px;
    color: var(--accent-soft);
    font-weight: 700;
    letter-spacing: -0.5px;
}

.feature-card p {
    color: #b5a3e8;
    line-height: 1.8;
    font-size: 17px;
    font-weight: 300;
}

.experience {
    padding: 100px 20px;
    background: linear-gradient(135deg, rgba(30, 27, 75, 0.3) 0%, rgba(76, 29, 149, 0.2) 100%);
    backdrop-filter: blur(20px);
    border-radius: 32px;
    margin: 60px 0;
    border: 1px solid var(--accent-border);
}

.experience h2 {
    text-align: center;
    font-size: 52px;
    font-weight: 800;
    color: #ffffff;
    margin-bottom: 80px;
    letter-spacing: -1px;
}

.experience-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 36px;
    max-width: 1200px;
    margin: 0 auto;
}

.experience-item {
    text-align: center;
}

.experience-frame {
    background: rgba(55, 48, 163, 0.3);
    backdrop-filter: blur(15px);
    border-radius: 24px;
    padding: 24px;
    aspect-ratio: 16 / 9;
    display: flex;
    align-items: center;
    justify-content: center;
    box-shadow:
        0 12px 40px rgba(0, 0, 0, 0.4),
        inset 0 1px 0 rgba(255, 255, 255, 0.1);
    margin-bottom: 20px;
    border: 2px solid var(--accent-border);
    transition: all 0.4s cubic-bezier(0.4, 0, 0.2, 1);
}

.experience-frame:hover {
    transform: translateY(-6px);
    border-color: var(--accent-hover);
    box-shadow:
        0 20px 60px var(--accent-shadow),
        inset 0 1px 0 rgba(255, 255, 255, 0.15);
}

.experience-placeholder {
    width: 100%;
    height: 100%;
    background: linear-gradient(135deg, rgba(30, 27, 75, 0.6) 0%, rgba(49, 46, 129, 0.4) 100%);
    border-radius: 16px;
    display: flex;
    align-items: center;
    justify-content: center;
    color: var(--accent);
    font-size: 56px;
    font-weight: 200;
}

.experience-label {
    color: #ddd6fe;
    font-size: 18px;
    font-weight: 600;
    letter-spacing: -0.3px;
}

footer {
    text-align: center;
    padding: 80px 20px 60px;
    color: #9388db;
}

footer p {
    margin-bottom: 24px;
    font-size: 17px;
    font-weight: 300;
}

.footer-links {
    display: flex;
    gap: 40px;
    justify-content: center;
    flex-wrap: wrap;
    margin-top: 40px;
}

.footer-links a {
    color: var(--accent-soft);
    text-decoration: none;
    font-size: 17px;
    font-weight: 500;
    transition: all 0.3s;
}

.footer-links a:hover {
    color: #ffffff;
}

@media (max-width: 768px) {
    h1 {
        font-size: 44px;
    }

    .tagline {
        font-size: 22px;
    }

    .features h2,
    .experience h2 {
        font-size: 36px;
    }

    .btn {
        padding: 16px 36px;
        font-size: 16px;
    }

    .feature-card {
        padding: 36px;
    }
}
"##;

const CONCEPT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }} - Spatial Computing for Vision Pro</title>
    <meta name="description" content="{{ description }}">
    <meta name="keywords" content="visionOS, Vision Pro, Spatial Computing, {{ title }}, 3D Interface, Mixed Reality">
    <style>
{{ stylesheet | safe }}
    </style>
</head>
<body>
    <div class="bg-layer bg-layer-1"></div>
    <div class="bg-layer bg-layer-2"></div>

    <div class="container">
        <header>
            <div class="hero-badge">Built for Apple Vision Pro</div>
            <div class="logo-container">
                <div class="logo-icon">{{ logo }}</div>
            </div>
            <h1>{{ title }}</h1>
            <p class="tagline">{{ tagline }}</p>
            <p class="hero-message">
                {{ description }}
            </p>
            <div class="cta-buttons">
                <a href="#" class="btn btn-primary">
                    <span>Download for Vision Pro</span>
                </a>
                <a href="#features" class="btn btn-secondary">
                    <span>Explore Spatial Features</span>
                </a>
            </div>
        </header>

        <section class="features" id="features">
            <h2>Spatial Computing Reimagined</h2>
            <p class="section-subtitle">Pillars of immersive spatial experience</p>

            <div class="feature-grid">
{% for feature in features %}                <div class="feature-card">
                    <div class="feature-icon">{{ feature.glyph }}</div>
                    <h3>{{ feature.title }}</h3>
                    <p>{{ feature.description }}</p>
                </div>
{% endfor %}            </div>
        </section>

        <section class="experience">
            <h2>Experience in Spatial Reality</h2>
            <div class="experience-grid">
                <div class="experience-item">
                    <div class="experience-frame">
                        <div class="experience-placeholder">∞</div>
                    </div>
                    <div class="experience-label">Spatial View</div>
                </div>

                <div class="experience-item">
                    <div class="experience-frame">
                        <div class="experience-placeholder">◇</div>
                    </div>
                    <div class="experience-label">Gesture Control</div>
                </div>

                <div class="experience-item">
                    <div class="experience-frame">
                        <div class="experience-placeholder">⚡</div>
                    </div>
                    <div class="experience-label">Real-Time</div>
                </div>

                <div class="experience-item">
                    <div class="experience-frame">
                        <div class="experience-placeholder">🌊</div>
                    </div>
                    <div class="experience-label">Immersive Mode</div>
                </div>
            </div>
        </section>

        <footer>
            <p>{{ title }} — Spatial Computing for Vision Pro</p>
            <p>&copy; 2024 {{ title }}. Designed for the spatial computing era.</p>
            <div class="footer-links">
                <a href="#">Privacy Policy</a>
                <a href="#">Documentation</a>
                <a href="#">Developer API</a>
                <a href="#">Support</a>
            </div>
        </footer>
    </div>
</body>
</html>"##;

const STOREFRONT_CSS: &str = r##":root {
    --accent: {{ accent }};
    --accent-soft: {{ accent_secondary }};
    --accent-glow: rgba{{ scale.glow }};
    --accent-border: rgba{{ scale.border }};
    --accent-shadow: rgba{{ scale.shadow }};
    --accent-hover: rgba{{ scale.hover }};
    --secondary-glow: rgba{{ secondary_glow }};
}

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'SF Pro Display', 'Segoe UI', Roboto, sans-serif;
    line-height: 1.6;
    color: #ffffff;
    background: #05050a;
    min-height: 100vh;
    overflow-x: hidden;
    position: relative;
}

.bg-layer {
    position: fixed;
    width: 100%;
    height: 100%;
    top: 0;
    left: 0;
    pointer-events: none;
}

.bg-layer-1 {
    background: radial-gradient(circle at 15% 20%, var(--accent-glow) 0%, transparent 45%);
    z-index: 1;
}

.bg-layer-2 {
    background: radial-gradient(circle at 85% 80%, var(--secondary-glow) 0%, transparent 45%);
    z-index: 2;
}

.container {
    max-width: 1400px;
    margin: 0 auto;
    padding: 40px 20px;
    position: relative;
    z-index: 10;
}

header {
    text-align: center;
    padding: 70px 20px 40px;
}

.genre-badge {
    display: inline-block;
    padding: 10px 24px;
    background: var(--accent-border);
    border: 2px solid var(--accent-hover);
    border-radius: 8px;
    font-size: 15px;
    color: #ffffff;
    font-weight: 800;
    letter-spacing: 3px;
    text-transform: uppercase;
    margin-bottom: 30px;
    animation: pulse 2s ease-in-out infinite;
}

@keyframes pulse {
    0%, 100% { box-shadow: 0 0 20px var(--accent-shadow); }
    50% { box-shadow: 0 0 40px var(--accent-hover); }
}

.logo-icon {
    width: 130px;
    height: 130px;
    background: linear-gradient(135deg, var(--accent) 0%, var(--accent-soft) 100%);
    border: 3px solid var(--accent-hover);
    border-radius: 32px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 64px;
    margin: 0 auto 40px;
    box-shadow:
        0 24px 70px var(--accent-hover),
        0 0 100px var(--accent-shadow);
}

h1 {
    font-size: 72px;
    font-weight: 900;
    background: linear-gradient(135deg, #ffffff 0%, var(--accent-soft) 50%, var(--accent) 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    background-clip: text;
    margin-bottom: 20px;
    line-height: 1.05;
    letter-spacing: -2px;
    text-transform: uppercase;
}

.tagline {
    font-size: 26px;
    color: var(--accent-soft);
    margin-bottom: 24px;
    font-weight: 700;
    letter-spacing: 1px;
    text-transform: uppercase;
}

.hero-message {
    font-size: 18px;
    color: rgba(255, 255, 255, 0.75);
    font-weight: 300;
    max-width: 720px;
    margin: 0 auto;
    line-height: 1.8;
}

.pricing {
    text-align: center;
    padding: 50px 20px;
    background: rgba(20, 18, 40, 0.5);
    backdrop-filter: blur(20px);
    border-radius: 28px;
    border: 1px solid var(--accent-border);
    margin-bottom: 60px;
}

.demo-badge {
    display: inline-block;
    padding: 6px 18px;
    background: rgba(16, 185, 129, 0.2);
    border: 1px solid rgba(16, 185, 129, 0.5);
    border-radius: 16px;
    font-size: 14px;
    color: #34d399;
    font-weight: 600;
    margin-bottom: 20px;
}

.price-tag {
    font-size: 64px;
    font-weight: 900;
    color: #ffffff;
    text-shadow: 0 0 40px var(--accent-hover);
    margin-bottom: 8px;
}

.price-note {
    font-size: 16px;
    color: rgba(255, 255, 255, 0.6);
    margin-bottom: 36px;
}

.cta-buttons {
    display: flex;
    gap: 18px;
    justify-content: center;
    flex-wrap: wrap;
    margin-bottom: 36px;
}

.btn {
    padding: 18px 42px;
    font-size: 17px;
    font-weight: 700;
    border: none;
    border-radius: 14px;
    cursor: pointer;
    text-decoration: none;
    display: inline-flex;
    align-items: center;
    gap: 10px;
    transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
}

.btn-primary {
    background: linear-gradient(135deg, var(--accent) 0%, var(--accent-soft) 100%);
    color: #ffffff;
    box-shadow: 0 8px 30px var(--accent-hover);
}

.btn-primary:hover {
    transform: translateY(-3px) scale(1.03);
    box-shadow: 0 14px 44px var(--accent-hover);
}

.btn-secondary {
    background: var(--accent-glow);
    color: var(--accent-soft);
    border: 2px solid var(--accent-border);
}

.btn-secondary:hover {
    background: var(--accent-border);
    border-color: var(--accent-hover);
    transform: translateY(-3px);
}

.age-rating {
    display: inline-flex;
    align-items: center;
    gap: 14px;
    text-align: left;
}

.rating-badge {
    width: 52px;
    height: 52px;
    background: #ffffff;
    color: #05050a;
    border-radius: 10px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 22px;
    font-weight: 900;
}

.rating-text {
    font-size: 14px;
    color: rgba(255, 255, 255, 0.7);
    line-height: 1.5;
}

.stat-strip {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
    gap: 24px;
    padding: 0 20px;
    margin-bottom: 80px;
}

.stat-item {
    text-align: center;
    padding: 28px 20px;
    background: rgba(20, 18, 40, 0.45);
    border: 1px solid var(--accent-border);
    border-radius: 18px;
}

.stat-value {
    display: block;
    font-size: 30px;
    font-weight: 900;
    color: var(--accent-soft);
    margin-bottom: 6px;
}

.stat-label {
    display: block;
    font-size: 13px;
    color: rgba(255, 255, 255, 0.55);
    letter-spacing: 2px;
    text-transform: uppercase;
}

.section {
    padding: 70px 20px;
}

.section-title {
    text-align: center;
    font-size: 44px;
    font-weight: 900;
    color: #ffffff;
    margin-bottom: 60px;
    letter-spacing: 1px;
    text-transform: uppercase;
}

.mode-grid {
    display: flex;
    gap: 16px;
    justify-content: center;
    flex-wrap: wrap;
}

.mode-badge {
    padding: 14px 30px;
    background: var(--accent-glow);
    border: 1px solid var(--accent-border);
    border-radius: 30px;
    font-size: 16px;
    font-weight: 700;
    color: #ffffff;
    transition: all 0.3s;
}

.mode-badge:hover {
    background: var(--accent-border);
    border-color: var(--accent-hover);
    transform: translateY(-3px);
}

.feature-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
    gap: 36px;
}

.feature-card {
    background: rgba(20, 18, 40, 0.5);
    backdrop-filter: blur(20px);
    padding: 44px;
    border-radius: 22px;
    border: 1px solid var(--accent-border);
    transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
}

.feature-card:hover {
    transform: translateY(-8px);
    border-color: var(--accent-hover);
    box-shadow: 0 16px 48px var(--accent-shadow);
}

.feature-icon {
    width: 64px;
    height: 64px;
    background: linear-gradient(135deg, var(--accent-shadow) 0%, var(--accent-border) 100%);
    border: 1px solid var(--accent-border);
    border-radius: 16px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 30px;
    margin-bottom: 24px;
}

.feature-card h3 {
    font-size: 24px;
    margin-bottom: 14px;
    color: var(--accent-soft);
    font-weight: 800;
}

.feature-card p {
    color: rgba(255, 255, 255, 0.7);
    line-height: 1.8;
    font-size: 16px;
    font-weight: 300;
}

.testimonial-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 32px;
}

.testimonial-card {
    background: rgba(20, 18, 40, 0.5);
    padding: 36px;
    border-radius: 20px;
    border: 1px solid var(--accent-border);
}

.testimonial-quote {
    font-size: 17px;
    color: rgba(255, 255, 255, 0.85);
    line-height: 1.8;
    font-style: italic;
    margin-bottom: 24px;
}

.testimonial-author {
    display: flex;
    align-items: center;
    gap: 14px;
}

.author-avatar {
    width: 44px;
    height: 44px;
    background: linear-gradient(135deg, var(--accent) 0%, var(--accent-soft) 100%);
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 18px;
    font-weight: 800;
    color: #ffffff;
}

.author-name {
    font-size: 15px;
    font-weight: 700;
}

.author-stars {
    font-size: 13px;
}

.gallery-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 32px;
}

.gallery-card {
    background: rgba(30, 27, 60, 0.4);
    border: 2px solid var(--accent-border);
    border-radius: 22px;
    aspect-ratio: 16 / 9;
    display: flex;
    align-items: center;
    justify-content: center;
    transition: all 0.3s;
}

.gallery-card:hover {
    border-color: var(--accent-hover);
    box-shadow: 0 16px 50px var(--accent-shadow);
    transform: translateY(-6px);
}

.gallery-placeholder {
    font-size: 15px;
    font-weight: 800;
    letter-spacing: 2px;
    color: var(--accent-soft);
    text-transform: uppercase;
}

.requirements-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 24px;
    max-width: 1100px;
    margin: 0 auto;
}

.requirement-item {
    display: flex;
    gap: 18px;
    padding: 26px;
    background: rgba(20, 18, 40, 0.45);
    border: 1px solid var(--accent-border);
    border-radius: 16px;
}

.requirement-icon {
    font-size: 28px;
    flex-shrink: 0;
}

.requirement-content h4 {
    font-size: 16px;
    font-weight: 800;
    margin-bottom: 6px;
    color: var(--accent-soft);
}

.requirement-content p {
    font-size: 14px;
    color: rgba(255, 255, 255, 0.65);
    line-height: 1.6;
}

footer {
    text-align: center;
    padding: 80px 20px 60px;
    color: rgba(255, 255, 255, 0.55);
}

footer p {
    margin-bottom: 20px;
    font-size: 16px;
    font-weight: 300;
}

.footer-links {
    display: flex;
    gap: 36px;
    justify-content: center;
    flex-wrap: wrap;
    margin-top: 36px;
}

.footer-links a {
    color: var(--accent-soft);
    text-decoration: none;
    font-size: 16px;
    font-weight: 600;
    transition: all 0.3s;
}

.footer-links a:hover {
    color: #ffffff;
}

@media (max-width: 768px) {
    h1 {
        font-size: 46px;
    }

    .tagline {
        font-size: 20px;
    }

    .section-title {
        font-size: 32px;
    }

    .price-tag {
        font-size: 48px;
    }

    .feature-card {
        padding: 32px;
    }
}
"##;

const STOREFRONT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }} - {{ storefront.genre }} for Vision Pro</title>
    <meta name="description" content="{{ description }}">
    <meta name="keywords" content="visionOS, Vision Pro, Spatial Gaming, {{ title }}, {{ storefront.genre }}, Mixed Reality">
    <style>
{{ stylesheet | safe }}
    </style>
</head>
<body>
    <div class="bg-layer bg-layer-1"></div>
    <div class="bg-layer bg-layer-2"></div>

    <div class="container">
        <header>
            <div class="genre-badge">{{ storefront.genre }}</div>
            <div class="logo-icon">{{ logo }}</div>
            <h1>{{ title }}</h1>
            <p class="tagline">{{ tagline }}</p>
            <p class="hero-message">
                {{ description }}
            </p>
        </header>

        <section class="pricing">
{% if storefront.free_demo %}            <div class="demo-badge">✨ Free Demo Available</div>
{% endif %}            <div class="price-tag">{{ storefront.price }}</div>
            <p class="price-note">{{ storefront.price_note }}</p>

            <div class="cta-buttons">
                <a href="#" class="btn btn-primary">📱 Download on App Store</a>
                <a href="#" class="btn btn-secondary">🎬 Watch Trailer</a>
            </div>

            <div class="age-rating">
                <div class="rating-badge">{{ storefront.rating_code }}</div>
                <div class="rating-text">
                    <strong>{{ storefront.rating_desc }}</strong><br>
                    Accessibility: Subtitles, Colorblind Mode, Seated Play
                </div>
            </div>
        </section>

        <section class="stat-strip">
            <div class="stat-item">
                <span class="stat-value">{{ storefront.player_count }}</span>
                <span class="stat-label">Players</span>
            </div>
            <div class="stat-item">
                <span class="stat-value">⭐ {{ storefront.rating }}</span>
                <span class="stat-label">Rating</span>
            </div>
            <div class="stat-item">
                <span class="stat-value">{{ storefront.intensity }}</span>
                <span class="stat-label">Intensity</span>
            </div>
            <div class="stat-item">
                <span class="stat-value">{{ storefront.space_needed }}</span>
                <span class="stat-label">Space</span>
            </div>
        </section>

        <section class="section">
            <h2 class="section-title">Game Modes</h2>
            <div class="mode-grid">
{% for mode in storefront.modes %}                <div class="mode-badge">{{ mode }}</div>
{% endfor %}            </div>
        </section>

        <section class="section" id="features">
            <h2 class="section-title">Epic Gameplay Features</h2>
            <div class="feature-grid">
{% for feature in features %}                <div class="feature-card">
                    <div class="feature-icon">{{ feature.glyph }}</div>
                    <h3>{{ feature.title }}</h3>
                    <p>{{ feature.description }}</p>
                </div>
{% endfor %}            </div>
        </section>

        <section class="section">
            <h2 class="section-title">Player Reviews</h2>
            <div class="testimonial-grid">
                <div class="testimonial-card">
                    <p class="testimonial-quote">Most immersive experience I've ever had. My room truly becomes the game world!</p>
                    <div class="testimonial-author">
                        <div class="author-avatar">A</div>
                        <div class="author-info">
                            <div class="author-name">Alex M.</div>
                            <div class="author-stars">⭐⭐⭐⭐⭐</div>
                        </div>
                    </div>
                </div>
                <div class="testimonial-card">
                    <p class="testimonial-quote">The spatial mechanics are mind-blowing. This is the future of gaming.</p>
                    <div class="testimonial-author">
                        <div class="author-avatar">S</div>
                        <div class="author-info">
                            <div class="author-name">Sarah K.</div>
                            <div class="author-stars">⭐⭐⭐⭐⭐</div>
                        </div>
                    </div>
                </div>
                <div class="testimonial-card">
                    <p class="testimonial-quote">Can't stop playing! The physicality makes every session feel like a workout.</p>
                    <div class="testimonial-author">
                        <div class="author-avatar">J</div>
                        <div class="author-info">
                            <div class="author-name">James R.</div>
                            <div class="author-stars">⭐⭐⭐⭐⭐</div>
                        </div>
                    </div>
                </div>
            </div>
        </section>

        <section class="section">
            <h2 class="section-title">Gameplay Gallery</h2>
            <div class="gallery-grid">
                <div class="gallery-card">
                    <div class="gallery-placeholder">Action Screenshot</div>
                </div>
                <div class="gallery-card">
                    <div class="gallery-placeholder">Combat Moment</div>
                </div>
                <div class="gallery-card">
                    <div class="gallery-placeholder">Special Ability</div>
                </div>
                <div class="gallery-card">
                    <div class="gallery-placeholder">Multiplayer Action</div>
                </div>
            </div>
        </section>

        <section class="section">
            <h2 class="section-title">System Requirements</h2>
            <div class="requirements-grid">
                <div class="requirement-item">
                    <div class="requirement-icon">📱</div>
                    <div class="requirement-content">
                        <h4>Device</h4>
                        <p>Apple Vision Pro with visionOS 1.0 or later</p>
                    </div>
                </div>
                <div class="requirement-item">
                    <div class="requirement-icon">💾</div>
                    <div class="requirement-content">
                        <h4>Storage</h4>
                        <p>3.5 GB available space required</p>
                    </div>
                </div>
                <div class="requirement-item">
                    <div class="requirement-icon">🎮</div>
                    <div class="requirement-content">
                        <h4>Controls</h4>
                        <p>Hand tracking or compatible controllers</p>
                    </div>
                </div>
                <div class="requirement-item">
                    <div class="requirement-icon">📏</div>
                    <div class="requirement-content">
                        <h4>Play Space</h4>
                        <p>{{ storefront.space_needed }} • 2m x 2m recommended</p>
                    </div>
                </div>
                <div class="requirement-item">
                    <div class="requirement-icon">🌐</div>
                    <div class="requirement-content">
                        <h4>Internet</h4>
                        <p>Required for multiplayer and updates</p>
                    </div>
                </div>
                <div class="requirement-item">
                    <div class="requirement-icon">♿</div>
                    <div class="requirement-content">
                        <h4>Accessibility</h4>
                        <p>Subtitles, colorblind mode, seated play option</p>
                    </div>
                </div>
            </div>
        </section>

        <footer>
            <p>{{ title }} — {{ storefront.genre }} for Apple Vision Pro</p>
            <p>&copy; 2024 {{ title }}. Designed for the spatial computing era.</p>
            <div class="footer-links">
                <a href="#">Privacy Policy</a>
                <a href="#">Community</a>
                <a href="#">Press Kit</a>
                <a href="#">Support</a>
            </div>
        </footer>
    </div>
</body>
</html>"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::AccentScale;

    fn context() -> PageContext {
        PageContext {
            title: "Demo App".to_string(),
            tagline: "X".to_string(),
            description: "Y".to_string(),
            logo: "DA".to_string(),
            accent: "#2563eb".to_string(),
            accent_secondary: "#2563eb".to_string(),
            scale: AccentScale::derive("#2563eb").unwrap(),
            secondary_glow: "(37, 99, 235, 0.15)".to_string(),
            features: vec![
                Feature {
                    glyph: "🔧".to_string(),
                    title: "Feat1".to_string(),
                    description: "Desc1".to_string(),
                },
                Feature {
                    glyph: "🎯".to_string(),
                    title: "Feat2".to_string(),
                    description: "Desc2".to_string(),
                },
            ],
            storefront: None,
        }
    }

    fn storefront_context() -> PageContext {
        let mut ctx = context();
        ctx.storefront = Some(StorefrontContext {
            genre: "ACTION SPORTS".to_string(),
            price: "$9.99".to_string(),
            price_note: "One-Time Purchase • No Subscriptions".to_string(),
            free_demo: false,
            player_count: "25K+".to_string(),
            rating: "4.8".to_string(),
            intensity: "High Intensity".to_string(),
            space_needed: "Standing Space".to_string(),
            rating_code: "E".to_string(),
            rating_desc: "Everyone".to_string(),
            modes: vec!["Story Campaign".to_string(), "Time Attack".to_string()],
        });
        ctx
    }

    #[test]
    fn renders_concept_page() {
        let engine = TemplateEngine::new();
        let ctx = context();

        let css = engine
            .render_stylesheet(PageVariant::Concept, &ctx)
            .unwrap();
        let html = engine.render_page(PageVariant::Concept, &ctx, &css).unwrap();

        assert!(html.contains("<title>Demo App - Spatial Computing for Vision Pro</title>"));
        assert!(html.contains("Feat1"));
        assert!(html.contains("Desc1"));
        assert!(html.contains("rgba(37, 99, 235, 0.15)"));
    }

    #[test]
    fn stylesheet_binds_accent_variables() {
        let engine = TemplateEngine::new();
        let css = engine
            .render_stylesheet(PageVariant::Concept, &context())
            .unwrap();

        assert!(css.contains("--accent: #2563eb;"));
        assert!(css.contains("--accent-glow: rgba(37, 99, 235, 0.15);"));
        assert!(css.contains("--accent-border: rgba(37, 99, 235, 0.2);"));
        assert!(css.contains("--accent-shadow: rgba(37, 99, 235, 0.3);"));
        assert!(css.contains("--accent-hover: rgba(37, 99, 235, 0.5);"));
    }

    #[test]
    fn feature_cards_keep_input_order() {
        let engine = TemplateEngine::new();
        let ctx = context();
        let css = engine
            .render_stylesheet(PageVariant::Concept, &ctx)
            .unwrap();
        let html = engine.render_page(PageVariant::Concept, &ctx, &css).unwrap();

        let first = html.find("Feat1").unwrap();
        let second = html.find("Feat2").unwrap();
        assert!(first < second);
    }

    #[test]
    fn zero_features_render_an_empty_grid() {
        let engine = TemplateEngine::new();
        let mut ctx = context();
        ctx.features.clear();

        let css = engine
            .render_stylesheet(PageVariant::Concept, &ctx)
            .unwrap();
        let html = engine.render_page(PageVariant::Concept, &ctx, &css).unwrap();

        assert!(html.contains(r#"<div class="feature-grid">"#));
        assert!(!html.contains(r#"<div class="feature-card">"#));
    }

    #[test]
    fn escapes_html_in_record_copy() {
        let engine = TemplateEngine::new();
        let mut ctx = context();
        ctx.title = "Cats & <Dogs>".to_string();

        let css = engine
            .render_stylesheet(PageVariant::Concept, &ctx)
            .unwrap();
        let html = engine.render_page(PageVariant::Concept, &ctx, &css).unwrap();

        assert!(html.contains("Cats &amp; &lt;Dogs&gt;"));
        assert!(!html.contains("Cats & <Dogs>"));
    }

    #[test]
    fn renders_storefront_sections() {
        let engine = TemplateEngine::new();
        let ctx = storefront_context();

        let css = engine
            .render_stylesheet(PageVariant::Storefront, &ctx)
            .unwrap();
        let html = engine
            .render_page(PageVariant::Storefront, &ctx, &css)
            .unwrap();

        assert!(html.contains("ACTION SPORTS"));
        assert!(html.contains("$9.99"));
        assert!(html.contains("One-Time Purchase"));
        assert!(html.contains("Story Campaign"));
        assert!(html.contains("System Requirements"));
        assert!(html.contains("Standing Space • 2m x 2m recommended"));
        assert!(!html.contains("Free Demo Available"));
    }

    #[test]
    fn storefront_shows_demo_badge_for_free_tiers() {
        let engine = TemplateEngine::new();
        let mut ctx = storefront_context();
        if let Some(sf) = ctx.storefront.as_mut() {
            sf.free_demo = true;
        }

        let css = engine
            .render_stylesheet(PageVariant::Storefront, &ctx)
            .unwrap();
        let html = engine
            .render_page(PageVariant::Storefront, &ctx, &css)
            .unwrap();

        assert!(html.contains("Free Demo Available"));
    }
}
