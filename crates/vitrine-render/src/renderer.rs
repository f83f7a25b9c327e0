//! Rendering pipeline: record in, complete HTML document out.

use vitrine_catalog::{AppRecord, PageVariant, StorefrontMeta};

use crate::color::{self, to_rgba, AccentScale, ColorError};
use crate::templates::{PageContext, StorefrontContext, TemplateEngine};

/// Options for a [`PageRenderer`].
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Minify the inline stylesheet with lightningcss.
    pub minify: bool,
}

/// Errors that can occur while rendering a page.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("Failed to render template: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Failed to minify stylesheet: {0}")]
    Minify(String),
}

/// Renders one [`AppRecord`] into a self-contained HTML document.
pub struct PageRenderer {
    engine: TemplateEngine,
    minify: bool,
}

impl PageRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            engine: TemplateEngine::new(),
            minify: options.minify,
        }
    }

    /// Render the full document for one record.
    ///
    /// Output is deterministic: the same record always yields the same
    /// bytes. Records should already have passed
    /// [`AppRecord::validate`]; a malformed accent color still fails here
    /// rather than producing broken CSS.
    pub fn render(&self, record: &AppRecord, variant: PageVariant) -> Result<String, RenderError> {
        let accent = color::normalize(&record.accent)?;
        let accent_secondary = match &record.accent_secondary {
            Some(secondary) => color::normalize(secondary)?,
            None => accent.clone(),
        };

        // All alpha variants are derived once here; the templates only
        // reference the resulting custom properties.
        let scale = AccentScale::derive(&accent)?;
        let secondary_glow = to_rgba(&accent_secondary, 0.15)?;

        let ctx = PageContext {
            title: record.title.clone(),
            tagline: record.tagline.clone(),
            description: record.description.clone(),
            logo: record.logo.clone(),
            accent,
            accent_secondary,
            scale,
            secondary_glow,
            features: record.features.clone(),
            storefront: record.storefront.as_ref().map(storefront_context),
        };

        let mut stylesheet = self.engine.render_stylesheet(variant, &ctx)?;
        if self.minify {
            stylesheet = minify_css(&stylesheet)?;
        }

        let html = self.engine.render_page(variant, &ctx, &stylesheet)?;
        tracing::debug!(
            "Rendered {} ({} bytes, {} template)",
            record.id,
            html.len(),
            variant.as_str()
        );
        Ok(html)
    }
}

fn storefront_context(meta: &StorefrontMeta) -> StorefrontContext {
    let free_tier = meta.price.contains("FREE");
    let (rating_code, rating_desc) = age_rating(&meta.genre);

    StorefrontContext {
        genre: meta.genre.clone(),
        price: meta.price.clone(),
        price_note: if free_tier {
            "Plus In-App Purchases".to_string()
        } else {
            "One-Time Purchase • No Subscriptions".to_string()
        },
        free_demo: free_tier || matches!(meta.price.as_str(), "$4.99" | "$5.99"),
        player_count: meta.player_count.clone(),
        rating: meta.rating.clone(),
        intensity: meta.intensity.clone(),
        space_needed: meta.space_needed.clone(),
        rating_code: rating_code.to_string(),
        rating_desc: rating_desc.to_string(),
        modes: meta.modes.clone(),
    }
}

/// Age rating by genre, matching the store listings the pages advertise.
fn age_rating(genre: &str) -> (&'static str, &'static str) {
    match genre {
        "ACTION SPORTS" | "SANDBOX BUILDING" | "WELLNESS EXPERIENCE" => ("E", "Everyone"),
        "TACTICAL FPS" => ("T", "Teen • Fantasy Violence"),
        "FANTASY RPG" => ("T", "Teen • Fantasy Violence, Mild Language"),
        "TOWER DEFENSE" => ("E10+", "Everyone 10+ • Fantasy Violence"),
        _ => ("E10+", "Everyone 10+"),
    }
}

/// Minify CSS using lightningcss.
fn minify_css(css: &str) -> Result<String, RenderError> {
    use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

    let stylesheet = StyleSheet::parse(css, ParserOptions::default())
        .map_err(|e| RenderError::Minify(e.to_string()))?;

    let minified = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| RenderError::Minify(e.to_string()))?;

    Ok(minified.code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_catalog::Feature;

    fn demo_record() -> AppRecord {
        AppRecord {
            id: "demo-app".to_string(),
            title: "Demo App".to_string(),
            logo: "DA".to_string(),
            accent: "#2563eb".to_string(),
            accent_secondary: None,
            tagline: "X".to_string(),
            description: "Y".to_string(),
            features: vec![Feature {
                glyph: "🔧".to_string(),
                title: "Feat1".to_string(),
                description: "Desc1".to_string(),
            }],
            storefront: None,
        }
    }

    #[test]
    fn round_trips_record_copy_into_the_document() {
        let renderer = PageRenderer::new(RenderOptions::default());
        let html = renderer
            .render(&demo_record(), PageVariant::Concept)
            .unwrap();

        assert!(html.contains("Demo App"));
        assert!(html.contains("Feat1"));
        assert!(html.contains("Desc1"));
        assert!(html.contains("(37, 99, 235, 0.15)"));
    }

    #[test]
    fn document_honors_the_structural_contract() {
        let renderer = PageRenderer::new(RenderOptions::default());
        let html = renderer
            .render(&demo_record(), PageVariant::Concept)
            .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<meta charset="UTF-8">"#));
        assert!(html.contains(r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#));
        assert_eq!(html.matches("<style>").count(), 1);

        // Body order: hero, then feature cards, then gallery, then footer.
        let hero = html.find("<header>").unwrap();
        let features = html.find(r#"<div class="feature-grid">"#).unwrap();
        let gallery = html.find(r#"class="experience""#).unwrap();
        let footer = html.find("<footer>").unwrap();
        assert!(hero < features && features < gallery && gallery < footer);
    }

    #[test]
    fn rendering_is_deterministic() {
        let renderer = PageRenderer::new(RenderOptions::default());
        let first = renderer
            .render(&demo_record(), PageVariant::Concept)
            .unwrap();
        let second = renderer
            .render(&demo_record(), PageVariant::Concept)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn secondary_accent_falls_back_to_accent() {
        let renderer = PageRenderer::new(RenderOptions::default());
        let html = renderer
            .render(&demo_record(), PageVariant::Concept)
            .unwrap();
        assert!(html.contains("--accent-soft: #2563eb;"));
    }

    #[test]
    fn malformed_accent_fails_rendering() {
        let renderer = PageRenderer::new(RenderOptions::default());
        let mut record = demo_record();
        record.accent = "#25".to_string();

        assert!(matches!(
            renderer.render(&record, PageVariant::Concept),
            Err(RenderError::Color(_))
        ));
    }

    #[test]
    fn renders_storefront_metadata() {
        let renderer = PageRenderer::new(RenderOptions::default());
        let mut record = demo_record();
        record.storefront = Some(StorefrontMeta {
            genre: "ACTION SPORTS".to_string(),
            price: "$9.99".to_string(),
            player_count: "25K+".to_string(),
            rating: "4.8".to_string(),
            intensity: "High Intensity".to_string(),
            space_needed: "Standing Space".to_string(),
            modes: vec!["Story Campaign".to_string()],
        });

        let html = renderer
            .render(&record, PageVariant::Storefront)
            .unwrap();

        assert!(html.contains("ACTION SPORTS"));
        assert!(html.contains("$9.99"));
        assert!(html.contains("Everyone"));
        assert!(html.contains("Story Campaign"));
    }

    #[test]
    fn minifies_css() {
        let css = ".feature-card {\n    color: red;\n    padding: 10px;\n}\n";
        let minified = minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".feature-card"));
    }
}
