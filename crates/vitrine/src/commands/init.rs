//! Initialize a vitrine project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing vitrine...");

    let catalog_dir = Path::new("catalogs");

    // Check if catalogs already exists
    if catalog_dir.exists() {
        if !yes {
            tracing::warn!("catalogs/ directory already exists. Use --yes to overwrite.");
            return Ok(());
        }
    } else {
        fs::create_dir_all(catalog_dir).context("Failed to create catalogs directory")?;
    }

    // Create default config
    let config_path = Path::new("vitrine.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write vitrine.toml")?;
        tracing::info!("Created vitrine.toml");
    }

    // Create starter catalog
    let concepts_path = catalog_dir.join("concepts.toml");
    if !concepts_path.exists() || yes {
        fs::write(&concepts_path, DEFAULT_CATALOG)
            .context("Failed to write catalogs/concepts.toml")?;
        tracing::info!("Created catalogs/concepts.toml");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'vitrine build' to generate the landing pages.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Vitrine Configuration

[catalog]
# Directory containing catalog files
dir = "catalogs"

[build]
# Base directory for generated pages
output = "apps"

# Minify inline stylesheets
minify = false
"#;

const DEFAULT_CATALOG: &str = r#"# One catalog file per product segment. Every [[app]] entry becomes a
# landing page published to {output}/{id}/docs/index.html and
# {output}/{id}/landing-page/index.html.

title = "App concepts"
variant = "concept"

[[app]]
id = "financial-trading-cockpit"
title = "Financial Trading Cockpit"
logo = "FT"
accent = "#10b981"
accent_secondary = "#34d399"
tagline = "Trade Markets in Immersive 3D Reality"
description = "Surround yourself with live market data in unlimited 3D space. Track portfolios room-scale, execute trades with gestures, and make split-second decisions from your personal trading command center."

[[app.features]]
glyph = "📈"
title = "Spatial Market Walls"
description = "Arrange unlimited charts, tickers, and indicators across room-scale 3D. Organize by asset class, sector, or strategy."

[[app.features]]
glyph = "⚡"
title = "Gesture Trading"
description = "Execute trades with pinch gestures. Swipe to rebalance portfolios. Natural hand control for lightning-fast execution."

[[app.features]]
glyph = "🌐"
title = "Multi-Market Monitoring"
description = "Watch stocks, crypto, forex, commodities simultaneously. All markets visible at once in spatial arrangement."

[[app.features]]
glyph = "📊"
title = "Live Data Streams"
description = "Real-time Level 2 quotes, order books, news feeds float around you. Every data point accessible with a glance."

[[app.features]]
glyph = "🔔"
title = "Spatial Alerts"
description = "Price alerts appear as 3D notifications at relevant charts. Size and color indicate urgency and direction."
"#;
