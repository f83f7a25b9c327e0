//! Catalog records and record-level validation.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Which page template a catalog renders with.
///
/// `Concept` is the standard marketing page; `Storefront` is the richer
/// conversion-focused page with pricing, stats and system requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageVariant {
    #[default]
    Concept,
    Storefront,
}

impl PageVariant {
    /// Stable lowercase name, used in logs and the manifest.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageVariant::Concept => "concept",
            PageVariant::Storefront => "storefront",
        }
    }
}

/// One feature card: glyph, heading, body copy. Rendered in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub glyph: String,
    pub title: String,
    pub description: String,
}

/// Store-style metadata, required for records in `storefront` catalogs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontMeta {
    pub genre: String,
    pub price: String,
    pub player_count: String,
    pub rating: String,
    pub intensity: String,
    pub space_needed: String,
    #[serde(default)]
    pub modes: Vec<String>,
}

/// One marketing page to generate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppRecord {
    /// Unique, filesystem-safe identifier; becomes the output directory name.
    pub id: String,

    /// Display name.
    pub title: String,

    /// Short glyph or initials shown in the hero logo tile.
    pub logo: String,

    /// Theme color, 6 hex digits with optional leading `#`.
    pub accent: String,

    /// Optional lighter companion color; falls back to `accent`.
    #[serde(default)]
    pub accent_secondary: Option<String>,

    /// One-line pitch.
    pub tagline: String,

    /// Paragraph of descriptive copy.
    pub description: String,

    /// Feature cards in display order. An empty list is valid.
    #[serde(default)]
    pub features: Vec<Feature>,

    /// Store metadata, only meaningful for storefront catalogs.
    #[serde(default)]
    pub storefront: Option<StorefrontMeta>,
}

/// One catalog file: a variant plus the records rendered with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Human-readable catalog name, used in logs.
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub variant: PageVariant,

    #[serde(default, rename = "app")]
    pub apps: Vec<AppRecord>,
}

/// Validation problems scoped to a single record.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Invalid accent color {value:?}: expected 6 hex digits with optional leading '#'")]
    InvalidColor { value: String },

    #[error("Identifier {id:?} is not filesystem-safe")]
    InvalidIdentifier { id: String },

    #[error("Required field `{field}` is empty")]
    EmptyField { field: &'static str },

    #[error("Storefront catalogs require an [app.storefront] block")]
    MissingStorefront,

    #[error("Duplicate identifier {id:?}")]
    DuplicateId { id: String },
}

fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("identifier pattern is valid")
    })
}

fn is_hex_color(value: &str) -> bool {
    let digits = value.strip_prefix('#').unwrap_or(value);
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

impl AppRecord {
    /// Check everything serde cannot: color formats, identifier safety,
    /// empty copy, and variant-specific requirements.
    ///
    /// Runs before any rendering or filesystem write for the batch, so a
    /// malformed record never produces output.
    pub fn validate(&self, variant: PageVariant) -> Result<(), RecordError> {
        for (field, value) in [
            ("id", &self.id),
            ("title", &self.title),
            ("logo", &self.logo),
            ("tagline", &self.tagline),
            ("description", &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(RecordError::EmptyField { field });
            }
        }

        // The id becomes a directory name under the output root. The
        // pattern rejects separators, leading dots and anything else that
        // could escape or hide inside the output tree.
        if !id_pattern().is_match(&self.id) {
            return Err(RecordError::InvalidIdentifier {
                id: self.id.clone(),
            });
        }

        if !is_hex_color(&self.accent) {
            return Err(RecordError::InvalidColor {
                value: self.accent.clone(),
            });
        }

        if let Some(secondary) = &self.accent_secondary {
            if !is_hex_color(secondary) {
                return Err(RecordError::InvalidColor {
                    value: secondary.clone(),
                });
            }
        }

        if variant == PageVariant::Storefront && self.storefront.is_none() {
            return Err(RecordError::MissingStorefront);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record() -> AppRecord {
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
    fn accepts_well_formed_record() {
        assert!(record().validate(PageVariant::Concept).is_ok());
    }

    #[test]
    fn accepts_color_without_hash() {
        let mut r = record();
        r.accent = "ea580c".to_string();
        assert!(r.validate(PageVariant::Concept).is_ok());
    }

    #[test]
    fn rejects_short_color() {
        let mut r = record();
        r.accent = "#fff".to_string();
        assert!(matches!(
            r.validate(PageVariant::Concept),
            Err(RecordError::InvalidColor { .. })
        ));
    }

    #[test]
    fn rejects_non_hex_color() {
        let mut r = record();
        r.accent = "#zzzzzz".to_string();
        assert!(matches!(
            r.validate(PageVariant::Concept),
            Err(RecordError::InvalidColor { .. })
        ));
    }

    #[test]
    fn rejects_invalid_secondary_color() {
        let mut r = record();
        r.accent_secondary = Some("#12".to_string());
        assert!(matches!(
            r.validate(PageVariant::Concept),
            Err(RecordError::InvalidColor { .. })
        ));
    }

    #[test]
    fn rejects_path_separator_in_id() {
        for id in ["a/b", "a\\b", "../escape", ".hidden"] {
            let mut r = record();
            r.id = id.to_string();
            assert!(
                matches!(
                    r.validate(PageVariant::Concept),
                    Err(RecordError::InvalidIdentifier { .. })
                ),
                "id {id:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_empty_title() {
        let mut r = record();
        r.title = "  ".to_string();
        let err = r.validate(PageVariant::Concept).unwrap_err();
        assert_eq!(err.to_string(), "Required field `title` is empty");
    }

    #[test]
    fn zero_features_is_valid() {
        let mut r = record();
        r.features.clear();
        assert!(r.validate(PageVariant::Concept).is_ok());
    }

    #[test]
    fn storefront_variant_requires_metadata() {
        let r = record();
        assert!(matches!(
            r.validate(PageVariant::Storefront),
            Err(RecordError::MissingStorefront)
        ));
    }

    #[test]
    fn concept_variant_ignores_missing_metadata() {
        assert!(record().validate(PageVariant::Concept).is_ok());
    }
}
