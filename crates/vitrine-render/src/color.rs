//! Accent color conversion.

/// Errors that can occur converting a color.
#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    #[error("Invalid color {0:?}: expected 6 hex digits with optional leading '#'")]
    InvalidFormat(String),
}

/// Convert a hex color and an alpha into an RGBA component list.
///
/// Returns the parenthesized components, e.g. `(16, 185, 129, 0.5)`, ready
/// to splice into an `rgba(...)` expression in CSS. The leading `#` is
/// optional. A whole-number alpha keeps one decimal place so `1.0` stays
/// `1.0` in the output.
pub fn to_rgba(hex: &str, alpha: f64) -> Result<String, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    // from_str_radix tolerates a leading '+', so check digit-by-digit.
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidFormat(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| ColorError::InvalidFormat(hex.to_string()))
    };

    let r = channel(0..2)?;
    let g = channel(2..4)?;
    let b = channel(4..6)?;

    Ok(format!("({}, {}, {}, {})", r, g, b, format_alpha(alpha)))
}

/// Validate a hex color and normalize it to `#rrggbb` form.
pub fn normalize(hex: &str) -> Result<String, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidFormat(hex.to_string()));
    }
    Ok(format!("#{digits}"))
}

fn format_alpha(alpha: f64) -> String {
    if alpha == alpha.trunc() {
        format!("{alpha:.1}")
    } else {
        alpha.to_string()
    }
}

/// The fixed alpha variants of the accent color a page uses, computed once
/// per record and referenced everywhere through CSS custom properties.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AccentScale {
    /// Background glows (alpha 0.15).
    pub glow: String,
    /// Card and badge borders (alpha 0.2).
    pub border: String,
    /// Drop shadows (alpha 0.3).
    pub shadow: String,
    /// Hover emphasis (alpha 0.5).
    pub hover: String,
}

impl AccentScale {
    pub fn derive(accent: &str) -> Result<Self, ColorError> {
        Ok(Self {
            glow: to_rgba(accent, 0.15)?,
            border: to_rgba(accent, 0.2)?,
            shadow: to_rgba(accent, 0.3)?,
            hover: to_rgba(accent, 0.5)?,
        })
    }
}
