//! Brand identity data model

use serde::{Deserialize, Serialize};

use crate::error::{BrandwiseError, Result};

/// A validated, non-blank company mission statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission(String);

impl Mission {
    /// Trims and validates the mission. Blank input is rejected before any
    /// network call happens.
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BrandwiseError::Validation(
                "mission must not be blank".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One palette entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorInfo {
    pub hex: String,
    pub name: String,
    pub usage: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FontPairing {
    pub header_font: String,
    pub body_font: String,
}

/// The structured plan produced by one structured-generation call.
/// Immutable after parsing; shape is validated separately (see
/// [`crate::brand::schema::validate_plan`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandIdentityPlan {
    pub logo_prompt: String,
    pub secondary_mark_prompts: Vec<String>,
    pub color_palette: Vec<ColorInfo>,
    pub font_pairing: FontPairing,
}

/// The aggregate deliverable: plan plus resolved image assets. Replaced
/// wholesale on every generation, never partially mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandBible {
    pub mission: String,
    pub primary_logo_url: String,
    pub secondary_mark_urls: Vec<String>,
    pub color_palette: Vec<ColorInfo>,
    pub font_pairing: FontPairing,
}

/// True for `#RRGGBB` strings (case-insensitive hex digits).
pub fn is_valid_hex_color(hex: &str) -> bool {
    let Some(digits) = hex.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mission_rejects_blank() {
        assert!(Mission::new("").is_err());
        assert!(Mission::new("   \t\n ").is_err());
    }

    #[test]
    fn test_mission_trims() {
        let mission = Mission::new("  Sell eco-friendly coffee.  ").unwrap();
        assert_eq!(mission.as_str(), "Sell eco-friendly coffee.");
    }

    #[test]
    fn test_hex_validation() {
        assert!(is_valid_hex_color("#1A2b3C"));
        assert!(is_valid_hex_color("#000000"));
        assert!(!is_valid_hex_color("1A2B3C"));
        assert!(!is_valid_hex_color("#FFF"));
        assert!(!is_valid_hex_color("#GGGGGG"));
        assert!(!is_valid_hex_color("#1234567"));
    }

    #[test]
    fn test_plan_deserializes_camel_case() {
        let raw = serde_json::json!({
            "logoPrompt": "a stylized phoenix",
            "secondaryMarkPrompts": ["a feather icon", "a flame icon"],
            "colorPalette": [
                { "hex": "#112233", "name": "Deep Blue", "usage": "Background" },
                { "hex": "#FF6600", "name": "Vivid Orange", "usage": "Primary CTA" },
                { "hex": "#FFFFFF", "name": "White", "usage": "Surfaces" },
                { "hex": "#222222", "name": "Charcoal", "usage": "Body text" },
                { "hex": "#88CCEE", "name": "Sky", "usage": "Accents" }
            ],
            "fontPairing": { "headerFont": "Montserrat", "bodyFont": "Lato" }
        })
        .to_string();
        let plan: BrandIdentityPlan = serde_json::from_str(&raw).unwrap();
        assert_eq!(plan.secondary_mark_prompts.len(), 2);
        assert_eq!(plan.color_palette.len(), 5);
        assert_eq!(plan.font_pairing.header_font, "Montserrat");
    }
}
