//! Structured-generation prompt and response schema for brand plans

use serde_json::{json, Value};

use crate::brand::types::{is_valid_hex_color, BrandIdentityPlan};
use crate::error::{BrandwiseError, Result};

/// Number of secondary mark prompts a plan must carry
pub const SECONDARY_MARK_COUNT: usize = 2;

/// Number of palette entries a plan must carry
pub const PALETTE_SIZE: usize = 5;

/// Response schema handed to the structured-generation endpoint. The model
/// is constrained to return a single JSON document of this shape.
pub fn brand_identity_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "logoPrompt": {
                "type": "STRING",
                "description": "A detailed, artistic prompt for a text-to-image model to create a primary logo. Must be in English."
            },
            "secondaryMarkPrompts": {
                "type": "ARRAY",
                "description": "An array of 2 distinct prompts for generating secondary brand marks or icons.",
                "items": { "type": "STRING" }
            },
            "colorPalette": {
                "type": "ARRAY",
                "description": "A 5-color palette.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "hex": { "type": "STRING", "description": "The hex code of the color." },
                        "name": { "type": "STRING", "description": "A common name for the color." },
                        "usage": { "type": "STRING", "description": "Suggested usage for the color (e.g., 'Primary CTA', 'Background')." }
                    },
                    "required": ["hex", "name", "usage"]
                }
            },
            "fontPairing": {
                "type": "OBJECT",
                "description": "A Google Font pairing suggestion.",
                "properties": {
                    "headerFont": { "type": "STRING", "description": "Google Font for headers." },
                    "bodyFont": { "type": "STRING", "description": "Google Font for body text." }
                },
                "required": ["headerFont", "bodyFont"]
            }
        },
        "required": ["logoPrompt", "secondaryMarkPrompts", "colorPalette", "fontPairing"]
    })
}

/// Instructional template the mission is embedded in.
pub fn plan_prompt(mission: &str) -> String {
    format!(
        r#"You are a world-class branding expert. A user will provide their company mission. Your task is to generate a complete brand identity guide in a structured JSON format.

Company Mission: "{mission}"

Based on this mission, generate the following:
1. A detailed, specific, and artistic prompt for a text-to-image model to create a primary company logo. The logo should be modern, memorable, and relevant to the company's mission. Describe the style (e.g., minimalist, geometric, abstract), color scheme, and key visual elements. Example: "A minimalist, geometric logo of a stylized phoenix rising, using shades of deep blue and vibrant orange, vector art, on a clean white background."
2. An array of two (2) distinct prompts for generating secondary brand marks or icons. These should complement the primary logo but be simpler, suitable for favicons or app icons.
3. A 5-color palette. For each color, provide its hex code, a common name, and a suggested usage. The colors should be harmonious and reflect the brand's mood.
4. A Google Font pairing suggestion. Provide one font for headers and one for body text that are legible, professional, and complementary."#
    )
}

/// Parse the raw structured-generation text into a plan and enforce the
/// cardinalities the schema promises. Any violation is a schema error; the
/// operation is never retried.
pub fn parse_plan(raw: &str) -> Result<BrandIdentityPlan> {
    let plan: BrandIdentityPlan = serde_json::from_str(raw.trim())
        .map_err(|e| BrandwiseError::Schema(format!("plan is not valid JSON: {e}")))?;
    validate_plan(&plan)?;
    Ok(plan)
}

/// Shape checks beyond what deserialization enforces.
pub fn validate_plan(plan: &BrandIdentityPlan) -> Result<()> {
    if plan.secondary_mark_prompts.len() != SECONDARY_MARK_COUNT {
        return Err(BrandwiseError::Schema(format!(
            "expected {} secondary mark prompts, got {}",
            SECONDARY_MARK_COUNT,
            plan.secondary_mark_prompts.len()
        )));
    }
    if plan.color_palette.len() != PALETTE_SIZE {
        return Err(BrandwiseError::Schema(format!(
            "expected {} palette entries, got {}",
            PALETTE_SIZE,
            plan.color_palette.len()
        )));
    }
    for color in &plan.color_palette {
        if !is_valid_hex_color(&color.hex) {
            return Err(BrandwiseError::Schema(format!(
                "palette entry '{}' has malformed hex value '{}'",
                color.name, color.hex
            )));
        }
    }
    Ok(())
}
