//! Command-line interface and output rendering

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use clap::{Parser, Subcommand};

use crate::brand::BrandBible;

#[derive(Parser)]
#[command(name = "brandwise", about = "AI brand identity generator", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a brand bible from a company mission statement
    Generate {
        /// Free-text description of the company's purpose
        mission: String,

        /// Directory to write brand-bible.json and decoded PNG assets into
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Chat with the branding assistant
    Chat,
}

/// Human-readable summary of a generated bible.
pub fn render_summary(bible: &BrandBible) -> String {
    let mut out = String::new();
    out.push_str(&format!("Brand bible for: {}\n\n", bible.mission));
    out.push_str("Color palette:\n");
    for color in &bible.color_palette {
        out.push_str(&format!(
            "  {}  {:<20} {}\n",
            color.hex, color.name, color.usage
        ));
    }
    out.push_str(&format!(
        "\nFonts: {} (headers) / {} (body)\n",
        bible.font_pairing.header_font, bible.font_pairing.body_font
    ));
    out.push_str(&format!(
        "Assets: 1 primary logo, {} secondary marks\n",
        bible.secondary_mark_urls.len()
    ));
    out
}

/// Write `brand-bible.json` plus the decoded PNG assets into `dir`.
pub fn write_assets(bible: &BrandBible, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;

    let json = serde_json::to_string_pretty(bible)?;
    let mut file = std::fs::File::create(dir.join("brand-bible.json"))?;
    file.write_all(json.as_bytes())?;

    std::fs::write(
        dir.join("logo.png"),
        decode_data_uri(&bible.primary_logo_url)?,
    )?;
    for (i, uri) in bible.secondary_mark_urls.iter().enumerate() {
        std::fs::write(dir.join(format!("mark-{}.png", i + 1)), decode_data_uri(uri)?)?;
    }

    Ok(())
}

/// Decode a `data:<mime>;base64,<payload>` URI to raw bytes.
fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let Some((header, payload)) = uri.split_once(',') else {
        bail!("malformed data URI");
    };
    if !header.starts_with("data:") || !header.ends_with(";base64") {
        bail!("unsupported data URI header: {header}");
    }
    BASE64.decode(payload).context("decoding data URI payload")
}
