//! Output formatting for inverted blocks.
//!
//! - [`text`] - one block per line, plus diagnostic descriptions
//! - [`json`] - JSON array of CIDR strings

mod json;
mod text;

use crate::config::OutputFormat;
use crate::models::CidrBlock;
use std::error::Error;

pub use json::render_json;
pub use text::{describe_block, render_text};

/// Render `blocks` in the requested format, newline terminated.
pub fn render(blocks: &[CidrBlock], format: OutputFormat) -> Result<String, Box<dyn Error>> {
    match format {
        OutputFormat::Text => Ok(render_text(blocks)),
        OutputFormat::Json => Ok(render_json(blocks)?),
    }
}
