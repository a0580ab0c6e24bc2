//! JSON output.

use crate::models::CidrBlock;

/// Blocks as a pretty-printed JSON array of CIDR strings.
pub fn render_json(blocks: &[CidrBlock]) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(blocks)?;
    json.push('\n');
    Ok(json)
}
