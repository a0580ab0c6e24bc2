//! Reading CIDR blocks from command line arguments and text files.

use crate::error::CidrError;
use crate::models::CidrBlock;
use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;
use std::path::Path;

lazy_static! {
    // Blocks may be separated by whitespace, commas or semicolons.
    static ref TOKEN_RE: Regex = Regex::new(r"[^\s,;]+").expect("Invalid Regex?");
}

/// Parse every block in `text`. Anything after `#` on a line is a comment.
pub fn parse_blocks(text: &str) -> Result<Vec<CidrBlock>, CidrError> {
    text.lines()
        .map(strip_comment)
        .flat_map(|line| TOKEN_RE.find_iter(line))
        .map(|m| m.as_str().parse())
        .collect()
}

/// Read and parse a block list file.
pub fn read_blocks_file(path: &Path) -> Result<Vec<CidrBlock>, Box<dyn Error>> {
    if !path.exists() {
        return Err(format!("Input file does not exist: {}", path.display()).into());
    }
    log::info!("Reading blocks from file: {}", path.display());
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading input file {}: {e}", path.display()))?;
    let blocks =
        parse_blocks(&text).map_err(|e| format!("Error in input file {}: {e}", path.display()))?;
    log::debug!("Read {} blocks from {}", blocks.len(), path.display());
    Ok(blocks)
}

/// Bring blocks to their network form.
///
/// With `strict` a block with host bits set is an error, otherwise it is
/// replaced by its network with a warning.
pub fn normalize(blocks: &[CidrBlock], strict: bool) -> Result<Vec<CidrBlock>, CidrError> {
    blocks
        .iter()
        .map(|b| {
            if strict {
                b.canonical()
            } else {
                if !b.is_canonical() {
                    log::warn!("{b} has host bits set, using network {}", b.network());
                }
                Ok(b.network())
            }
        })
        .collect()
}

fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(before, _)| before)
}
