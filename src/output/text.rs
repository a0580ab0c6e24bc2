//! Plain text output.

use crate::models::CidrBlock;
use colored::Colorize;

/// One block per line.
pub fn render_text(blocks: &[CidrBlock]) -> String {
    blocks.iter().map(|b| format!("{b}\n")).collect()
}

/// Diagnostic description of a parsed block: as given, its network, its
/// first and last address and how many addresses it holds.
pub fn describe_block(block: &CidrBlock) -> String {
    format!(
        "IP: {given}, NET: {net}, first: {first}, last: {last}, size: {size}",
        given = block.addr.to_string().on_blue(),
        net = block.network(),
        first = block.lo(),
        last = block.hi(),
        size = block.size()
    )
}
