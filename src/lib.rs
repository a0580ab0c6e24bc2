//! IPv4 block inversion.
//!
//! Turns a list of CIDR blocks into the minimal list of aligned blocks that
//! covers every address outside them:
//! - [`models`] - address codec and [`CidrBlock`]
//! - [`processing`] - complement, sort, merge and inversion
//! - [`output`] - text and JSON rendering
//!
//! ```
//! use cidr_inverse::{invert_one, CidrBlock};
//! let block: CidrBlock = "0.0.0.0/1".parse().unwrap();
//! assert_eq!(invert_one(&block), vec!["128.0.0.0/1".parse::<CidrBlock>().unwrap()]);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use config::Args;
use std::error::Error;

pub use error::CidrError;
pub use models::CidrBlock;
pub use processing::{invert_many, invert_many_with, invert_one, sort_blocks, Merger};

/// Result of a command line run.
#[derive(Debug)]
pub struct Inversion {
    /// Blocks as given on the command line or in the input file.
    pub inputs: Vec<CidrBlock>,
    /// The sorted inverted blocks.
    pub blocks: Vec<CidrBlock>,
}

/// Collect the blocks named by `args` and invert them.
pub fn run(args: &Args) -> Result<Inversion, Box<dyn Error>> {
    let mut inputs = args
        .cidrs
        .iter()
        .map(|s| s.parse::<CidrBlock>())
        .collect::<Result<Vec<_>, _>>()?;
    if let Some(file) = &args.file {
        inputs.extend(input::read_blocks_file(file)?);
    }
    if inputs.is_empty() {
        return Err("CIDR argument is required".into());
    }

    let networks = input::normalize(&inputs, args.strict)?;
    let blocks = match networks.as_slice() {
        [single] => invert_one(single),
        many => invert_many_with(many, args.merger.merger().as_ref()),
    };
    log::info!(
        "Inverted {} blocks into {} blocks",
        inputs.len(),
        blocks.len()
    );
    Ok(Inversion { inputs, blocks })
}
