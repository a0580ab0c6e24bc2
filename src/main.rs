use cidr_inverse::config::Args;
use cidr_inverse::logging::init_logging;
use cidr_inverse::output::{describe_block, render};
use cidr_inverse::run;
use clap::Parser;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_logging(&args.log_config, args.log_level)?;
    log::info!("#Start main()");

    let inversion = run(&args).inspect_err(|e| log::error!("{e}"))?;
    print!("{}", render(&inversion.blocks, args.format)?);

    for block in &inversion.inputs {
        log::info!("{}", describe_block(block));
    }
    Ok(())
}
