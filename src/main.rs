use anyhow::Result;
use clap::Parser;

use paramscope::cli::Cli;
use paramscope::logging::{Verbosity, init_subscriber};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_subscriber(Verbosity::from_flags(cli.verbose, cli.quiet));

    let json = cli.run()?;
    println!("{}", json);
    Ok(())
}
