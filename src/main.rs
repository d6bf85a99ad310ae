use clap::Parser;
use std::io::{self, BufWriter, Write};

use lls::cli::Cli;
use lls::error::Error;
use lls::{logging, palette};

fn main() {
    let cli = Cli::parse();
    logging::init_logging();

    if let Err(err) = run(&cli) {
        if err.is_broken_pipe() {
            return;
        }
        eprintln!("{} {}", palette::paint("error:", palette::WARN), err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    lls::run(&mut out, &cli.target(), &cli.options())?;
    out.flush()?;
    Ok(())
}
