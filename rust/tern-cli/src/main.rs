//! `tern`: run the bootstrap primitives from a shell.

use clap::Parser;
use std::io::Write;
use tern_cli::cli::Cli;
use tern_cli::colors::red;
use tern_cli::commands::{execute, Output};
use tern_cli::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match execute(cli) {
        Ok(Output::Text(text)) => println!("{}", text),
        Ok(Output::Bytes(bytes)) => {
            let mut out = std::io::stdout().lock();
            if let Err(e) = out.write_all(&bytes).and_then(|()| out.flush()) {
                eprintln!("{} writing to stdout: {}", red("error:"), e);
                std::process::exit(1);
            }
        }
        Ok(Output::Exit(code)) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {}", red("error:"), e);
            std::process::exit(1);
        }
    }
}
