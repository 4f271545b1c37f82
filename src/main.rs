// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use clap::Parser;
use invoke_shell::shell::{self, Cli, EXIT_USAGE};

fn main() {
    let cli = Cli::parse();

    let code = match shell::run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            EXIT_USAGE
        }
    };

    std::process::exit(code);
}
