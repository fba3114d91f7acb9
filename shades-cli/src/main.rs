//! shades - generate darker shades of hex colors
//!
//! Usage:
//!   shades -c <hex>... [options]     Table, PNG swatch and markdown per color
//!   shades recipe <file.yaml>        Run a YAML recipe
//!   shades help                      Show usage

use std::env;
use std::process;

mod cli;

use cli::{cmd_generate, cmd_recipe};

fn main() {
    let args: Vec<String> = env::args().collect();

    // Check for CLI subcommands
    let code = match args.get(1).map(String::as_str) {
        Some("recipe") => cmd_recipe(&args[2..]),
        Some("generate") => cmd_generate(&args[2..]),
        Some("help" | "--help" | "-h") => {
            cli::generate::print_usage();
            0
        }
        _ => cmd_generate(args.get(1..).unwrap_or_default()),
    };

    process::exit(code);
}
