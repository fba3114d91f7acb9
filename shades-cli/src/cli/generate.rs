//! The default command: generate shades for one or more colors.

use std::io::IsTerminal;
use std::path::PathBuf;

use shades::{DEFAULT_SHADES, ShadeBatch, hex_to_shades, parse_shade_list};

use super::error::CliError;
use super::output::write_outputs;
use super::render::SwatchLayout;
use super::report::JsonReport;
use super::table::print_table;

/// Settings for one run, from flags or a recipe.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub colors: Vec<String>,
    /// Raw shade requests; validated per entry by the engine.
    pub shades: Vec<String>,
    pub directory: PathBuf,
    pub name: Option<String>,
    pub layout: SwatchLayout,
    pub json: bool,
    pub write_files: bool,
    /// `None` means color only when stdout is a terminal.
    pub color_output: Option<bool>,
    pub quiet: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            colors: Vec::new(),
            shades: default_shade_requests(),
            directory: PathBuf::from("."),
            name: None,
            layout: SwatchLayout::default(),
            json: false,
            write_files: true,
            color_output: None,
            quiet: false,
        }
    }
}

pub fn default_shade_requests() -> Vec<String> {
    DEFAULT_SHADES.iter().map(|p| p.to_string()).collect()
}

impl GenerateOptions {
    /// Parse command-line flags. Bare arguments are treated as colors.
    pub fn from_args(args: &[String]) -> Result<Self, CliError> {
        let mut opts = GenerateOptions::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "-c" | "--colors" | "--color" => {
                    let start = opts.colors.len();
                    // Take every following value up to the next flag.
                    while i + 1 < args.len() && !is_flag(&args[i + 1]) {
                        i += 1;
                        opts.colors.push(args[i].clone());
                    }
                    if opts.colors.len() == start {
                        return Err(missing_value(&args[i]));
                    }
                }
                "-s" | "--shades" => {
                    i += 1;
                    let list = args.get(i).ok_or_else(|| missing_value("--shades"))?;
                    opts.shades = parse_shade_list(list).into_iter().map(String::from).collect();
                }
                "-d" | "--directory" => {
                    i += 1;
                    let dir = args.get(i).ok_or_else(|| missing_value("--directory"))?;
                    opts.directory = PathBuf::from(dir);
                }
                "-n" | "--name" => {
                    i += 1;
                    let name = args.get(i).ok_or_else(|| missing_value("--name"))?;
                    opts.name = Some(name.clone());
                }
                "--json" => opts.json = true,
                "--no-files" => opts.write_files = false,
                "--no-color" => opts.color_output = Some(false),
                "--color-always" => opts.color_output = Some(true),
                "-q" | "--quiet" => opts.quiet = true,
                other if is_flag(other) => {
                    return Err(CliError::Usage(format!("Unknown option: {}", other)));
                }
                color => opts.colors.push(color.to_string()),
            }
            i += 1;
        }

        Ok(opts)
    }

    fn use_color(&self) -> bool {
        self.color_output
            .unwrap_or_else(|| std::io::stdout().is_terminal())
    }
}

/// Flags start with `-`; colors like `#FF0000` or `ff0000` never do.
fn is_flag(arg: &str) -> bool {
    arg.starts_with('-') && arg.len() > 1
}

fn missing_value(flag: &str) -> CliError {
    CliError::Usage(format!("Missing value for {}", flag))
}

/// Outcome of a whole run across all colors.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn exit_code(&self) -> i32 {
        if self.failed > 0 { 1 } else { 0 }
    }
}

/// Generate, print and save one color. Shade errors are warnings only.
fn run_color(color: &str, opts: &GenerateOptions) -> Result<JsonReport, CliError> {
    let batch: ShadeBatch = hex_to_shades(color, &opts.shades)?;

    if !opts.quiet {
        eprintln!("Generating shades of {}...", batch.base);
    }
    for err in batch.errors() {
        eprintln!("Warning: {}", err);
    }

    if !opts.json {
        print_table(&batch, opts.use_color());
    }

    let mut report = JsonReport::from_batch(&batch);

    if opts.write_files {
        let paths = write_outputs(&batch, &opts.layout, &opts.directory, opts.name.as_deref())?;
        if !opts.quiet {
            eprintln!(
                "Files saved as {} and {}",
                paths.image.display(),
                paths.markdown.display()
            );
        }
        report.files = vec![
            paths.image.display().to_string(),
            paths.markdown.display().to_string(),
        ];
    }

    Ok(report)
}

/// Run every color in `opts`. One failing color does not stop the others.
pub fn run(opts: &GenerateOptions) -> RunSummary {
    let mut summary = RunSummary::default();
    let mut reports = Vec::new();

    for color in &opts.colors {
        match run_color(color, opts) {
            Ok(report) => {
                summary.succeeded += 1;
                reports.push(report);
            }
            Err(e) => {
                summary.failed += 1;
                eprintln!("Error: {}", e);
            }
        }
    }

    if !opts.quiet && opts.colors.len() > 1 {
        eprintln!("Done: {} succeeded, {} failed", summary.succeeded, summary.failed);
    }

    if opts.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                summary.failed += 1;
                eprintln!("Error: {}", CliError::from(e));
            }
        }
    }

    summary
}

/// Execute the generate command. Returns the process exit code.
pub fn cmd_generate(args: &[String]) -> i32 {
    let opts = match GenerateOptions::from_args(args) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage();
            return 2;
        }
    };

    if opts.colors.is_empty() {
        print_usage();
        return 0;
    }

    run(&opts).exit_code()
}

/// Print usage information.
pub fn print_usage() {
    eprintln!("shades - Generate shades of a color as a PNG swatch and markdown list");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    shades -c <hex>... [OPTIONS]");
    eprintln!("    shades recipe <file.yaml>");
    eprintln!("    shades help");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -c, --colors <hex>...    One or more hex colors (# optional)");
    eprintln!("    -s, --shades <list>      Comma-separated percentages (default: 20,40,60,80,100)");
    eprintln!("    -d, --directory <dir>    Output directory (default: current directory)");
    eprintln!("    -n, --name <name>        File name stem (default: shades)");
    eprintln!("    --json                   Print results as JSON instead of a table");
    eprintln!("    --no-files               Do not write the PNG and markdown files");
    eprintln!("    --no-color               Plain table output");
    eprintln!("    --color-always           Colored table even when not a terminal");
    eprintln!("    -q, --quiet              Only print warnings and errors on stderr");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("    shades -c \"#E63946\"");
    eprintln!("    shades -c 2A9D8F 264653 -s 10,50,90 -d palettes -n brand");
    eprintln!("    shades -c \"#3A86FF\" --json --no-files");
}
