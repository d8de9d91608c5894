use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::LevelFilter;

use chroma_key::{default_output_path, filter};

#[derive(Parser)]
#[command(
    name = "chroma-key",
    about = "Make green-screen pixels transparent and save the image as PNG",
    version,
    after_help = "Simple usage: chroma-key <image.png>  (keys the file in-place)\n\n\
                  Pixels with red < 50, green > 200 and blue < 50 become transparent.\n\
                  Output is always PNG, whatever the extension of --output."
)]
struct Cli {
    /// Input image file
    input: String,

    /// Output file (default: input with a .png extension)
    #[arg(short, long)]
    output: Option<String>,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let input_path = Path::new(&cli.input);
    if !input_path.exists() {
        eprintln!("Error: Input path does not exist: {}", cli.input);
        process::exit(1);
    }

    let output_path = match &cli.output {
        Some(o) => PathBuf::from(o),
        None => default_output_path(input_path),
    };

    match filter(input_path, &output_path) {
        Ok(report) => {
            if !cli.quiet {
                println!("Saved transparent image to {}", report.output.display());
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
