//! jif CLI - PNG <-> JIF converter
//!
//! Encodes a PNG into a JIF document (every pixel as a JSON record), or
//! with `--decode` paints a JIF document back into a PNG.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use jif_core::JifFormat;

mod commands;
mod error;

use error::CliError;

/// Convert PNG images to JIF pixel dumps and back.
#[derive(Parser, Debug)]
#[command(name = "jif")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The file to convert (PNG to encode, JIF to decode)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Whether to use the expanded format
    #[arg(short, long)]
    expanded: bool,

    /// Decode a JIF to PNG
    #[arg(short, long)]
    decode: bool,

    /// Where to put the output
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(out) => {
            println!("Wrote {}", out.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<PathBuf, CliError> {
    let input = args.file.as_deref().ok_or(CliError::NoFile)?;
    let format = JifFormat::from_expanded(args.expanded);
    let output = args.output.as_deref();

    if args.decode {
        commands::decode_file(input, output, format)
    } else {
        commands::encode_file(input, output, format)
    }
}

/// `RUST_LOG` wins; otherwise `warn`, or `debug` with `--verbose`.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
