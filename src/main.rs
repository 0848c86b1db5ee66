//! Prints libmagic's description of each file under a few different flag sets.

use std::path::PathBuf;
use std::process::ExitCode;

use algebraic_lib::magic::{Flags, Magic, MagicError};
use algebraic_lib::maybe::Maybe;
use clap::Parser;
use log::{LevelFilter, debug, error, warn};

const REPORTED_FLAGS: [Flags; 3] = [Flags::NONE, Flags::MIME, Flags::MIME_ENCODING];

#[derive(Parser, Debug)]
#[command(author, version, about = "Describes files with libmagic", long_about = None)]
struct Args {
    /// Magic database to load instead of the system default.
    #[arg(long, env = "MAGIC")]
    database: Option<PathBuf>,

    /// Log each libmagic step.
    #[arg(short, long)]
    verbose: bool,

    /// Files to describe.
    files: Vec<PathBuf>,
}

fn run(args: &Args) -> Result<(), MagicError> {
    let mut magic = Magic::open(Flags::NONE)?;
    magic.load(Maybe::from(args.database.as_deref()))?;

    for file in &args.files {
        debug!("describing {}", file.display());

        for flags in REPORTED_FLAGS {
            magic.set_flags(flags)?;

            match magic.file(file) {
                Ok(description) => println!("Result with {flags} flag: {description}"),
                Err(err) => warn!("{err}"),
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::builder().filter_level(log_level).parse_default_env().init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        },
    }
}
