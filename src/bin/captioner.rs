use std::path::PathBuf;

use clap::{CommandFactory as _, Parser};
use tracing::{Level, error};
use tracing_subscriber::FmtSubscriber;

const EXIT_VALIDATION: i32 = 1;
const EXIT_MALFORMED_ARGUMENT: i32 = 2;
const EXIT_MISSING_ARGUMENT: i32 = 3;

#[derive(Parser, Debug)]
#[command(name = "captioner", version)]
#[command(about = "Overlay a semi-transparent caption bar onto an image and save it as a flattened JPEG")]
struct Cli {
    /// Index image the caption is applied to.
    #[arg(short = 'i', long = "index-file")]
    index_file: Option<PathBuf>,

    /// Font used to render the caption.
    #[arg(short = 'f', long = "caption-font-file")]
    caption_font_file: Option<PathBuf>,

    /// Caption text; defaults to the index file's base name.
    #[arg(short = 'c', long = "caption-text")]
    caption_text: Option<String>,

    /// Log at DEBUG instead of INFO.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// Validated business arguments handed to the captioner.
struct CaptionArgs {
    index_file: PathBuf,
    caption_font_file: PathBuf,
    caption_text: Option<String>,
}

/// Validation outcome consumed by `main` to select the exit code.
#[derive(Clone, Copy, Debug)]
enum UsageFailure {
    /// A required file flag is absent or its path does not exist.
    Validation,
}

impl UsageFailure {
    fn exit_code(self) -> i32 {
        match self {
            UsageFailure::Validation => EXIT_VALIDATION,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = parse_or_exit();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let args = match validate(cli) {
        Ok(args) => args,
        Err(failure) => {
            error!("exiting due to errors");
            print_usage();
            std::process::exit(failure.exit_code());
        }
    };

    let written = captioner::caption(
        &args.index_file,
        &args.caption_font_file,
        args.caption_text.as_deref(),
    )?;
    eprintln!("wrote {}", written.display());
    Ok(())
}

fn parse_or_exit() -> Cli {
    use clap::error::ErrorKind;

    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                ErrorKind::MissingRequiredArgument => EXIT_MISSING_ARGUMENT,
                _ => EXIT_MALFORMED_ARGUMENT,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    }
}

/// Check both required file flags for presence and existence. Every failing
/// check is logged; the checks do not short-circuit, so a run missing both
/// files reports both before the single exit.
fn validate(cli: Cli) -> Result<CaptionArgs, UsageFailure> {
    let mut failed = false;

    match &cli.index_file {
        None => {
            error!("index file is required");
            failed = true;
        }
        Some(path) if !path.exists() => {
            error!("index file {} does not exist", path.display());
            failed = true;
        }
        Some(_) => {}
    }

    match &cli.caption_font_file {
        None => {
            error!("caption font is required");
            failed = true;
        }
        Some(path) if !path.exists() => {
            error!("caption font {} does not exist", path.display());
            failed = true;
        }
        Some(_) => {}
    }

    if failed {
        return Err(UsageFailure::Validation);
    }
    let (Some(index_file), Some(caption_font_file)) = (cli.index_file, cli.caption_font_file)
    else {
        return Err(UsageFailure::Validation);
    };

    Ok(CaptionArgs {
        index_file,
        caption_font_file,
        caption_text: cli.caption_text,
    })
}

fn print_usage() {
    let help = Cli::command().render_help();
    eprintln!("{help}");
}
