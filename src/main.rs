use clap::Parser;
use squarecrop::imaging::RustBackend;
use squarecrop::{archive, output, process};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{Level, info, warn};

/// Token that, as the third positional argument, requests a zip archive.
const ARCHIVE_TOKEN: &str = "z";

#[derive(Parser)]
#[command(name = "squarecrop")]
#[command(about = "Crop centered squares from images and resize them")]
#[command(long_about = "\
Crop centered squares from images and resize them

Each image is cropped to the largest centered square no bigger than SIZE,
then resized to exactly SIZExSIZE and written as <name>_crop_<SIZE>.png
into a new images_<YYYYMMDD_HHMMSS>/ directory.

  squarecrop photo.jpg 2000        # one image, any supported format
  squarecrop shots/ 512            # every *.png directly inside shots/
  squarecrop shots/ 512 z          # ...and zip the results

Images smaller than SIZE are upscaled.")]
#[command(version)]
struct Cli {
    /// Image file, or directory of PNG images
    path: PathBuf,

    /// Side length of the output squares, in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    size: u32,

    /// Pass `z` to also write images_<timestamp>.zip
    archive: Option<String>,

    /// Directory in which images_<timestamp>/ is created
    #[arg(long, default_value = ".")]
    output_root: PathBuf,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn wants_archive(&self) -> bool {
        match self.archive.as_deref() {
            Some(ARCHIVE_TOKEN) => true,
            Some(other) => {
                warn!(token = other, "unrecognized argument, not archiving (use `z`)");
                false
            }
            None => false,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help / --version go to stdout and are not failures
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Validate before creating anything so a bad path leaves no output dir
    let kind = process::classify_input(&cli.path)?;
    let archive = cli.wants_archive();

    let started = chrono::Local::now().naive_local();
    let output_dir = process::create_output_dir(&cli.output_root, started)?;
    info!(output_dir = %output_dir.display(), "output directory ready");

    println!(
        "==> Cropping {} to {}x{}",
        cli.path.display(),
        cli.size,
        cli.size
    );
    let backend = RustBackend::new();
    let report = process::process_input(&backend, kind, &cli.path, cli.size, &output_dir)?;
    output::print_batch_report(&report, &output_dir);

    if archive {
        println!("==> Archiving {}", output_dir.display());
        let zip_path = archive::create_zip_file(&output_dir)?;
        println!("==> Archive: {}", zip_path.display());
    }

    Ok(())
}

/// Install the stderr log subscriber. Warnings are always shown.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
