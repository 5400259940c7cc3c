//! QEasy command-line entrypoint

use clap::Parser;
use qeasy::config::ErrorCorrection;
use qeasy::output::{render_error, render_generated};
use qeasy::{Error, QeasyConfig, QrGenerator, Result, logging, prompt};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "qeasy",
    version,
    about = "Generate a QR code PNG for a menu link or table URL"
)]
struct Cli {
    /// Text to encode, usually a URL. Prompts interactively when omitted.
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Output file name; `.png` is appended when missing. Defaults to QEasy_QR_<timestamp>.png
    #[arg(value_name = "FILENAME")]
    filename: Option<String>,

    /// Optional configuration file (toml/yaml). Defaults to qeasy.{toml,yaml} in cwd/XDG config.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output the result as formatted JSON instead of human-readable text
    #[arg(long)]
    json: bool,

    /// Decode the written file and check it matches the payload
    #[arg(long)]
    verify: bool,

    /// Pixels per QR module
    #[arg(long, value_name = "PIXELS")]
    box_size: Option<u32>,

    /// Quiet-zone width in modules
    #[arg(long, value_name = "MODULES")]
    border: Option<u32>,

    /// Error-correction level (`low`, `medium`, `quartile` or `high`)
    #[arg(long, value_name = "LEVEL")]
    error_correction: Option<String>,

    /// Directory for relative file names and generated names
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.exit_code();
            if json {
                println!("{:#}", render_error(&err.to_string(), code));
            } else {
                eprintln!("Error: {err}");
            }
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = QeasyConfig::load(cli.config.as_deref())?;

    if let Some(size) = cli.box_size {
        config.qr.box_size = size.max(1);
    }

    if let Some(border) = cli.border {
        config.qr.border = border;
    }

    if let Some(ref level) = cli.error_correction {
        config.qr.error_correction = level.parse::<ErrorCorrection>().map_err(Error::Config)?;
    }

    if let Some(dir) = cli.output_dir {
        config.output.directory = Some(dir);
    }

    if cli.verify {
        config.output.verify = true;
    }

    logging::init(&config.logging)?;
    info!(qr = ?config.qr, "Starting QEasy");

    let (payload, target) = match cli.url {
        Some(url) => (url, cli.filename),
        None => {
            let answers = prompt::ask(&mut io::stdin().lock(), &mut io::stdout())?;
            (answers.payload, answers.target)
        }
    };

    let generated = QrGenerator::from_config(&config).generate(&payload, target.as_deref())?;
    let rendered = render_generated(&generated)?;

    if cli.json {
        println!("{:#}", rendered.json);
    } else {
        for line in &rendered.human {
            println!("{line}");
        }
    }

    Ok(())
}
