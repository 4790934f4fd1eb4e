use std::error::Error as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use golfball_icons::{IconGenerator, IconProfile};
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Render the golf-ball icon as PNG files at every manifest size.
#[derive(Parser, Debug)]
#[command(name = "golfball-icons")]
#[command(version, about)]
struct Args {
    /// Directory the icons are written to; it must already exist
    #[arg(short, long, default_value = "icons")]
    out_dir: PathBuf,

    /// Edge length to render; repeat to render several (replaces the profile's sizes)
    #[arg(short, long = "size", value_name = "PX")]
    sizes: Vec<u32>,

    /// JSON profile with colors and sizes
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Print the effective profile as JSON and exit
    #[arg(long)]
    print_profile: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if args.verbose { "debug" } else { "info" })
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let mut message = err.to_string();
            let mut source = err.source();
            while let Some(cause) = source {
                message.push_str(": ");
                message.push_str(&cause.to_string());
                source = cause.source();
            }
            error!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> golfball_icons::Result<()> {
    let mut profile = match &args.profile {
        Some(path) => {
            debug!(path = %path.display(), "loading profile");
            IconProfile::load(path)?
        }
        None => IconProfile::default(),
    };
    if !args.sizes.is_empty() {
        profile.sizes = args.sizes;
    }

    if args.print_profile {
        println!("{}", profile.to_json_pretty()?);
        return Ok(());
    }

    let generator = IconGenerator::from_profile(&profile);
    generator.generate(&args.out_dir, &mut std::io::stdout().lock())?;
    Ok(())
}
