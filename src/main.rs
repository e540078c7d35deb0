mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Args;
use reencode_to_size::{App, Outcome, SystemRunner};

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise stay quiet unless asked.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if args.verbose {
            "reencode_to_size=debug".to_string()
        } else {
            "reencode_to_size=warn".to_string()
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = args.to_config();
    config.validate()?;

    let runner = SystemRunner;
    let app = App::new(config, &runner);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let outcome = app
        .run(args.input.clone(), &mut stdin.lock(), &mut stdout.lock())
        .context("re-encode failed")?;

    if let Outcome::Encoded(summary) = outcome {
        tracing::debug!(
            "done: {} ({}, {} kbps, passes {:?})",
            summary.output.display(),
            summary.encoder,
            summary.video_bitrate_kbps,
            summary.passes
        );
    }

    Ok(())
}
