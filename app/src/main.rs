//! Command-line entry point.
//!
//! Usage: `stipple [INPUT] [OUTPUT]`. Positional arguments override
//! `STIPPLE_INPUT` / `STIPPLE_OUTPUT`.

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting stipple");

    let mut config = stipple_lib::init_config();
    let mut args = std::env::args_os().skip(1);
    if let Some(input) = args.next() {
        config.input = Some(input.into());
    }
    if let Some(output) = args.next() {
        config.output = output.into();
    }
    config.validate()?;

    let summary = stipple_lib::render(&config)?;
    tracing::info!(
        output = %config.output.display(),
        width = summary.width,
        height = summary.height,
        drawn = summary.drawn,
        missed = summary.missed,
        "Done"
    );
    Ok(())
}
