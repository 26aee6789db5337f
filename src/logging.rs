use color_eyre::Result;
use color_eyre::eyre::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber. `log` records from the app and its
/// dependencies are forwarded into it as well.
pub fn init_tracing(tracing_level: &str) -> Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter_layer =
        EnvFilter::try_new(tracing_level).wrap_err("Failed to create tracing filter")?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .wrap_err("Failed to install tracing subscriber")?;

    Ok(())
}
