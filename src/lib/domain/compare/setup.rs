use tracing::info;
use tracing_subscriber::{
    Registry, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Installs the tracing subscriber. Log lines go to stderr; stdout is
/// reserved for the comparison report.
pub fn setup_logging(log_level: tracing::Level) -> anyhow::Result<()> {
    Registry::default()
        .with(LevelFilter::from_level(log_level))
        .with(tracing_subscriber::fmt::Layer::default().with_writer(std::io::stderr))
        .init();
    info!("Starting gather comparison");
    Ok(())
}
