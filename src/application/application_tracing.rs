use super::ApplicationEnv;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

const DEFAULT_CONSOLE_DIRECTIVE: &str = "ticket_tracker=debug";

pub fn setup_tracing(env: &ApplicationEnv) -> anyhow::Result<()> {
    let console_filter = EnvFilter::builder()
        .with_default_directive(DEFAULT_CONSOLE_DIRECTIVE.parse()?)
        .from_env()?;

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_filter(console_filter);

    let file_appender = RollingFileAppender::new(
        env.log_rotation.clone(),
        &env.log_directory,
        &env.log_filename,
    );
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .init();

    tracing::debug!(rotation = ?env.log_rotation, "tracing initialized");

    Ok(())
}
