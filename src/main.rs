use pushgate::config::{ConfigLoader, DispatchSettings, LoggerSettings};
use pushgate::server::Server;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber from the logger settings
///
/// `RUST_LOG` takes precedence over the configured level when set.
fn init_tracing(logger: &LoggerSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logger.level));

    match logger.format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loader = ConfigLoader::new()?;
    let settings = loader.load()?;

    init_tracing(&settings.logger);

    // Credentials and message options are captured once here and injected;
    // nothing downstream reads the environment.
    let dispatch_settings = DispatchSettings::from_env(settings.dispatch.profile);

    Server::new(settings, dispatch_settings).run().await
}
