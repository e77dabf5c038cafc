use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "info,blog_client=debug";

pub fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        // stdout остаётся под вывод команд
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    let _ = if json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
}
