//! Tracing subscriber setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "usersvc=info,tower_http=info";

/// Installs the global subscriber.
///
/// `pretty` selects the human-readable formatter; otherwise events are written
/// as JSON lines with the enclosing request span flattened in.
pub fn init(pretty: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    if pretty {
        registry.with(fmt::layer().pretty()).init();
    } else {
        registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .init();
    }
}
