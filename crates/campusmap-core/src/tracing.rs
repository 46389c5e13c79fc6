use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Used when `RUST_LOG` is unset. Pool and driver chatter stays at `warn`.
pub const DEFAULT_FILTER: &str = "info,sqlx=warn,sea_orm=warn,hyper=warn";

/// Install the JSON stdout subscriber. Call once at service startup.
///
/// Event fields are flattened into the line and the current request span
/// (method, uri, request id) is attached. Repeated calls are no-ops.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .with_span_list(false),
        )
        .try_init();
}
