//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber.
//!
//! - **Filter**: `RUST_LOG` when set, otherwise `logging.level` from the configuration
//! - **Compact** (default): one line per event, spans inline, no module paths
//! - **JSON**: one object per event with the current span's fields, for log shippers
//!
//! ## What Gets Traced
//!
//! - **Store actor**: start, shutdown with final size, every create/replace/update/delete
//!   with `entity_type`, `id` and `size`
//! - **HTTP requests**: a `rest` span per call carrying `method`, `user` and `id` or `page`,
//!   with `duration_ms` on completion or failure
//! - **Transport**: `tower_http` request/response spans
//!
//! **With `RUST_LOG=info`** (compact):
//!
//! ```text
//! INFO Actor started entity_type="DotnetRest"
//! INFO rest{method="CreateDotnetRest" user="svc-a"}: Created entity_type="DotnetRest" id=6f1c... size=1
//! INFO rest{method="CreateDotnetRest" user="svc-a"}: CreateDotnetRest completed duration_ms=0
//! ```

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Installs the subscriber. Returns `false` if one was already installed (e.g. by a test).
pub fn setup_tracing(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_lowercase()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false); // entity_type and span names say where a line came from

    match config.format {
        LogFormat::Compact => builder.compact().try_init().is_ok(),
        LogFormat::Json => builder.json().with_current_span(true).try_init().is_ok(),
    }
}
