//! Telemetry initialization (tracing/tracing-subscriber).
//!
//! LOG_LEVEL sets the filter, either a bare level ("debug") or full
//! directives ("info,mentor=debug,devmentor_backend=debug"). The `mentor`
//! target carries tutoring-pipeline events (model calls, contract
//! failures, fallback serves); `devmentor_backend` carries infrastructure.
//! LOG_FORMAT selects "pretty" (default) or "json" structured output.
//! Per-request HTTP spans come from the router's TraceLayer on top of this.

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str =
  "info,mentor=debug,devmentor_backend=debug,tower_http=info,axum=info";

pub fn init_tracing() {
  let filter =
    EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(true)
    .with_file(true)
    .with_line_number(true);

  // The json/pretty builders are different types, so finish each branch
  // separately instead of storing the layer.
  match std::env::var("LOG_FORMAT").as_deref() {
    Ok("json") => builder.json().init(),
    _ => builder.init(),
  }
}
