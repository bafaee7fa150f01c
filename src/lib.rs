//! Console tool that keeps a backend awake by pinging its health endpoint.
//!
//! It sends a single HTTP GET request to the configured endpoint, prints the
//! response status code and, when the body is a JSON health report, the
//! optional `status` and `uptime` fields. It then exits. The process exit
//! status is always success; failures are reported on the console only.
//!
//! Run without arguments to ping the compiled-in endpoint:
//!
//! ```text
//! cargo run
//! ```
//!
//! Run providing a configuration:
//!
//! ```text
//! cargo run -- --config-path "./ping_config.json"
//! PINGER_CONFIG='{"endpoint": "https://example.com/ping"}' cargo run
//! ```
pub mod app;
pub mod config;
pub mod console;
pub mod ping;
pub mod service;
