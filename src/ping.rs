//! The health check itself: one GET request against the backend endpoint.
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client as HttpClient, Response, StatusCode, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::console::Printer;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("Failed to build a http client: {err:?}")]
    ClientBuildingError { err: Arc<reqwest::Error> },
    #[error("Ping failed to get a response: {err:?}")]
    ResponseError { err: Arc<reqwest::Error> },
}

/// Best-effort shape of the backend health report.
///
/// Both fields are optional and unknown extra fields are ignored. A body
/// that is not valid JSON at all is tolerated too; the report is simply
/// skipped in that case.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthReport {
    pub status: Option<String>,
    pub uptime: Option<serde_json::Number>,
}

/// How the single ping ended. Informational only; it is never mapped to the
/// process exit status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PingOutcome {
    Ok,
    UnexpectedStatus { code: u16 },
    Unreachable,
}

/// Sends one GET request to the endpoint and reports the outcome through the
/// printer. Transport failures are absorbed here and only produce an error
/// line on the console.
pub async fn run(endpoint: &Url, timeout: Duration, console: &dyn Printer) -> PingOutcome {
    console.println(&format!("{}: Pinging {endpoint}", chrono::Local::now()));

    let response = match send_ping(endpoint, timeout).await {
        Ok(response) => response,
        Err(err) => {
            console.eprintln(&format!("Error: {err}"));
            return PingOutcome::Unreachable;
        }
    };

    let code = response.status();

    console.println(&format!("Response: {}", code.as_u16()));

    if code == StatusCode::OK {
        console.println("Backend is alive");

        // The body is decoded on a best-effort basis; a non-JSON body is
        // silently skipped.
        if let Ok(report) = response.json::<HealthReport>().await {
            console.println(&format!("App status: {}", report.status.as_deref().unwrap_or("unknown")));
            console.println(&format!(
                "Uptime: {} seconds",
                report.uptime.map_or_else(|| "unknown".to_string(), |uptime| uptime.to_string())
            ));
        }

        PingOutcome::Ok
    } else {
        console.eprintln(&format!("Unexpected status code: {}", code.as_u16()));

        PingOutcome::UnexpectedStatus { code: code.as_u16() }
    }
}

async fn send_ping(endpoint: &Url, timeout: Duration) -> Result<Response, Error> {
    let client = HttpClient::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::ClientBuildingError { err: e.into() })?;

    client
        .get(endpoint.clone())
        .send()
        .await
        .map_err(|e| Error::ResponseError { err: e.into() })
}
