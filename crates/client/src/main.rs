//! `camp-report` -- prints the daily camp digest as JSON.
//!
//! # Environment variables
//!
//! | Variable               | Required | Default | Description                         |
//! |------------------------|----------|---------|-------------------------------------|
//! | `CAMP_API_URL`         | yes      | --      | Base URL of the camp API            |
//! | `CAMP_API_TOKEN`       | no       | --      | Bearer token                        |
//! | `REQUEST_TIMEOUT_SECS` | no       | `30`    | Per-request timeout                 |
//! | `REPORT_DATE`          | no       | today   | Digest date, `YYYY-MM-DD`           |

use chrono::{Local, Utc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use camp_client::config::ClientConfig;
use camp_client::digest::build_digest;
use camp_client::http::HttpCampApi;
use camp_core::calendar::parse_iso_date;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "camp_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });

    let date = match std::env::var("REPORT_DATE") {
        Ok(raw) => parse_iso_date(&raw).unwrap_or_else(|e| {
            tracing::error!(error = %e, "REPORT_DATE must be YYYY-MM-DD");
            std::process::exit(1);
        }),
        Err(_) => Local::now().date_naive(),
    };

    tracing::info!(api_url = %config.api_url, %date, "Building camp digest");

    let api = HttpCampApi::new(&config).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to build HTTP client");
        std::process::exit(1);
    });

    let digest = build_digest(&api, date, Utc::now()).await;

    for error in &digest.errors {
        tracing::warn!(section = %error, "Digest section unavailable");
    }
    tracing::info!(
        attendance_rate = digest.attendance.rate,
        upcoming_events = digest.upcoming_events.len(),
        expiring_trash = digest.expiring_trash.len(),
        "Digest ready",
    );

    match serde_json::to_string_pretty(&digest) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize digest");
            std::process::exit(1);
        }
    }
}
