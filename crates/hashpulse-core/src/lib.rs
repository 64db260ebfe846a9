//! Domain types, configuration, and pure derivations for HashPulse.
//!
//! Nothing in this crate performs I/O beyond reading environment variables;
//! the GraphQL transport lives in `hashpulse-client`.

pub mod aggregate;
pub mod app_config;
pub mod config;
pub mod share;
pub mod views;

pub use aggregate::{derive_series, derive_total, first_publication_posts, format_date, DateStyle};
pub use app_config::{AppConfig, ClientConfig, ShareConfig};
pub use config::{load_app_config, load_app_config_from_env};
pub use share::{build_share_link, ShareLink, ShareSummary};
pub use views::{Post, Publication, QueryResult, User, ViewSeriesPoint};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
