use crate::aggregate::DateStyle;
use crate::app_config::{
    AppConfig, ClientConfig, ShareConfig, DEFAULT_GRAPHQL_URL, DEFAULT_SHARE_CARD_URL,
    DEFAULT_SHARE_INTENT_URL, DEFAULT_USER_AGENT,
};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        match lookup(var) {
            Ok(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(ConfigError::MissingEnvVar(var.to_string())),
        }
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_opt_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        match lookup(var) {
            Ok(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            _ => Ok(None),
        }
    };

    let api_token = require("HASHPULSE_API_TOKEN")?;
    let graphql_url = or_default("HASHPULSE_GRAPHQL_URL", DEFAULT_GRAPHQL_URL);
    let user_agent = or_default("HASHPULSE_USER_AGENT", DEFAULT_USER_AGENT);
    let request_timeout_secs = parse_opt_u64("HASHPULSE_REQUEST_TIMEOUT_SECS")?;
    let log_level = or_default("HASHPULSE_LOG_LEVEL", "info");
    let date_style = parse_date_style(&or_default("HASHPULSE_DATE_STYLE", "us"))?;

    let card_url = or_default("HASHPULSE_SHARE_CARD_URL", DEFAULT_SHARE_CARD_URL);
    let intent_url = or_default("HASHPULSE_SHARE_INTENT_URL", DEFAULT_SHARE_INTENT_URL);
    let include_avatar = parse_bool(
        "HASHPULSE_SHARE_INCLUDE_AVATAR",
        &or_default("HASHPULSE_SHARE_INCLUDE_AVATAR", "false"),
    )?;

    Ok(AppConfig {
        client: ClientConfig {
            api_token,
            graphql_url,
            user_agent,
            request_timeout_secs,
        },
        share: ShareConfig {
            card_url,
            intent_url,
            include_avatar,
        },
        date_style,
        log_level,
    })
}

fn parse_date_style(s: &str) -> Result<DateStyle, ConfigError> {
    s.parse::<DateStyle>()
        .map_err(|reason| ConfigError::InvalidEnvVar {
            var: "HASHPULSE_DATE_STYLE".to_string(),
            reason,
        })
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
