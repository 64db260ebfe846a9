//! One-shot `views` and `share` command handlers.

use hashpulse_client::{HashnodeClient, PulseStatus, PulseView, QuerySession};
use hashpulse_core::{build_share_link, AppConfig, DateStyle, ShareSummary};

use crate::render::{render_json, render_view};

/// Runs a single query and returns the resulting snapshot, or `None` when
/// `username` is empty and nothing was sent.
async fn fetch_snapshot(
    client: &HashnodeClient,
    username: &str,
    date_style: DateStyle,
) -> Option<PulseView> {
    let session = QuerySession::new(date_style);
    session.run(client, username).await?;
    Some(session.snapshot())
}

/// Fetch and print a user's views.
///
/// A missing user is reported and returns `Ok`.
///
/// # Errors
///
/// Returns an error if the query fails at the transport or GraphQL layer.
pub(crate) async fn run_views(
    client: &HashnodeClient,
    username: &str,
    date_style: DateStyle,
    json: bool,
) -> anyhow::Result<()> {
    let Some(view) = fetch_snapshot(client, username, date_style).await else {
        println!("enter a Hashnode username to analyze");
        return Ok(());
    };

    if json {
        println!("{}", render_json(&view)?);
    } else if view.status != PulseStatus::Error {
        println!("{}", render_view(&view));
    }

    if view.status == PulseStatus::Error {
        anyhow::bail!(view.error.unwrap_or_else(|| "query failed".to_string()));
    }
    Ok(())
}

/// Fetch a user's total views and print the share text and intent URL.
///
/// # Errors
///
/// Returns an error if the query fails at the transport or GraphQL layer.
pub(crate) async fn run_share(
    client: &HashnodeClient,
    username: &str,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let Some(view) = fetch_snapshot(client, username, config.date_style).await else {
        println!("enter a Hashnode username to analyze");
        return Ok(());
    };

    match view.status {
        PulseStatus::Ready => {
            let summary = share_summary(&view, username);
            let link = build_share_link(&summary, &config.share);
            println!("{}", link.text);
            println!("{}", link.intent_url);
            Ok(())
        }
        PulseStatus::NotFound => {
            println!("{}", render_view(&view));
            Ok(())
        }
        _ => anyhow::bail!(view.error.unwrap_or_else(|| "query failed".to_string())),
    }
}

pub(crate) fn share_summary(view: &PulseView, username: &str) -> ShareSummary {
    ShareSummary::new(
        view.username.as_deref().unwrap_or(username),
        view.total_views,
        view.profile_picture.as_deref(),
    )
}
