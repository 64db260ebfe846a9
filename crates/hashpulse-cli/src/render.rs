//! Plain-text rendering of a [`PulseView`].

use std::fmt::Write;

use hashpulse_client::{PulseStatus, PulseView};

const TITLE_WIDTH: usize = 50;

/// Renders a snapshot as a header plus a `DATE / VIEWS / TITLE` table.
pub(crate) fn render_view(view: &PulseView) -> String {
    let username = view.username.as_deref().unwrap_or_default();
    match view.status {
        PulseStatus::Idle => "enter a Hashnode username to analyze".to_string(),
        PulseStatus::Loading => format!("loading views for '{username}'..."),
        PulseStatus::NotFound | PulseStatus::Error => format!(
            "Error: {}",
            view.error.as_deref().unwrap_or("unknown error")
        ),
        PulseStatus::Ready => render_ready(view, username),
    }
}

fn render_ready(view: &PulseView, username: &str) -> String {
    let name = view.name.as_deref().unwrap_or(username);
    let mut out = String::new();
    let _ = writeln!(out, "{name}'s Pulse (@{username})");
    let _ = writeln!(out, "Total Views: {}", view.total_views);

    if view.series.is_empty() {
        out.push_str("no posts found");
        return out;
    }

    out.push('\n');
    let _ = writeln!(out, "{:<12}{:>8}  TITLE", "DATE", "VIEWS");
    for point in &view.series {
        let title = if point.title.chars().count() > TITLE_WIDTH {
            format!("{}...", point.title.chars().take(TITLE_WIDTH).collect::<String>())
        } else {
            point.title.clone()
        };
        let _ = writeln!(out, "{:<12}{:>8}  {}", point.date, point.views, title);
    }
    out.truncate(out.trim_end().len());
    out
}

/// Renders a snapshot as pretty JSON.
pub(crate) fn render_json(view: &PulseView) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}
