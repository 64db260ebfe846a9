//! Interactive `watch` command: every stdin line is a new submission.
//!
//! Each submission runs on its own task so a slow lookup never blocks the
//! next one. The shared [`QuerySession`] discards results that arrive after
//! a newer submission, so only the latest username is ever printed.

use std::sync::Arc;

use hashpulse_client::{HashnodeClient, PulseView, QuerySession};
use hashpulse_core::DateStyle;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;

use crate::render::{render_json, render_view};

/// Read usernames from stdin until EOF, then wait for in-flight queries.
///
/// # Errors
///
/// Returns an error if stdin cannot be read.
pub(crate) async fn run_watch(
    client: HashnodeClient,
    date_style: DateStyle,
    json: bool,
) -> anyhow::Result<()> {
    let client = Arc::new(client);
    let session = Arc::new(QuerySession::new(date_style));
    let mut tasks = JoinSet::new();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(username) = lines.next_line().await? {
        if username.is_empty() {
            println!("enter a Hashnode username to analyze");
            continue;
        }

        let client = Arc::clone(&client);
        let session = Arc::clone(&session);
        tasks.spawn(async move {
            if let Some(view) = session.run_for_view(&client, &username).await {
                print_view(&view, json);
            }
        });

        // Reap finished tasks so the set does not grow without bound.
        reap_finished(&mut tasks);
    }

    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = joined {
            tracing::warn!(error = %e, "watch task failed");
        }
    }
    Ok(())
}

/// Drains already-finished tasks without waiting, logging any that panicked
/// or were cancelled. Returns how many were reaped.
pub(crate) fn reap_finished(tasks: &mut JoinSet<()>) -> usize {
    let mut reaped = 0;
    while let Some(joined) = tasks.try_join_next() {
        if let Err(e) = joined {
            tracing::warn!(error = %e, "watch task failed");
        }
        reaped += 1;
    }
    reaped
}

fn print_view(view: &PulseView, json: bool) {
    if json {
        match render_json(view) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => tracing::warn!(error = %e, "failed to render snapshot"),
        }
    } else {
        println!("{}\n", render_view(view));
    }
}
