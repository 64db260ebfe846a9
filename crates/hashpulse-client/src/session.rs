//! Submission state machine for view queries.
//!
//! Every non-empty submission gets a [`Ticket`] carrying a monotonically
//! increasing sequence number. Only the completion whose ticket matches the
//! latest issued sequence may change the state; anything older is reported
//! as [`Completion::Stale`] and dropped, so a slow response for an earlier
//! username can never overwrite the result for a newer one.
//!
//! Transitions:
//!
//! | From                          | Event              | To                  |
//! |-------------------------------|--------------------|---------------------|
//! | any                           | submit (non-empty) | `Pending`           |
//! | any                           | submit (empty)     | unchanged           |
//! | `Pending` (latest ticket)     | `Ok` with user     | `Resolved`          |
//! | `Pending` (latest ticket)     | `Ok` without user  | `Failed(NotFound)`  |
//! | `Pending` (latest ticket)     | `Err`              | `Failed`            |
//! | any                           | older ticket       | unchanged           |
//! | not `Pending`                 | any completion     | unchanged           |
//!
//! A failure replaces whatever was resolved before it, so the chart of a
//! previous user is cleared rather than shown next to an error.

use std::sync::{Mutex, MutexGuard, PoisonError};

use hashpulse_core::{derive_series, derive_total, DateStyle, QueryResult, ViewSeriesPoint};
use serde::Serialize;

use crate::client::HashnodeClient;
use crate::error::QueryError;

#[derive(Debug)]
pub enum QueryState {
    Idle,
    Pending { username: String },
    Resolved { username: String, result: QueryResult },
    Failed { username: String, error: QueryError },
}

/// Handle for one dispatched submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    username: String,
}

impl Ticket {
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The outcome belonged to the latest submission and is now the state.
    Applied,
    /// A newer submission exists; the outcome was discarded.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PulseStatus {
    Idle,
    Loading,
    Ready,
    NotFound,
    Error,
}

/// Everything a presentation layer needs, projected from the current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PulseView {
    pub status: PulseStatus,
    pub username: Option<String>,
    pub name: Option<String>,
    pub profile_picture: Option<String>,
    pub total_views: u64,
    pub series: Vec<ViewSeriesPoint>,
    pub error: Option<String>,
}

struct Inner {
    latest: u64,
    state: QueryState,
}

pub struct QuerySession {
    inner: Mutex<Inner>,
    date_style: DateStyle,
}

impl Default for QuerySession {
    fn default() -> Self {
        Self::new(DateStyle::default())
    }
}

impl QuerySession {
    #[must_use]
    pub fn new(date_style: DateStyle) -> Self {
        Self {
            inner: Mutex::new(Inner {
                latest: 0,
                state: QueryState::Idle,
            }),
            date_style,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records a new submission and moves to `Pending`.
    ///
    /// Returns `None` for an empty username; nothing changes and no request
    /// should be made.
    pub fn submit(&self, username: &str) -> Option<Ticket> {
        if username.is_empty() {
            tracing::debug!("empty username submitted, skipping query");
            return None;
        }

        let mut inner = self.lock();
        inner.latest += 1;
        inner.state = QueryState::Pending {
            username: username.to_string(),
        };
        tracing::debug!(seq = inner.latest, username, "submission pending");
        Some(Ticket {
            seq: inner.latest,
            username: username.to_string(),
        })
    }

    /// Applies `outcome` if `ticket` is still the latest submission and the
    /// session is waiting on it.
    ///
    /// A ticket that was superseded, or that has already been completed, is
    /// reported as [`Completion::Stale`] and changes nothing.
    pub fn complete(
        &self,
        ticket: &Ticket,
        outcome: Result<QueryResult, QueryError>,
    ) -> Completion {
        let mut inner = self.lock();
        Self::apply(&mut inner, ticket, outcome)
    }

    /// Like [`QuerySession::complete`], but returns the snapshot taken under
    /// the same lock when the outcome was applied.
    pub fn complete_with_view(
        &self,
        ticket: &Ticket,
        outcome: Result<QueryResult, QueryError>,
    ) -> Option<PulseView> {
        let mut inner = self.lock();
        match Self::apply(&mut inner, ticket, outcome) {
            Completion::Applied => Some(self.project(&inner.state)),
            Completion::Stale => None,
        }
    }

    fn apply(
        inner: &mut Inner,
        ticket: &Ticket,
        outcome: Result<QueryResult, QueryError>,
    ) -> Completion {
        let awaiting = matches!(inner.state, QueryState::Pending { .. });
        if ticket.seq != inner.latest || !awaiting {
            tracing::debug!(
                seq = ticket.seq,
                latest = inner.latest,
                awaiting,
                username = %ticket.username,
                "discarding stale completion"
            );
            return Completion::Stale;
        }

        let username = ticket.username.clone();
        inner.state = match outcome {
            Ok(result) if result.user.is_some() => QueryState::Resolved { username, result },
            Ok(_) => QueryState::Failed {
                error: QueryError::NotFound {
                    username: username.clone(),
                },
                username,
            },
            Err(error) => {
                tracing::info!(username = %username, error = %error, "view query failed");
                QueryState::Failed { username, error }
            }
        };
        Completion::Applied
    }

    /// Submits `username`, runs the query, and applies the outcome.
    ///
    /// Returns `None` when the username is empty and nothing was sent.
    pub async fn run(&self, client: &HashnodeClient, username: &str) -> Option<Completion> {
        let ticket = self.submit(username)?;
        let outcome = client.fetch_user_views(ticket.username()).await;
        Some(self.complete(&ticket, outcome))
    }

    /// Submits `username`, runs the query, and returns the resulting view if
    /// this submission was still the latest when it completed.
    ///
    /// Returns `None` for an empty username or a stale completion.
    pub async fn run_for_view(&self, client: &HashnodeClient, username: &str) -> Option<PulseView> {
        let ticket = self.submit(username)?;
        let outcome = client.fetch_user_views(ticket.username()).await;
        self.complete_with_view(&ticket, outcome)
    }

    /// Sequence number of the most recent submission (0 before any).
    #[must_use]
    pub fn latest_seq(&self) -> u64 {
        self.lock().latest
    }

    /// Runs `f` against the current state while holding the lock.
    pub fn with_state<R>(&self, f: impl FnOnce(&QueryState) -> R) -> R {
        f(&self.lock().state)
    }

    #[must_use]
    pub fn snapshot(&self) -> PulseView {
        let inner = self.lock();
        self.project(&inner.state)
    }

    fn project(&self, state: &QueryState) -> PulseView {
        match state {
            QueryState::Idle => PulseView::empty(PulseStatus::Idle, None),
            QueryState::Pending { username } => {
                PulseView::empty(PulseStatus::Loading, Some(username.clone()))
            }
            QueryState::Resolved { username, result } => {
                let user = result.user.as_ref();
                PulseView {
                    status: PulseStatus::Ready,
                    username: Some(username.clone()),
                    name: user.map(|u| u.name.clone()),
                    profile_picture: user.and_then(|u| u.profile_picture.clone()),
                    total_views: derive_total(Some(result)),
                    series: derive_series(Some(result), self.date_style),
                    error: None,
                }
            }
            QueryState::Failed { username, error } => {
                let status = if matches!(error, QueryError::NotFound { .. }) {
                    PulseStatus::NotFound
                } else {
                    PulseStatus::Error
                };
                PulseView {
                    error: Some(error.to_string()),
                    ..PulseView::empty(status, Some(username.clone()))
                }
            }
        }
    }
}

impl PulseView {
    fn empty(status: PulseStatus, username: Option<String>) -> Self {
        Self {
            status,
            username,
            name: None,
            profile_picture: None,
            total_views: 0,
            series: Vec::new(),
            error: None,
        }
    }
}
