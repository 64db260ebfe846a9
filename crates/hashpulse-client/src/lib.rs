//! GraphQL client and query session for HashPulse.

pub mod client;
pub mod error;
pub mod query;
pub mod session;
pub(crate) mod types;

pub use client::HashnodeClient;
pub use error::QueryError;
pub use session::{Completion, PulseStatus, PulseView, QuerySession, QueryState, Ticket};
