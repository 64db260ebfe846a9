//! Pure projections from a [`QueryResult`] into chart-ready data.
//!
//! Absent results, absent users, and users without publications are the
//! normal "nothing to show" case: every function here returns the empty or
//! zero value for them and never fails.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::views::{Post, QueryResult, ViewSeriesPoint};

/// Calendar-date rendering used for series labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateStyle {
    /// `M/D/YYYY` without zero padding, e.g. `1/1/2024`.
    #[default]
    UsNumeric,
    /// `YYYY-MM-DD`.
    Iso,
}

impl fmt::Display for DateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateStyle::UsNumeric => write!(f, "us"),
            DateStyle::Iso => write!(f, "iso"),
        }
    }
}

impl FromStr for DateStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "us" | "us_numeric" | "en-us" => Ok(DateStyle::UsNumeric),
            "iso" | "iso8601" => Ok(DateStyle::Iso),
            other => Err(format!("unknown date style '{other}' (expected 'us' or 'iso')")),
        }
    }
}

/// Posts of the first publication of the result's user.
///
/// Later publications are ignored; the query only requests one.
#[must_use]
pub fn first_publication_posts(result: Option<&QueryResult>) -> &[Post] {
    result
        .and_then(|r| r.user.as_ref())
        .and_then(|u| u.publications.first())
        .map(|p| p.posts.as_slice())
        .unwrap_or_default()
}

/// Builds the views series in input post order.
#[must_use]
pub fn derive_series(result: Option<&QueryResult>, style: DateStyle) -> Vec<ViewSeriesPoint> {
    first_publication_posts(result)
        .iter()
        .map(|post| ViewSeriesPoint {
            title: post.title.clone(),
            views: post.views,
            date: format_date(&post.published_at, style),
        })
        .collect()
}

/// Sum of views over the first publication's posts.
#[must_use]
pub fn derive_total(result: Option<&QueryResult>) -> u64 {
    first_publication_posts(result)
        .iter()
        .fold(0u64, |acc, post| acc.saturating_add(post.views))
}

/// Formats a raw API timestamp as a calendar date.
///
/// Accepts RFC 3339 timestamps (converted to UTC) and bare `YYYY-MM-DD`
/// dates. Anything else is returned unchanged.
#[must_use]
pub fn format_date(raw: &str, style: DateStyle) -> String {
    let Some(date) = parse_calendar_date(raw) else {
        return raw.to_string();
    };
    match style {
        DateStyle::UsNumeric => format!("{}/{}/{}", date.month(), date.day(), date.year()),
        DateStyle::Iso => date.format("%Y-%m-%d").to_string(),
    }
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
