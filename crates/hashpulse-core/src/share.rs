//! Share text and URLs for posting a user's total views to social media.
//!
//! Only builds strings. Opening the intent URL is left to the caller.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::app_config::ShareConfig;

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Inputs for a share link. Callers pass the values as they were displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSummary {
    pub username: String,
    pub total_views: u64,
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub text: String,
    pub card_url: String,
    pub intent_url: String,
}

impl ShareSummary {
    pub fn new(
        username: impl Into<String>,
        total_views: u64,
        profile_picture: Option<&str>,
    ) -> Self {
        Self {
            username: username.into(),
            total_views,
            profile_picture: profile_picture.map(str::to_string),
        }
    }

    #[must_use]
    pub fn text(&self) -> String {
        format!(
            "Check out my Hashnode analytics! I've reached {} total views. 🚀 #HashnodePulse",
            self.total_views
        )
    }
}

/// Builds the share-card URL and the social intent URL for `summary`.
#[must_use]
pub fn build_share_link(summary: &ShareSummary, config: &ShareConfig) -> ShareLink {
    let views = summary.total_views.to_string();
    let mut card_params = vec![("username", summary.username.as_str()), ("views", views.as_str())];
    if config.include_avatar {
        if let Some(pic) = summary.profile_picture.as_deref() {
            card_params.push(("avatar", pic));
        }
    }
    let card_url = append_query(&config.card_url, &card_params);

    let text = summary.text();
    let intent_url = append_query(
        &config.intent_url,
        &[("text", text.as_str()), ("url", card_url.as_str())],
    );

    ShareLink {
        text,
        card_url,
        intent_url,
    }
}

fn append_query(base: &str, params: &[(&str, &str)]) -> String {
    let mut out = base.to_string();
    let mut sep = if base.contains('?') { '&' } else { '?' };
    for (key, value) in params {
        out.push(sep);
        out.push_str(key);
        out.push('=');
        out.extend(utf8_percent_encode(value, URI_COMPONENT));
        sep = '&';
    }
    out
}
