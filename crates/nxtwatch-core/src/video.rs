//! Video metadata as returned by the search endpoint and as shown in the UI.
//!
//! The endpoint speaks snake_case ([`RemoteVideo`]); everything past the
//! client boundary works with the normalized [`VideoSummary`].

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date format used by the endpoint for `published_at` (e.g. "Apr 19, 2019").
pub const PUBLISHED_AT_FORMAT: &str = "%b %d, %Y";

/// View count as delivered by the endpoint.
///
/// The live API sends preformatted labels ("1.4K"), older fixtures send
/// plain numbers. Both are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ViewCount {
    Count(u64),
    Label(String),
}

impl fmt::Display for ViewCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewCount::Count(n) => write!(f, "{}", n),
            ViewCount::Label(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ViewCount {
    fn from(n: u64) -> Self {
        ViewCount::Count(n)
    }
}

/// Channel that published a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSummary {
    pub name: String,
    pub profile_image_url: String,
}

/// Normalized video metadata derived from one remote search record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub id: String,
    pub channel: ChannelSummary,
    pub published_at: String,
    pub thumbnail_url: String,
    pub view_count: ViewCount,
    pub title: String,
}

impl VideoSummary {
    /// Relative route of the detail page for this video.
    pub fn route(&self) -> String {
        format!("video/{}", self.id)
    }

    /// Human readable age such as "3 years ago".
    ///
    /// Falls back to the raw `published_at` text when it is not in
    /// [`PUBLISHED_AT_FORMAT`] or lies in the future.
    pub fn published_label(&self, today: NaiveDate) -> String {
        NaiveDate::parse_from_str(&self.published_at, PUBLISHED_AT_FORMAT)
            .ok()
            .and_then(|published| age_label(published, today))
            .unwrap_or_else(|| self.published_at.clone())
    }
}

fn age_label(published: NaiveDate, today: NaiveDate) -> Option<String> {
    if published > today {
        return None;
    }

    let mut months = (today.year() - published.year()) * 12 + today.month() as i32
        - published.month() as i32;
    if today.day() < published.day() {
        months -= 1;
    }

    let (n, unit) = if months >= 12 {
        (months / 12, "year")
    } else if months >= 1 {
        (months, "month")
    } else {
        ((today - published).num_days() as i32, "day")
    };

    Some(match n {
        0 => "today".to_string(),
        1 => format!("1 {} ago", unit),
        n => format!("{} {}s ago", n, unit),
    })
}

/// Channel block of a remote search record.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteChannel {
    pub name: String,
    pub profile_image_url: String,
}

/// One record of the `videos` array in a search response.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteVideo {
    pub id: String,
    pub channel: RemoteChannel,
    pub published_at: String,
    pub thumbnail_url: String,
    pub view_count: ViewCount,
    pub title: String,
}

impl From<RemoteVideo> for VideoSummary {
    fn from(remote: RemoteVideo) -> Self {
        VideoSummary {
            id: remote.id,
            channel: ChannelSummary {
                name: remote.channel.name,
                profile_image_url: remote.channel.profile_image_url,
            },
            published_at: remote.published_at,
            thumbnail_url: remote.thumbnail_url,
            view_count: remote.view_count,
            title: remote.title,
        }
    }
}

/// Body of a successful search response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub videos: Vec<RemoteVideo>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl SearchResponse {
    /// Map every remote record, preserving order.
    pub fn into_summaries(self) -> Vec<VideoSummary> {
        self.videos.into_iter().map(VideoSummary::from).collect()
    }
}
