//! Search view-state machine.
//!
//! [`SearchSession`] holds the state of one search view and decides which
//! branch the view renders. It performs no IO: operations that start a fetch
//! hand back a [`SearchRequest`] for the caller to execute, and the outcome
//! is fed back through [`SearchSession::complete`].
//!
//! ```text
//! Idle --mount/submit--> Loading --ok--> Success --retry(empty)/submit--> Loading
//!                           |                                                ^
//!                           +--err--> Failure ---------retry/submit----------+
//! ```
//!
//! Each request carries a ticket. Only the completion for the most recently
//! issued ticket is applied, so a slow response can never overwrite the
//! outcome of a newer query.

use crate::error::Error;
use crate::video::VideoSummary;

/// Fetch status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Failure,
}

/// What the search view should render. Pure function of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBranch {
    /// Nothing requested yet
    Blank,
    /// Spinner
    Loading,
    /// Success with an empty result set, offers retry
    NoResults,
    /// Search input plus one card per result
    Results,
    /// Error view, offers retry
    Failure,
}

impl SearchBranch {
    /// Whether this branch exposes a retry control.
    pub fn offers_retry(self) -> bool {
        matches!(self, SearchBranch::Failure | SearchBranch::NoResults)
    }

    /// Whether this branch shows the search input.
    pub fn shows_search_bar(self) -> bool {
        self == SearchBranch::Results
    }
}

/// A fetch the caller must execute on behalf of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub ticket: u64,
}

/// Transient state of one search view instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSession {
    input_draft: String,
    committed_query: String,
    status: SearchStatus,
    results: Vec<VideoSummary>,
    last_ticket: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_draft(&self) -> &str {
        &self.input_draft
    }

    pub fn committed_query(&self) -> &str {
        &self.committed_query
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn results(&self) -> &[VideoSummary] {
        &self.results
    }

    /// Initial fetch issued when the view appears, with an empty query.
    pub fn mount(&mut self) -> SearchRequest {
        self.begin()
    }

    /// Update the uncommitted text. Never changes status.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.input_draft = text.into();
    }

    /// Commit the draft as the new query and start loading.
    pub fn submit(&mut self) -> SearchRequest {
        self.committed_query = self.input_draft.clone();
        self.begin()
    }

    /// Whether the current branch exposes a retry control.
    pub fn can_retry(&self) -> bool {
        self.branch().offers_retry()
    }

    /// Replay the last committed query. The draft is ignored.
    ///
    /// Returns `None` when the current branch offers no retry.
    pub fn retry(&mut self) -> Option<SearchRequest> {
        if !self.can_retry() {
            return None;
        }
        Some(self.begin())
    }

    /// Apply the outcome of a request.
    ///
    /// Returns `false` (and changes nothing) when `ticket` has been
    /// superseded by a newer request.
    pub fn complete(
        &mut self,
        ticket: u64,
        outcome: Result<Vec<VideoSummary>, Error>,
    ) -> bool {
        if ticket != self.last_ticket || self.status != SearchStatus::Loading {
            tracing::debug!(ticket, latest = self.last_ticket, "Discarding stale search response");
            return false;
        }

        match outcome {
            Ok(videos) => {
                self.results = videos;
                self.status = SearchStatus::Success;
            }
            Err(e) => {
                tracing::warn!(query = %self.committed_query, "Search failed: {}", e);
                self.status = SearchStatus::Failure;
            }
        }
        true
    }

    /// Render selection.
    pub fn branch(&self) -> SearchBranch {
        match self.status {
            SearchStatus::Idle => SearchBranch::Blank,
            SearchStatus::Loading => SearchBranch::Loading,
            SearchStatus::Success if self.results.is_empty() => SearchBranch::NoResults,
            SearchStatus::Success => SearchBranch::Results,
            SearchStatus::Failure => SearchBranch::Failure,
        }
    }

    fn begin(&mut self) -> SearchRequest {
        self.last_ticket += 1;
        self.status = SearchStatus::Loading;
        SearchRequest {
            query: self.committed_query.clone(),
            ticket: self.last_ticket,
        }
    }
}
