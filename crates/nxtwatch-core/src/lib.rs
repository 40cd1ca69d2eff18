//! NxtWatch Core Library
//!
//! Video search client and view-state for the NxtWatch desktop app.
//!
//! ## Overview
//!
//! - [`VideoApi`] talks to the remote search endpoint
//! - [`SearchSession`] is the UI-free state machine behind the search view
//! - [`VideoSummary`] is the normalized record every view consumes
//!
//! ## Quick Start
//!
//! ```ignore
//! use nxtwatch_core::{ClientConfig, SearchSession, VideoApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = VideoApi::new(ClientConfig::default().with_token(Some(token)))?;
//!     let mut session = SearchSession::new();
//!
//!     session.set_draft("cat");
//!     let request = session.submit();
//!     let outcome = api.search(&request.query).await;
//!     session.complete(request.ticket, outcome);
//!
//!     for video in session.results() {
//!         println!("{} ({} views)", video.title, video.view_count);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod session;
pub mod video;

// Re-exports
pub use api::VideoApi;
pub use config::{default_data_dir, ClientConfig, CredentialStore, DEFAULT_API_BASE};
pub use error::{Error, Result};
pub use session::{SearchBranch, SearchRequest, SearchSession, SearchStatus};
pub use video::{ChannelSummary, RemoteVideo, SearchResponse, VideoSummary, ViewCount};
