//! UI Components for NxtWatch.

mod nav_header;
mod search_videos;
mod video_card;

pub use nav_header::NavHeader;
pub use search_videos::SearchVideos;
pub use video_card::{CardLayout, CompactVideoCard, VideoCard};
