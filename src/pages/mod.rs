//! Page components for NxtWatch.

mod not_found;
mod search;
mod video_detail;

pub use not_found::NotFound;
pub use search::Search;
pub use video_detail::VideoDetail;
