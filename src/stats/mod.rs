//! Frame-rate counter and its on-page overlay

pub mod frame_stats;
pub mod overlay;

pub use frame_stats::FrameStats;
pub use overlay::StatsOverlay;
