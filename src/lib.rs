//! Read, reverse, combine and thin molecular trajectories stored as XYZ text.

pub mod error;
pub mod format;
pub mod formats;
pub mod frame;
pub mod trajectory;
pub mod transform;

pub use error::TrajError;
pub use format::WriteMode;
pub use frame::Frame;
pub use trajectory::Trajectory;
