pub mod config;
pub mod frame;

pub use frame::{Frame, FrameError, Region};
