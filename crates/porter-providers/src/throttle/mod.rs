//! Login admission providers

pub mod null;
pub mod sliding_window;

pub use null::NullLoginGuard;
pub use sliding_window::SlidingWindowGuard;
