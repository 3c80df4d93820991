#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod motion;
pub mod time;
pub mod timer;

pub use error::{MotionError, ObserveError, ScrollError};
pub use time::Clock;
pub use timer::{Fired, TimerHandle, TimerSet};
