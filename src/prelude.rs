pub use crate::error::ClockError;
pub use crate::{AngleSeparationAnalyzer, SeparationEvent};

pub use log::*;
