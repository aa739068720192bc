pub mod config;
pub mod cursor;
pub mod display;
pub mod error;
pub mod indicator;
pub mod mode;
pub mod resolution;
pub mod schedule;
#[cfg(test)]
mod testing;
pub mod toggler;
pub mod transaction;

pub use config::TogglerConfig;
pub use error::ToggleError;
pub use resolution::{Resolution, ResolutionTable};
pub use toggler::{Click, ClickAction, DisplayResolutionToggler};
