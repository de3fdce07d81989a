pub mod flags;
pub mod report;
pub mod runner;
pub mod tracker;

pub use runner::{InspectOptions, Inspector};
