//! Ports implemented by outer layers.

pub mod description_source;
pub mod progress;
