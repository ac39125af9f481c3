//! Core domain types and the scoring engine.

pub mod analysis;
pub mod config_validation;
pub mod draw;
pub mod error;
pub mod expander;
pub mod number_set;
pub mod ranker;
pub mod scorer;
pub mod suggester;
pub mod wheel;
pub mod wheel_index;
