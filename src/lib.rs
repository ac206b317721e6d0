//! lifeos - Life pillar scoring from daily logs
//!
//! Turns a date-ordered history of self-logged daily activity into 0-100
//! scores for five life pillars, trend comparisons, rolling score history,
//! and rule-based observations.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::LifeosError;
