//! Slide generation for Hua Rong Dao boards.

pub mod generator;
mod targets;

pub use generator::{MoveGenerator, SlideList};
