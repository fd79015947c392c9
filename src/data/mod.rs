//! # Data structures
pub mod number_types;
