//! # Algorithms
//!
//! Everything here is generic over the `Number` contract, except for the demonstration driver.
pub mod demo;
pub mod identities;
