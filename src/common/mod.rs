//! Common types and utilities shared across b3rtree.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - The validated [`Degree`] type

pub mod config;
mod degree;
pub mod error;

pub use degree::Degree;
pub use error::{Error, Result};
