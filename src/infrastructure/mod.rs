//! Infrastructure layer: storage implementations.

pub mod persistence;
