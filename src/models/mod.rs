//! Models loaded from outside the domain layer.

pub mod config;
