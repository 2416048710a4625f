//! Shared models and utilities used across feature slices.

pub mod models;
