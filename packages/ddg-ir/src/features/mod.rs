//! Vertical feature slices.

pub mod ddg;
pub mod traversal;
