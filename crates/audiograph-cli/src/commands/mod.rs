//! CLI command implementations.

pub mod catalog;
pub mod check;
pub mod common;
pub mod convert;
pub mod encode;
pub mod params;
