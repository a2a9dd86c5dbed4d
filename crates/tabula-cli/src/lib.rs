//! CLI library components for Tabula.

pub mod logging;
pub mod records;
pub mod summary;
