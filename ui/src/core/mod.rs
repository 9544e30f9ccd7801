//! Platform glue and small shared helpers used by the wizard views.

pub mod config;
pub mod format;
pub mod platform;
pub mod timing;
