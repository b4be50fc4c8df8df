//! Request handlers, grouped by API area.

pub mod ai;
pub mod auth;
pub mod backup;
pub mod billing;
pub mod community;
pub mod meta;
