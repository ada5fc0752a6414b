//! admin-core: configuration, error and logging plumbing shared by the
//! Stytch admin tools.
pub mod config;
pub mod error;
pub mod observability;
