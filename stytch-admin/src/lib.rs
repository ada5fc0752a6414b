//! Administrative mutations against the Stytch B2B and management APIs.
pub mod commands;
pub mod config;
pub mod models;
pub mod services;
