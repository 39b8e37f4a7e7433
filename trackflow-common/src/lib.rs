//! # Trackflow Common Library
//!
//! Shared code for the Trackflow services including:
//! - Database models (principals, profiles, demo tracks, production rooms)
//! - Database initialization and migrations
//! - Error taxonomy for the review workflow
//! - Configuration loading and root folder resolution
//! - Credential hashing and session token helpers

pub mod auth;
pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
