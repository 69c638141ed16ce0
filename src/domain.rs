//! Domain models for notes management.
//!
//! This module contains the core domain types: the [`Note`] itself and the
//! [`Config`] that says where notes are kept.

/// Note domain model.
pub mod note;
pub use note::{Error as NoteError, Note};

mod config;
pub use config::{Config, ConfigError};
