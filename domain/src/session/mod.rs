//! Chat session domain.
//!
//! - [`entities::Message`]: a single turn within a session
//! - [`entities::Role`]: who authored a turn

pub mod entities;
