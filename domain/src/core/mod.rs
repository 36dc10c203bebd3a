//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: generative models a persona can run on
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
