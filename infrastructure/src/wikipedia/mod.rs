//! Wikipedia lookup adapter
//!
//! Resolves character names through the MediaWiki Action API:
//!
//! 1. full-text search (with spelling suggestion) picks the title
//! 2. one page query follows redirects and returns the intro extract and the
//!    `disambiguation` page property
//! 3. disambiguation pages are parsed to HTML and their list links become
//!    the candidate titles

mod client;
mod disambiguation;
mod types;

pub use client::WikipediaClient;
