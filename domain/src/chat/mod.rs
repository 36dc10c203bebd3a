//! Chat loop vocabulary.

pub mod input;
