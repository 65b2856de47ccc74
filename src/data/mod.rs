//! Data loading and external word content
//!
//! The word list and tunables load from an external RON file, with
//! fallback to a built-in list, so the bank is editable without a
//! rebuild.

pub mod words;

pub use words::{default_word_list, WordSource};
