//! Output areas
//!
//! - `explainer`: the writer every command prints its explanation to

pub mod explainer;
