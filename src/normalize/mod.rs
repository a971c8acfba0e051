// src/normalize/mod.rs
//! Source-agnostic normalization: field/office translation, name rewriting,
//! and (state, district) resolution. Nothing in here fails; bad input comes
//! back unchanged or as an empty string.
pub mod fields;
pub mod location;
pub mod name;
pub mod states;

pub use fields::{translate_field, translate_office};
pub use location::normalize_location;
pub use name::normalize_name;
