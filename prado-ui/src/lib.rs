//! prado-ui - shared view components for Prado Companion
//!
//! Pure view components with callback props; catalog state lives with the
//! caller and is mutated only through its named transitions.

pub mod components;
pub mod wasm_utils;

pub use components::*;
