//! Reusable UI components for Folio

pub mod components;

pub use components::*;
