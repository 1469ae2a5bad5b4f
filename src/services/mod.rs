//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `filters.rs` — session filter state store (merge/validate/commit).
//! - `focus.rs` — carousel focus tracking over the visible subset.
//! - `navigation.rs` — user actions translated into navigation intents.
//! - `session.rs` — interactive session loop owning the mutable state.
//! - `config.rs` — optional user config file.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod filters;
pub mod focus;
pub mod navigation;
pub mod output;
pub mod session;
