//! Halmi: browse a fixed catalog of Busan caregiver listings, narrow it by
//! district / headcount / date range, and hand selections off as navigation
//! intents.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod services;
