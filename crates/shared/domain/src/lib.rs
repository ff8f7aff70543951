//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O or heavy logic, just letter classes, text normalization
//! and the configuration model shared by the other crates.

pub mod config;
pub mod letters;
pub mod normalization;
