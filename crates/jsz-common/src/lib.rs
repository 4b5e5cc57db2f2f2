//! Common types and utilities for the jsz JavaScript printer.
//!
//! This crate provides foundational types used across all jsz crates:
//! - String interning for identifier names (`Atom`, `Interner`)
//! - Printer limits and thresholds

// String interning for identifier deduplication
pub mod interner;
pub use interner::{Atom, Interner};

// Centralized limits and thresholds
pub mod limits;
