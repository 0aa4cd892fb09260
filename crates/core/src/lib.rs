//! Core library for itemboard
//!
//! This crate implements the **Functional Core** of the itemboard application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`itemboard_core`** (this crate): Pure transformation functions with zero I/O
//! - **`itemboard`**: HTTP fetching, the observable state holder and the terminal
//!   presentation layer (the Imperative Shell)
//!
//! Everything here can be tested with fixture data, no HTTP or runtime required.
//!
//! # Module Organization
//!
//! - [`record`]: The wire model returned by the `hiring.json` endpoint
//! - [`error`]: Fetch failures and the message surfaced to consumers
//! - [`transform`]: Filtering, sorting and grouping of records for display
//! - [`state`]: The published display state and its transitions
//!
//! # Example Usage
//!
//! ```rust
//! use itemboard_core::record::Record;
//! use itemboard_core::transform::process_records;
//!
//! let records = vec![
//!     Record::new(4, 1, Some("Item 4")),
//!     Record::new(2, 1, Some("Item 2")),
//!     Record::new(10, 2, None),
//! ];
//!
//! let processed = process_records(records);
//!
//! assert_eq!(processed.len(), 2);
//! assert_eq!(processed[0].id, 2);
//! ```

pub mod error;
pub mod record;
pub mod state;
pub mod transform;
