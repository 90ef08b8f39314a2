//! Work schedule engine.
//!
//! This crate records daily work shifts and derives their pay-relevant
//! values: shift and day durations across midnight, night minutes, the
//! early-morning, maintenance and transport bonus flags, and the split-shift
//! flag. It validates minimum shift durations and persists each day as a set
//! of shift records plus one summary.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod storage;
