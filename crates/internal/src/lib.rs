//! Internal utilities for the hydrocrypt library
//!
//! Everything in here operates on public lengths only; secret-dependent work
//! never branches or indexes on secret data.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod constant_time;

pub use constant_time::{ct_eq, ct_eq_choice, ct_increment, ct_mask};
