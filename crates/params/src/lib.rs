//! Algorithm parameters for hydrocrypt
//!
//! Sizes, round counts and fixed constants live here so that every crate in
//! the workspace agrees on them at compile time.

#![no_std]

pub mod utils;
