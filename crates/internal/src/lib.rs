//! Internal utilities for the ecsign library
//!
//! Not part of the public API; other ecsign crates depend on it.

#![forbid(unsafe_code)]

pub mod constant_time;
