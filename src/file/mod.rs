//! File I/O operations.
//!
//! This module provides functionality to load text files from disk or stdin
//! into buffers.

pub mod loader;
