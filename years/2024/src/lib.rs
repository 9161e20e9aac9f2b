//! Solutions for Advent of Code 2024.
//!
//! Each module parses its puzzle input and computes the answers of both
//! parts. The binaries under `src/bin` wire them up to the command line.

pub mod distance;
pub mod memory;
pub mod reports;
