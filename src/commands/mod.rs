//! Command implementations

pub mod benchmark;
pub mod descramble;
pub mod simple;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, BenchmarkSample, run_benchmark};
pub use descramble::{DescrambleConfig, DescrambleResult, descramble, find_words};
pub use simple::run_simple;
