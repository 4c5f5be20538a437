//! Convenience re-exports for benchmark callers.

pub use crate::bench::{run_resident, run_streamed, verify, GpuRun};
pub use crate::config::{BenchConfig, ConfigBuilder};
pub use crate::cpu::{make_vectors, time_add, CpuRun};
pub use crate::error::{Error, Result};
pub use crate::gpu::GpuEngine;
pub use crate::report::Comparison;
