//! clbench - CPU vs. OpenCL elementwise vector-add micro-benchmark.
//!
//! Adds two integer vectors of length `n`, `k` times over, on the CPU and
//! then on an OpenCL device in two flavors:
//!
//! - **resident**: buffers uploaded once, a `looped_add` kernel iterates
//!   on-device;
//! - **streamed**: inputs re-uploaded every iteration, the plain `add`
//!   kernel launched each time.
//!
//! Each flavor is reported as a CPU/GPU speedup ratio, and both kernel
//! outputs are checked bit-for-bit against the CPU result.
//!
//! # Quick Start
//!
//! ```no_run
//! use clbench::prelude::*;
//!
//! # fn main() -> clbench::Result<()> {
//! let config = BenchConfig::builder().vector_len(4096).work_items(16).build()?;
//! let (a, b) = make_vectors(config.vector_len);
//!
//! let cpu_run = time_add(&a, &b, config.iterations);
//! let engine = GpuEngine::new(&config)?;
//! let gpu_run = run_resident(&engine, &config, &a, &b)?;
//!
//! verify(&cpu_run.output, &gpu_run.output)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_debug_implementations)]

pub mod bench;
pub mod config;
pub mod cpu;
pub mod error;
pub mod gpu;
pub mod prelude;
pub mod report;

pub use config::{BenchConfig, ConfigBuilder};
pub use error::{Error, Result};
