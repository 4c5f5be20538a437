//! OpenCL host-side plumbing for the benchmark.

pub mod engine;
pub mod kernels;

pub use engine::GpuEngine;
pub use kernels::VECTOR_ADD_SOURCE;
