//! The two timed GPU scenarios.
//!
//! Both scenarios time everything a caller would actually pay for: buffer
//! allocation, uploads, kernel execution, and the final download. Every
//! queue operation is synchronous — writes and reads pass the blocking
//! flag, launches wait on their event — so the elapsed time is plain
//! wall-clock over a serial command stream.

use std::time::{Duration, Instant};

use opencl3::kernel::ExecuteKernel;
use opencl3::types::{cl_int, CL_BLOCKING};

use crate::config::BenchConfig;
use crate::error::{Error, Result};
use crate::gpu::GpuEngine;

/// Result of one timed GPU scenario.
#[derive(Debug)]
pub struct GpuRun {
    /// Wall-clock time from first allocation through final read.
    pub elapsed: Duration,
    /// Output vector read back from the device.
    pub output: Vec<i32>,
}

/// Resident-buffer scenario: upload once, loop on-device.
///
/// Buffers are allocated and written a single time, then `looped_add`
/// iterates `config.iterations` times inside the kernel. This is the
/// fair comparison against the CPU loop — the transfer overhead is paid
/// once, like the CPU's one-time vector fill.
pub fn run_resident(
    engine: &GpuEngine,
    config: &BenchConfig,
    a: &[i32],
    b: &[i32],
) -> Result<GpuRun> {
    let n = config.vector_len;
    let constants = [n as cl_int, config.iterations as cl_int];
    let queue = engine.queue();

    let start = Instant::now();

    let mut a_buf = engine.create_data_buffer(n)?;
    let mut b_buf = engine.create_data_buffer(n)?;
    let out_buf = engine.create_data_buffer(n)?;
    let mut constants_buf = engine.create_constants_buffer()?;

    unsafe {
        queue.enqueue_write_buffer(&mut a_buf, CL_BLOCKING, 0, a, &[])?;
        queue.enqueue_write_buffer(&mut b_buf, CL_BLOCKING, 0, b, &[])?;
        queue.enqueue_write_buffer(&mut constants_buf, CL_BLOCKING, 0, &constants, &[])?;
    }

    let kernel_event = unsafe {
        ExecuteKernel::new(engine.kernel_looped_add())
            .set_arg(&a_buf)
            .set_arg(&b_buf)
            .set_arg(&out_buf)
            .set_arg(&constants_buf)
            .set_global_work_size(config.work_items)
            .enqueue_nd_range(queue)?
    };
    kernel_event.wait()?;

    let mut output = vec![0i32; n];
    unsafe {
        queue.enqueue_read_buffer(&out_buf, CL_BLOCKING, 0, &mut output, &[])?;
    }

    Ok(GpuRun {
        elapsed: start.elapsed(),
        output,
    })
}

/// Streamed-buffer scenario: re-upload every iteration.
///
/// The inputs (and constants) are written to the device on every outer
/// iteration before a single-pass `add` launch, so the measured time is
/// dominated by host-to-device traffic. The output is read back once at
/// the end.
pub fn run_streamed(
    engine: &GpuEngine,
    config: &BenchConfig,
    a: &[i32],
    b: &[i32],
) -> Result<GpuRun> {
    let n = config.vector_len;
    let constants = [n as cl_int, config.iterations as cl_int];
    let queue = engine.queue();

    let start = Instant::now();

    let mut a_buf = engine.create_data_buffer(n)?;
    let mut b_buf = engine.create_data_buffer(n)?;
    let out_buf = engine.create_data_buffer(n)?;
    let mut constants_buf = engine.create_constants_buffer()?;

    for _ in 0..config.iterations {
        unsafe {
            queue.enqueue_write_buffer(&mut a_buf, CL_BLOCKING, 0, a, &[])?;
            queue.enqueue_write_buffer(&mut b_buf, CL_BLOCKING, 0, b, &[])?;
            queue.enqueue_write_buffer(&mut constants_buf, CL_BLOCKING, 0, &constants, &[])?;
        }

        let kernel_event = unsafe {
            ExecuteKernel::new(engine.kernel_add())
                .set_arg(&a_buf)
                .set_arg(&b_buf)
                .set_arg(&out_buf)
                .set_arg(&constants_buf)
                .set_global_work_size(config.work_items)
                .enqueue_nd_range(queue)?
        };
        kernel_event.wait()?;
    }

    let mut output = vec![0i32; n];
    unsafe {
        queue.enqueue_read_buffer(&out_buf, CL_BLOCKING, 0, &mut output, &[])?;
    }

    Ok(GpuRun {
        elapsed: start.elapsed(),
        output,
    })
}

/// Check that a GPU output matches the CPU reference bit-for-bit.
///
/// A mismatch means a kernel is wrong, which would make the timings
/// meaningless, so it's an error rather than a report line.
pub fn verify(cpu: &[i32], gpu: &[i32]) -> Result<()> {
    debug_assert_eq!(cpu.len(), gpu.len());
    for (index, (&c, &g)) in cpu.iter().zip(gpu.iter()).enumerate() {
        if c != g {
            return Err(Error::Mismatch {
                index,
                cpu: c,
                gpu: g,
            });
        }
    }
    Ok(())
}
