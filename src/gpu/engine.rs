//! OpenCL engine: device discovery, context/queue setup, kernel build.

use std::ptr;

use opencl3::command_queue::CommandQueue;
use opencl3::context::Context;
use opencl3::device::{Device, CL_DEVICE_TYPE_ALL};
use opencl3::kernel::Kernel;
use opencl3::memory::{Buffer, CL_MEM_READ_ONLY, CL_MEM_READ_WRITE};
use opencl3::platform::get_platforms;
use opencl3::program::Program;
use opencl3::types::cl_int;

use super::kernels::{ADD_KERNEL_NAME, LOOPED_ADD_KERNEL_NAME, VECTOR_ADD_SOURCE};
use crate::config::BenchConfig;
use crate::error::{Error, Result};

/// Compiled OpenCL state for the benchmark: first platform, the configured
/// device, one in-order command queue, and both kernels.
///
/// `Debug` is implemented manually because the OpenCL handle types from
/// `opencl3` don't implement `Debug`.
pub struct GpuEngine {
    context: Context,
    queue: CommandQueue,
    kernel_add: Kernel,
    kernel_looped_add: Kernel,
    platform_name: String,
    device_name: String,
}

impl std::fmt::Debug for GpuEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GpuEngine")
            .field("platform_name", &self.platform_name)
            .field("device_name", &self.device_name)
            .finish_non_exhaustive()
    }
}

impl GpuEngine {
    /// Discover a device and compile the kernels.
    ///
    /// Takes the first platform and the device at `config.device_index`
    /// from its `CL_DEVICE_TYPE_ALL` list. An empty platform list, a
    /// missing device index, or a kernel build failure is fatal to the
    /// benchmark; the build error carries the compiler log.
    pub fn new(config: &BenchConfig) -> Result<Self> {
        let platforms = get_platforms()?;
        let platform = platforms.first().ok_or(Error::NoPlatform)?;
        let platform_name = platform.name().unwrap_or_default().trim().to_string();

        let device_ids = platform.get_devices(CL_DEVICE_TYPE_ALL)?;
        let device_id = device_ids
            .get(config.device_index)
            .copied()
            .ok_or(Error::NoDevice {
                index: config.device_index,
                available: device_ids.len(),
            })?;

        let device = Device::new(device_id);
        let device_name = device.name().unwrap_or_default().trim().to_string();

        let context = Context::from_device(&device)?;

        // OpenCL 1.2 queue creation; macOS never got the 2.0 entry points.
        #[allow(deprecated)]
        let queue = CommandQueue::create_default(&context, 0)?;

        let program = Program::create_and_build_from_source(&context, VECTOR_ADD_SOURCE, "")
            .map_err(Error::Build)?;

        let kernel_add = Kernel::create(&program, ADD_KERNEL_NAME)?;
        let kernel_looped_add = Kernel::create(&program, LOOPED_ADD_KERNEL_NAME)?;

        Ok(Self {
            context,
            queue,
            kernel_add,
            kernel_looped_add,
            platform_name,
            device_name,
        })
    }

    /// Allocate a read-write device buffer for `len` `cl_int` elements.
    pub fn create_data_buffer(&self, len: usize) -> Result<Buffer<cl_int>> {
        let buffer =
            unsafe { Buffer::create(&self.context, CL_MEM_READ_WRITE, len, ptr::null_mut())? };
        Ok(buffer)
    }

    /// Allocate the read-only two-element `{n, k}` constants buffer.
    pub fn create_constants_buffer(&self) -> Result<Buffer<cl_int>> {
        let buffer =
            unsafe { Buffer::create(&self.context, CL_MEM_READ_ONLY, 2, ptr::null_mut())? };
        Ok(buffer)
    }

    /// The in-order command queue all benchmark operations go through.
    pub fn queue(&self) -> &CommandQueue {
        &self.queue
    }

    /// Single-pass `add` kernel.
    pub fn kernel_add(&self) -> &Kernel {
        &self.kernel_add
    }

    /// On-device looping `looped_add` kernel.
    pub fn kernel_looped_add(&self) -> &Kernel {
        &self.kernel_looped_add
    }

    /// Name of the selected platform.
    pub fn platform_name(&self) -> &str {
        &self.platform_name
    }

    /// Name of the selected device.
    pub fn device_name(&self) -> &str {
        &self.device_name
    }
}
