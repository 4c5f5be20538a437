use opencl3::error_codes::ClError;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors the benchmark can hit.
///
/// Everything here is fatal in the binary: the error is printed and the
/// process exits with code 1. There is no retry or fallback path.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no OpenCL platforms found; check the OpenCL installation")]
    NoPlatform,

    #[error("device index {index} out of range ({available} device(s) available); check the OpenCL installation")]
    NoDevice { index: usize, available: usize },

    #[error("kernel build failed:\n{0}")]
    Build(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("GPU output disagrees with CPU at index {index}: cpu={cpu}, gpu={gpu}")]
    Mismatch { index: usize, cpu: i32, gpu: i32 },

    #[error(transparent)]
    Cl(#[from] ClError),
}

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
}
