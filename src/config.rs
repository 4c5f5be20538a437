//! Benchmark configuration.
//!
//! The binary runs with `BenchConfig::default()`, matching the compiled-in
//! constants of the original demo. The builder exists for tests and for
//! library callers that want smaller problem sizes.

use crate::error::{Error, Result};

/// Parameters for one benchmark run.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Number of elements in each vector (`n`).
    pub vector_len: usize,
    /// Number of times the addition is repeated (`k`).
    pub iterations: usize,
    /// Global work size for kernel launches; each work-item handles a
    /// contiguous span of `vector_len / work_items` elements.
    pub work_items: usize,
    /// Index into the first platform's device list (`CL_DEVICE_TYPE_ALL`).
    pub device_index: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            vector_len: 100_000,
            iterations: 1_000,
            work_items: 10,
            device_index: 0,
        }
    }
}

impl BenchConfig {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Check that the configuration is runnable.
    ///
    /// The kernels split the index range evenly across work-items, so a
    /// vector length that doesn't divide by `work_items` would leave a tail
    /// of elements unwritten. Lengths and counts also ride to the device as
    /// `cl_int`, so they must fit in an `i32`.
    pub fn validate(&self) -> Result<()> {
        if self.vector_len == 0 {
            return Err(Error::config("vector_len must be > 0"));
        }
        if self.iterations == 0 {
            return Err(Error::config("iterations must be > 0"));
        }
        if self.work_items == 0 {
            return Err(Error::config("work_items must be > 0"));
        }
        if self.vector_len % self.work_items != 0 {
            return Err(Error::config(
                "vector_len must be divisible by work_items",
            ));
        }
        if self.vector_len > i32::MAX as usize || self.iterations > i32::MAX as usize {
            return Err(Error::config("vector_len and iterations must fit in an i32"));
        }
        Ok(())
    }
}

/// Builder for [`BenchConfig`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: BenchConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: BenchConfig::default(),
        }
    }

    pub fn vector_len(mut self, n: usize) -> Self {
        self.config.vector_len = n;
        self
    }

    pub fn iterations(mut self, k: usize) -> Self {
        self.config.iterations = k;
        self
    }

    pub fn work_items(mut self, count: usize) -> Self {
        self.config.work_items = count;
        self
    }

    pub fn device_index(mut self, index: usize) -> Self {
        self.config.device_index = index;
        self
    }

    pub fn build(self) -> Result<BenchConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(BenchConfig::default().validate().is_ok());
    }

    #[test]
    fn builder_sets_fields() {
        let config = BenchConfig::builder()
            .vector_len(4096)
            .iterations(16)
            .work_items(8)
            .device_index(1)
            .build()
            .unwrap();

        assert_eq!(config.vector_len, 4096);
        assert_eq!(config.iterations, 16);
        assert_eq!(config.work_items, 8);
        assert_eq!(config.device_index, 1);
    }

    #[test]
    fn rejects_zero_values() {
        assert!(BenchConfig::builder().vector_len(0).build().is_err());
        assert!(BenchConfig::builder().iterations(0).build().is_err());
        assert!(BenchConfig::builder().work_items(0).build().is_err());
    }

    #[test]
    fn rejects_indivisible_vector_len() {
        let result = BenchConfig::builder()
            .vector_len(100)
            .work_items(7)
            .build();
        assert!(result.is_err());
    }
}
