//! Speedup computation and plain-text rendering.

use std::time::Duration;

/// CPU-vs-GPU timing for one scenario.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Scenario name shown in the header line.
    pub label: &'static str,
    /// CPU baseline time.
    pub cpu: Duration,
    /// GPU scenario time.
    pub gpu: Duration,
}

impl Comparison {
    /// CPU time divided by GPU time; above 1.0 the GPU won.
    pub fn speedup(&self) -> f64 {
        self.cpu.as_secs_f64() / self.gpu.as_secs_f64()
    }

    /// Render the scenario block the binary prints.
    pub fn render(&self) -> String {
        let ratio = self.speedup();
        let verdict = if ratio > 1.0 {
            format!("GPU is {ratio:.2} times faster!")
        } else {
            format!("GPU is {ratio:.2} times slower :(")
        };
        format!(
            "{} -----------\nCPU time: {:?}\nGPU time: {:?}\n{}\n",
            self.label, self.cpu, self.gpu, verdict
        )
    }
}
