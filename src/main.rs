//! CPU vs. OpenCL vector-add micro-benchmark binary.
//!
//! No arguments; problem size and iteration count are the compiled-in
//! defaults from [`BenchConfig`]. Errors (missing platform/device, kernel
//! build failure, result mismatch) are printed to stdout and the process
//! exits with code 1.

use std::process;

use clbench::bench;
use clbench::config::BenchConfig;
use clbench::cpu;
use clbench::error::Result;
use clbench::gpu::GpuEngine;
use clbench::report::Comparison;

fn main() {
    if let Err(err) = run() {
        println!("{err}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = BenchConfig::builder().build()?;

    let (a, b) = cpu::make_vectors(config.vector_len);
    let cpu_run = cpu::time_add(&a, &b, config.iterations);

    let engine = GpuEngine::new(&config)?;
    println!("platform: {}", engine.platform_name());
    println!("device:   {}", engine.device_name());
    println!();

    let resident = bench::run_resident(&engine, &config, &a, &b)?;
    bench::verify(&cpu_run.output, &resident.output)?;

    let streamed = bench::run_streamed(&engine, &config, &a, &b)?;
    bench::verify(&cpu_run.output, &streamed.output)?;

    print!(
        "{}",
        Comparison {
            label: "resident buffers",
            cpu: cpu_run.elapsed,
            gpu: resident.elapsed,
        }
        .render()
    );
    println!("result check: ok");
    println!();

    print!(
        "{}",
        Comparison {
            label: "streamed buffers",
            cpu: cpu_run.elapsed,
            gpu: streamed.elapsed,
        }
        .render()
    );
    println!("result check: ok");

    Ok(())
}
