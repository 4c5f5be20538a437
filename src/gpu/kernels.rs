//! Embedded OpenCL C source for the benchmark kernels.
//!
//! Both entry points split the vector into contiguous spans of
//! `n / get_global_size(0)` elements, one span per work-item. The constants
//! buffer carries `{n, k}` so the source compiles once for any problem size.

/// Program source with both entry points: `add` (single pass) and
/// `looped_add` (repeats the pass `k` times on-device).
pub const VECTOR_ADD_SOURCE: &str = r#"
__kernel void add(__global const int* a,
                  __global const int* b,
                  __global int* out,
                  __global const int* constants) {
    int id = (int)get_global_id(0);
    int nthreads = (int)get_global_size(0);
    int n = constants[0];

    int span = n / nthreads;
    int start = span * id;
    int stop = span * (id + 1);

    for (int i = start; i < stop; i++) {
        out[i] = a[i] + b[i];
    }
}

__kernel void looped_add(__global const int* a,
                         __global const int* b,
                         __global int* out,
                         __global const int* constants) {
    int id = (int)get_global_id(0);
    int nthreads = (int)get_global_size(0);
    int n = constants[0];
    int k = constants[1];

    int span = n / nthreads;
    int start = span * id;
    int stop = span * (id + 1);

    for (int pass = 0; pass < k; pass++) {
        for (int i = start; i < stop; i++) {
            out[i] = a[i] + b[i];
        }
    }
}
"#;

/// Entry point name for the single-pass kernel.
pub const ADD_KERNEL_NAME: &str = "add";

/// Entry point name for the on-device looping kernel.
pub const LOOPED_ADD_KERNEL_NAME: &str = "looped_add";
