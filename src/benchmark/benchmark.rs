use std::time::Instant;

use crate::collision::objects::{NVec2, Object};
use crate::collision::params::Parameters;
use crate::collision::search::{find_collision, find_collision_closed_form};

/// Run `f`, print its wall-clock duration under `label`, return its value.
/// Generic instrumentation wrapper, usable around any operation.
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> T {
    let t0 = Instant::now();
    let out = f();
    println!("{label}: {:.6} s", t0.elapsed().as_secs_f64());
    out
}

/// Helper: the head-on converging pair used across the benches
fn converging_pair() -> (Object, Object) {
    let o1 = Object::new(1.0, NVec2::new(1.0, -1.0), NVec2::new(-5.0, 5.0))
        .expect("valid test object");
    let o2 = Object::new(1.0, NVec2::new(-1.0, 1.0), NVec2::new(4.0, -4.0))
        .expect("valid test object");
    (o1, o2)
}

/// Benchmark the fixed-step scan against the closed-form root for a range
/// of step sizes
/// Paste output directly into a spreadsheet to graph
pub fn bench_search() {
    let (o1, o2) = converging_pair();

    println!("h0,steps,scan_ms,closed_form_ms,scan_t,exact_t");

    // Each tenthing of h0 multiplies the scan cost by ten; the closed form
    // stays O(1)
    let mut h0 = 0.1;
    while h0 >= 1e-6 {
        let params = Parameters {
            t_end: 20.0,
            h0,
            merge_t: 0.1,
        };

        // Warm up
        let _ = find_collision(&o1, &o2, &params);
        let _ = find_collision_closed_form(&o1, &o2, &params);

        let t0 = Instant::now();
        let scan = find_collision(&o1, &o2, &params);
        let ms_scan = t0.elapsed().as_secs_f64() * 1000.0;

        let t1 = Instant::now();
        let exact = find_collision_closed_form(&o1, &o2, &params);
        let ms_exact = t1.elapsed().as_secs_f64() * 1000.0;

        let steps = (params.t_end / h0) as u64;
        let scan_t = scan.map(|e| e.t).unwrap_or(f64::NAN);
        let exact_t = exact.map(|e| e.t).unwrap_or(f64::NAN);

        println!("{h0},{steps},{ms_scan:.6},{ms_exact:.6},{scan_t},{exact_t}");

        h0 *= 0.1;
    }
}
