//! Benchmark utilities

use std::time::{Duration, Instant};

/// Throughput metrics for a comparison over a fixed buffer size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThroughputMetrics {
    /// Bytes compared per second
    pub bytes_per_sec: f64,
    /// Time per compared byte in nanoseconds
    pub ns_per_byte: f64,
    /// Time per call in nanoseconds
    pub ns_per_call: f64,
}

impl ThroughputMetrics {
    /// Calculate metrics from the mean duration of one call over `bytes` bytes
    pub fn from_benchmark(bytes: usize, duration: Duration) -> Self {
        let ns = duration.as_nanos() as f64;
        let secs = duration.as_secs_f64();
        Self {
            bytes_per_sec: if secs > 0.0 { bytes as f64 / secs } else { f64::INFINITY },
            ns_per_byte: if bytes > 0 { ns / bytes as f64 } else { 0.0 },
            ns_per_call: ns,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{:.2} GB/s ({:.3}ns/byte, {:.1}ns/call)",
            self.bytes_per_sec / 1e9,
            self.ns_per_byte,
            self.ns_per_call
        )
    }
}

/// Simple benchmark runner for quick measurements
#[derive(Debug, Clone, Copy)]
pub struct QuickBench {
    iterations: usize,
    warmup: usize,
}

impl QuickBench {
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations: iterations.max(1),
            warmup: 10,
        }
    }

    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.warmup = warmup;
        self
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Run benchmark and return the mean duration of one call
    pub fn run<F, R>(&self, mut f: F) -> Duration
    where
        F: FnMut() -> R,
    {
        for _ in 0..self.warmup {
            black_box(f());
        }

        let start = Instant::now();
        for _ in 0..self.iterations {
            black_box(f());
        }
        start.elapsed().div_f64(self.iterations as f64)
    }
}

/// Black box to prevent compiler optimizations
#[inline(never)]
pub fn black_box<T>(x: T) -> T {
    std::hint::black_box(x)
}

/// `measured / baseline`; 1.0 means equally fast, 3.0 means three times slower
pub fn time_ratio(baseline: Duration, measured: Duration) -> f64 {
    let base = baseline.as_nanos() as f64;
    if base == 0.0 {
        // Below timer resolution; treat both as equal unless measured is not
        return if measured.is_zero() { 1.0 } else { f64::INFINITY };
    }
    measured.as_nanos() as f64 / base
}

/// Busy-spin for roughly `n` iterations without sleeping or yielding
pub fn spin_work(n: u64) {
    for i in 0..n {
        black_box(i);
        std::hint::spin_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throughput_metrics() {
        let metrics = ThroughputMetrics::from_benchmark(1000, Duration::from_micros(1));
        assert!((metrics.bytes_per_sec - 1e9).abs() < 1.0);
        assert!((metrics.ns_per_byte - 1.0).abs() < 1e-9);
        assert!((metrics.ns_per_call - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_throughput_zero_duration() {
        let metrics = ThroughputMetrics::from_benchmark(128, Duration::ZERO);
        assert!(metrics.bytes_per_sec.is_infinite());
        assert_eq!(metrics.ns_per_call, 0.0);
    }

    #[test]
    fn test_throughput_summary_format() {
        let metrics = ThroughputMetrics::from_benchmark(128, Duration::from_nanos(64));
        let summary = metrics.summary();
        assert!(summary.contains("GB/s"));
        assert!(summary.contains("ns/byte"));
        assert!(summary.contains("ns/call"));
    }

    #[test]
    fn test_quick_bench() {
        let bench = QuickBench::new(100);
        let duration = bench.run(|| black_box((0..1000).sum::<i32>()));
        // Duration may round to 0 for fast operations due to timer granularity
        assert!(duration.as_secs() < 10, "Benchmark took unreasonably long");
    }

    #[test]
    fn test_quick_bench_zero_iterations_clamped() {
        let bench = QuickBench::new(0).with_warmup(0);
        assert_eq!(bench.iterations(), 1);
        let mut calls = 0;
        bench.run(|| calls += 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_black_box_passthrough() {
        assert_eq!(black_box(42), 42);
        assert_eq!(black_box(String::from("test")), "test");
    }

    #[test]
    fn test_time_ratio() {
        let baseline = Duration::from_millis(100);
        assert!((time_ratio(baseline, Duration::from_millis(100)) - 1.0).abs() < 1e-9);
        assert!((time_ratio(baseline, Duration::from_millis(300)) - 3.0).abs() < 1e-9);
        assert!((time_ratio(baseline, Duration::from_millis(50)) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_time_ratio_zero_baseline() {
        assert_eq!(time_ratio(Duration::ZERO, Duration::ZERO), 1.0);
        assert!(time_ratio(Duration::ZERO, Duration::from_nanos(1)).is_infinite());
    }
}
