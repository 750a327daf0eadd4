//! Criterion benchmarks for rust_stream_logger

use chrono::Local;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_stream_logger::prelude::*;
use rust_stream_logger::format_prefix;
use std::sync::Arc;
use tempfile::TempDir;

fn bench_logger(dir: &TempDir, min_level: LogLevel) -> Logger {
    Logger::builder()
        .directory(dir.path())
        .file_prefix("bench")
        .min_level(min_level)
        .build()
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let now = Local::now();
    group.bench_function("format_prefix", |b| {
        b.iter(|| black_box(format_prefix(black_box(&now), LogLevel::Info)));
    });

    group.bench_function("record_plain", |b| {
        b.iter(|| black_box(LogRecord::new(LogLevel::Info, black_box("request handled"))));
    });

    group.bench_function("record_sanitized", |b| {
        b.iter(|| black_box(LogRecord::new(LogLevel::Info, black_box("line one\nline two\tend"))));
    });

    group.finish();
}

// ============================================================================
// Submission Benchmarks
// ============================================================================

fn bench_submission(c: &mut Criterion) {
    let mut group = c.benchmark_group("submission");
    group.throughput(Throughput::Elements(1));

    let temp_dir = TempDir::new().unwrap();
    let logger = bench_logger(&temp_dir, LogLevel::Trace);

    group.bench_function("info", |b| {
        b.iter(|| {
            logger.info(black_box("Info message"));
        });
    });

    group.bench_function("stream_three_values", |b| {
        b.iter(|| {
            logger
                .stream(LogLevel::Info)
                .append("user ")
                .append(black_box(42))
                .append(" logged in");
        });
    });

    group.bench_function("macro_formatted", |b| {
        b.iter(|| {
            rust_stream_logger::info!(logger, "request {} took {} ms", black_box(7), black_box(12));
        });
    });

    group.finish();
    logger.shutdown();
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let temp_dir = TempDir::new().unwrap();
    let logger = bench_logger(&temp_dir, LogLevel::Error);

    group.bench_function("filtered_out", |b| {
        b.iter(|| {
            logger.debug(black_box("Filtered message"));
        });
    });

    group.bench_function("filtered_macro", |b| {
        b.iter(|| {
            rust_stream_logger::debug!(logger, "never formatted {}", black_box(1));
        });
    });

    group.bench_function("filtered_stream", |b| {
        b.iter(|| {
            logger.stream(LogLevel::Debug).append(black_box("built then dropped"));
        });
    });

    group.finish();
    logger.shutdown();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    let temp_dir = TempDir::new().unwrap();
    let logger = Arc::new(bench_logger(&temp_dir, LogLevel::Trace));

    group.throughput(Throughput::Elements(400));
    group.bench_function("multi_thread_4", |b| {
        let logger = Arc::clone(&logger);
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        for _ in 0..100 {
                            logger.info(black_box("Concurrent message"));
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
    logger.shutdown();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_formatting,
    bench_submission,
    bench_level_filtering,
    bench_concurrent_logging
);

criterion_main!(benches);
