//! Performance benchmarks for the Attendance Engine.
//!
//! Covers the hot paths a host UI hits on every keystroke and export:
//! - Deriving hours and status for a record set
//! - Searching a record set
//! - Recomputing the attendance view
//! - Rendering the PDF export
//! - The search endpoint end to end
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use attendance_engine::api::{AppState, create_router};
use attendance_engine::calculation::{derive_rows, search};
use attendance_engine::config::ConfigLoader;
use attendance_engine::export::{DocumentRenderer, PdfRenderer};
use attendance_engine::models::AttendanceRecord;
use attendance_engine::view::AttendanceView;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const SIZES: [usize; 4] = [100, 500, 1000, 5000];

const COMPANIES: [&str; 4] = ["Acme", "Globex", "Initech", "Umbrella"];

/// Creates `count` records with a mix of present, absent and unparseable rows.
fn create_records(count: usize) -> Vec<AttendanceRecord> {
    (0..count)
        .map(|i| {
            let clock_out = match i % 10 {
                0 => "not recorded".to_string(),
                n if n % 2 == 0 => "2024-01-01T17:30:00".to_string(),
                _ => "2024-01-01T16:00:00".to_string(),
            };
            AttendanceRecord::new(
                COMPANIES[i % COMPANIES.len()],
                format!("Employee {:05}", i),
                i as i64,
                "2024-01-01T08:00:00",
                clock_out,
            )
        })
        .collect()
}

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_rows");
    for size in SIZES {
        let records = create_records(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| derive_rows(black_box(records)))
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for size in SIZES {
        let records = create_records(size);
        group.throughput(Throughput::Elements(size as u64));
        for term in ["acme", "absent", "00042"] {
            group.bench_with_input(BenchmarkId::new(term, size), &records, |b, records| {
                b.iter(|| search(black_box(records), black_box(term)))
            });
        }
    }
    group.finish();
}

fn bench_view_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_recompute");
    for size in SIZES {
        let mut view = AttendanceView::with_records(create_records(size));
        view.set_search_term("present");
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                view.recompute();
                black_box(view.rows().len())
            })
        });
    }
    group.finish();
}

fn bench_pdf_export(c: &mut Criterion) {
    let config = ConfigLoader::default();
    let renderer = PdfRenderer::from_config(&config);

    let mut group = c.benchmark_group("pdf_export");
    group.sample_size(20);
    for size in [100, 1000] {
        let view = AttendanceView::with_records(create_records(size));
        let document = view.export_document(config.report());
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &document, |b, document| {
            b.iter(|| renderer.render(black_box(document)).unwrap())
        });
    }
    group.finish();
}

fn bench_search_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/attendance").expect("Failed to load config");
    let router = create_router(AppState::new(config));

    let body = serde_json::json!({
        "records": create_records(1000),
        "term": "globex"
    })
    .to_string();

    c.bench_function("search_endpoint_1000", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/attendance/search")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_derive,
    bench_search,
    bench_view_recompute,
    bench_pdf_export,
    bench_search_endpoint
);
criterion_main!(benches);
