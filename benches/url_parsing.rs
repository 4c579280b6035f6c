//! Benchmarks for remote URL parsing and vault path resolution.

use std::path::Path;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use devault::{layout, sandbox, url};

const URLS: &[(&str, &str)] = &[
    ("https_short", "https://github.com/org/repo.git"),
    (
        "https_nested",
        "https://gitlab.example.com/group/sub/team/project.git",
    ),
    ("ssh", "git@github.com:org/repo.git"),
    ("ssh_prefixed", "git@ssh.dev.azure.com:v3/org/project/repo.git"),
];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("url_parse");

    for (name, input) in URLS {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| url::parse(black_box(input)))
        });
    }

    group.bench_function("rejected", |b| {
        b.iter(|| url::parse(black_box("ftp://example.com/org/repo")))
    });

    group.finish();
}

fn bench_clone_target(c: &mut Criterion) {
    let temp = tempfile::TempDir::new().unwrap();
    let root = temp.path();
    let components = url::parse("https://github.com/org/repo.git").unwrap();

    c.bench_function("clone_target_resolve", |b| {
        b.iter(|| {
            let target = layout::clone_target(root, black_box(&components));
            sandbox::resolve(root, &target)
        })
    });

    c.bench_function("resolve_escape", |b| {
        b.iter(|| sandbox::resolve(root, black_box(Path::new("a/../../b"))))
    });
}

criterion_group!(benches, bench_parse, bench_clone_target);
criterion_main!(benches);
