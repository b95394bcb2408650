use std::{hint::black_box, time::Duration};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn auth() -> awsrest::Auth {
    let creds = awsrest::Credentials::new("AKIDEXAMPLE", "SECRETKEYEXAMPLE")
        .expect("static credentials must be valid");
    awsrest::Auth::Static(creds)
}

#[cfg(feature = "async")]
fn bench_prepare_async(c: &mut Criterion) {
    let client = awsrest::Client::builder()
        .region("us-east-1")
        .auth(auth())
        .build()
        .expect("client must build");

    let mut group = c.benchmark_group("prepare_async");
    group.measurement_time(Duration::from_secs(3));

    group.bench_function(BenchmarkId::new("rest_json", "amp_rule_groups"), |b| {
        b.iter(|| {
            let req = client
                .amp()
                .describe_rule_groups_namespace()
                .set("workspaceId", black_box("ws-1"))
                .set("name", black_box("a/b c"))
                .prepare()
                .expect("prepare must succeed");
            black_box(req);
        });
    });

    group.bench_function(BenchmarkId::new("aws_json", "memorydb_describe"), |b| {
        b.iter(|| {
            let req = client
                .memorydb()
                .describe_clusters()
                .set("ClusterName", black_box("sessions"))
                .set("ShowShardDetails", true)
                .prepare()
                .expect("prepare must succeed");
            black_box(req);
        });
    });

    group.bench_function(BenchmarkId::new("aws_query", "cloudsearch_domains"), |b| {
        let names = serde_json::json!(["movies", "books", "music"]);
        b.iter(|| {
            let req = client
                .cloudsearch()
                .describe_domains()
                .set("DomainNames", black_box(names.clone()))
                .prepare()
                .expect("prepare must succeed");
            black_box(req);
        });
    });

    group.finish();
}

#[cfg(not(feature = "async"))]
fn bench_prepare_async(c: &mut Criterion) {
    let _ = c;
}

#[cfg(feature = "blocking")]
fn bench_prepare_blocking(c: &mut Criterion) {
    let client = awsrest::BlockingClient::builder()
        .region("eu-west-1")
        .auth(auth())
        .build()
        .expect("client must build");

    let mut group = c.benchmark_group("prepare_blocking");
    group.measurement_time(Duration::from_secs(3));

    for size in [0usize, 1024, 64 * 1024] {
        let rules = "x".repeat(size);
        group.bench_with_input(
            BenchmarkId::new("amp_put_rule_groups", size),
            &rules,
            |b, rules| {
                b.iter(|| {
                    let req = client
                        .amp()
                        .put_rule_groups_namespace()
                        .set("workspaceId", "ws-1")
                        .set("name", "alerts")
                        .set("data", black_box(rules.as_str()))
                        .prepare()
                        .expect("prepare must succeed");
                    black_box(req);
                });
            },
        );
    }

    group.finish();
}

#[cfg(not(feature = "blocking"))]
fn bench_prepare_blocking(c: &mut Criterion) {
    let _ = c;
}

fn bench_validate(c: &mut Criterion) {
    let mut input = awsrest::Input::new();
    input.set("jobName", "nightly");
    input.set("jobQueue", "default");
    input.set("jobDefinition", "report:3");

    c.bench_function("validate_submit_job", |b| {
        b.iter(|| {
            awsrest::validate(&awsrest::model::batch::SUBMIT_JOB, black_box(&input))
                .expect("input must be valid");
        });
    });
}

criterion_group!(
    benches,
    bench_prepare_async,
    bench_prepare_blocking,
    bench_validate
);
criterion_main!(benches);
