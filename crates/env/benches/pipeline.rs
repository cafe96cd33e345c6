use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ssmenv_core::ResolvedParameters;
use ssmenv_env::{collect_paths, enrich, format, parse};

fn large_template() -> String {
    let mut text = String::new();
    for i in 0..500 {
        text.push_str(&format!("# service {i}\n"));
        text.push_str(&format!("SERVICE_{i}_HOST=host-{i}.internal # primary\n"));
        text.push_str(&format!("SERVICE_{i}_TOKEN=ssm:/services/{i}/token\n"));
        text.push_str(&format!("SERVICE_{i}_EMPTY=\n\n"));
    }
    text
}

fn benchmark_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let text = large_template();
    let directives = parse(&text);
    let resolved: ResolvedParameters = collect_paths(&directives)
        .into_iter()
        .step_by(2)
        .map(|path| (path, "secret"))
        .collect();

    group.bench_function("parse_2000_lines", |b| {
        b.iter(|| parse(black_box(&text)));
    });

    group.bench_function("enrich_500_references", |b| {
        b.iter(|| enrich(black_box(&directives), black_box(&resolved)));
    });

    group.bench_function("format_2000_directives", |b| {
        let enriched = enrich(&directives, &resolved);
        b.iter(|| format(black_box(&enriched)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_pipeline);
criterion_main!(benches);
