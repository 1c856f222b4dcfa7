// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hexdock_directory::{Cache, Company, CompanyFilter, DirectoryConfig, MemoryStore, parse_csv};

fn sheet(rows: usize) -> String {
    let mut sheet = String::from(
        "Company Name,Logo URL,Tagline,Description,Funding,Website,Industry,Industry 2\n",
    );
    for i in 0..rows {
        sheet.push_str(&format!(
            "Company {i},https://cdn.io/{i}.png,Pitch {i},\"Long, quoted description {i}\",Seed,https://c{i}.io,Energy,AI\n"
        ));
    }
    sheet
}

fn bench_directory(c: &mut Criterion) {
    let mut group = c.benchmark_group("directory");
    let config = DirectoryConfig::default();
    let text = sheet(62);

    group.bench_function("parse_csv", |b| {
        b.iter(|| black_box(parse_csv(black_box(&text), &config)));
    });

    let companies: Vec<Company> = parse_csv(&text, &config).unwrap_or_default();
    let mut cache = Cache::new(MemoryStore::new(), config.cache_expiry_ms);
    group.bench_function("cache_round_trip", |b| {
        b.iter(|| {
            let _ = cache.put("allCompanies", &companies, 0);
            black_box(cache.get::<Vec<Company>>("allCompanies", 1));
        });
    });

    let mut filter = CompanyFilter::default();
    filter.toggle_tag("AI");
    filter.industries.push("Energy".to_owned());
    group.bench_function("filter", |b| {
        b.iter(|| black_box(filter.apply(&companies).len()));
    });

    group.finish();
}

criterion_group!(benches, bench_directory);
criterion_main!(benches);
