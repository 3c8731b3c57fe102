//! Benchmarks for Game Data request preparation
//!
//! Measures the work done before a request reaches the transport: descriptor lookup, path
//! rendering and query merging.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use wow_game_data_sdk::game_data::{
    Client, Config, DefaultParams, HttpTransport, Origin, PvpBracket,
};

fn client() -> Client<HttpTransport> {
    let config = Config::builder()
        .origin(Origin::Us)
        .host("http://localhost:8080")
        .params(
            DefaultParams::new()
                .locale("en_US")
                .access_token("bench-token".to_owned()),
        )
        .build();

    Client::new(config).expect("client")
}

fn bench_prepare(c: &mut Criterion) {
    let client = client();
    let mut group = c.benchmark_group("game_data/prepare");

    group.bench_function("index", |b| {
        b.iter(|| client.prepare(black_box("mounts_index"), &[]).expect("prepared"));
    });

    group.bench_function("single_id", |b| {
        b.iter(|| {
            client
                .prepare(black_box("item"), &[("item_id", black_box(19019_u64).into())])
                .expect("prepared")
        });
    });

    group.bench_function("nested", |b| {
        b.iter(|| {
            client
                .prepare(
                    black_box("pvp_leaderboard"),
                    &[
                        ("pvp_season_id", black_box(29_u64).into()),
                        ("pvp_bracket", PvpBracket::ThreeVsThree.into()),
                    ],
                )
                .expect("prepared")
        });
    });

    group.finish();
}

criterion_group!(benches, bench_prepare);
criterion_main!(benches);
