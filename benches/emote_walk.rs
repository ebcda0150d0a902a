use bili_emote_downloader::emotes::extractor::collect_emotes;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{
    distributions::{Alphanumeric, DistString},
    seq::SliceRandom,
    thread_rng, Rng,
};
use serde_json::{json, Value};

const NAMES: [&str; 8] = [
    "[微笑]", "[doge]", "[妙啊]", "[吃瓜]", "[tv_白眼]", "[OK]", "[星星眼]", "[滑稽]",
];

fn seed_document(packages: usize) -> Value {
    let mut rng = thread_rng();

    let list: Vec<Value> = (0..packages)
        .map(|id| {
            let count = rng.gen_range(1..=80);

            let emote: Vec<Value> = (0..count)
                .map(|_| {
                    let hash = Alphanumeric.sample_string(&mut rng, 40);
                    let name = NAMES.choose(&mut rng).unwrap();

                    // Some entries come without a webp variant
                    if rng.gen_bool(0.1) {
                        json!({ "text": name })
                    } else {
                        json!({
                            "text": name,
                            "webp_url": format!("https://i0.hdslb.com/bfs/emote/{}.webp", hash),
                        })
                    }
                })
                .collect();

            json!({ "id": id, "text": format!("package {}", id), "emote": emote })
        })
        .collect();

    json!({ "code": 0, "message": "0", "ttl": 1, "data": { "packages": list } })
}

fn emote_walk_bench(c: &mut Criterion) {
    for size in [1, 10, 100, 1000] {
        let document = seed_document(size);

        c.bench_function(&format!("Walk {} packages", size), |b| {
            b.iter(|| collect_emotes(black_box(&document)))
        });
    }
}

criterion_group!(benches, emote_walk_bench);
criterion_main!(benches);
