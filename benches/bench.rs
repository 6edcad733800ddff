use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urlsmith::encoding::{decode, encode, table};
use urlsmith::Url;

criterion_group!(benches, bench_enc, bench_dec, bench_parse, bench_render);
criterion_main!(benches);

const ENC_CASE: &str = "te😃a 测1`~!@试#$%st^&+=";
const DEC_CASE: &str = "te%F0%9F%98%83a%20%E6%B5%8B1%60~!@%E8%AF%95%23$%25st%5E&+=";
const URL_CASE: &str = "https://user:pw@example.com:8080/a%20b/c?x=1&y=&z#frag";

fn bench_enc(c: &mut Criterion) {
    c.bench_function("enc", |b| {
        b.iter(|| encode(black_box(ENC_CASE), table::FRAGMENT))
    });
}

fn bench_dec(c: &mut Criterion) {
    c.bench_function("dec", |b| b.iter(|| decode(black_box(DEC_CASE))));
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| b.iter(|| Url::parse(black_box(URL_CASE))));
}

fn bench_render(c: &mut Criterion) {
    let url = Url::parse(URL_CASE).unwrap();
    c.bench_function("render", |b| b.iter(|| black_box(&url).render()));
}
