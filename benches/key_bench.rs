use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lsm_internal_key::{
    BytewiseComparator, Comparator, InternalKey, InternalKeyComparator, ValueType, parse_internal_key,
};

fn bench_build(c: &mut Criterion) {
    let user_key = vec![b'k'; 16];
    c.bench_function("internal_key_new", |b| {
        b.iter(|| InternalKey::new(black_box(&user_key), black_box(42), ValueType::Value))
    });
}

fn bench_parse(c: &mut Criterion) {
    let key = InternalKey::new(&[b'k'; 16], 42, ValueType::Value);
    c.bench_function("parse_internal_key", |b| {
        b.iter(|| parse_internal_key(black_box(key.as_bytes())).is_ok())
    });
}

fn bench_compare(c: &mut Criterion) {
    let cmp = InternalKeyComparator::new(BytewiseComparator);
    let a = InternalKey::new(b"user_key_00001", 7, ValueType::Value);
    let b = InternalKey::new(b"user_key_00001", 5, ValueType::Value);
    c.bench_function("internal_key_compare", |bench| {
        bench.iter(|| cmp.compare(black_box(a.as_bytes()), black_box(b.as_bytes())))
    });
}

criterion_group!(benches, bench_build, bench_parse, bench_compare);
criterion_main!(benches);
