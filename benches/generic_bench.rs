use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polycache::{
    Cache, EvictionPolicy, FifoPolicy, LfuPolicy, LifoPolicy, LruPolicy, MruPolicy, NoStats,
    NonePolicy, NullLock, RandomPolicy,
};

const CAPACITY: usize = 100;

fn bench_policy<P>(c: &mut Criterion, label: &str)
where
    P: EvictionPolicy<i32> + Default,
{
    let mut group = c.benchmark_group(label);

    group.bench_function("insert", |b| {
        b.iter(|| {
            let cache = Cache::<i32, i32, P>::new(CAPACITY).unwrap();
            for i in 0..CAPACITY as i32 {
                cache.insert(i, black_box(i + 1));
            }
        })
    });

    group.bench_function("find", |b| {
        let cache = Cache::<i32, i32, P>::new(CAPACITY).unwrap();
        for i in 0..CAPACITY as i32 {
            cache.insert(i, i + 1);
        }
        b.iter(|| {
            for i in 0..CAPACITY as i32 {
                black_box(cache.find(&i));
            }
        })
    });

    group.bench_function("evict", |b| {
        b.iter(|| {
            let cache = Cache::<i32, i32, P, NullLock, NoStats>::new(CAPACITY).unwrap();
            for i in 0..2 * CAPACITY as i32 {
                cache.insert(i, black_box(i));
            }
        })
    });

    group.finish();
}

fn bench_all(c: &mut Criterion) {
    bench_policy::<NonePolicy<i32>>(c, "none");
    bench_policy::<FifoPolicy<i32>>(c, "fifo");
    bench_policy::<LifoPolicy<i32>>(c, "lifo");
    bench_policy::<LruPolicy<i32>>(c, "lru");
    bench_policy::<MruPolicy<i32>>(c, "mru");
    bench_policy::<LfuPolicy<i32>>(c, "lfu");
    bench_policy::<RandomPolicy<i32>>(c, "random");
}

criterion_group!(benches, bench_all);
criterion_main!(benches);
