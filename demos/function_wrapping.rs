use std::time::{Duration, Instant};

use polycache::{memoize, LruPolicy, NullLock};

fn slow_add((a, b): (u64, u64)) -> u64 {
    std::thread::sleep(Duration::from_millis(200));
    a + b
}

fn main() -> polycache::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let add = memoize::<LruPolicy<(u64, u64)>, NullLock, _, _, _>(slow_add, 16)?;

    for args in [(1, 2), (3, 4), (1, 2), (3, 4), (5, 6)] {
        let start = Instant::now();
        let sum = add(args);
        println!("{} + {} = {sum} ({:?})", args.0, args.1, start.elapsed());
    }
    Ok(())
}
