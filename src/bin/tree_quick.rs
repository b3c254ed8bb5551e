// Quick benchmark for getting summary results across all policies

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use segtree::compact::CompactSegmentTree;
use segtree::policy::{Combination, Policy, Update};
use segtree::tree::LazySegmentTree;

const N: usize = 200_000;
const OPS: usize = 200_000;

fn time_ops<F: FnMut() -> i64>(mut f: F) -> f64 {
    // Warmup
    let _ = f();

    let start = Instant::now();
    let checksum = f();
    let elapsed = start.elapsed();
    std::hint::black_box(checksum);
    return elapsed.as_nanos() as f64 / OPS as f64;
}

fn main() {
    let mut rng = StdRng::seed_from_u64(7);
    let values: Vec<i64> = (0..N).map(|_| rng.gen_range(-1000..=1000)).collect();
    let ranges: Vec<(usize, usize)> = (0..OPS)
        .map(|_| {
            let a = rng.gen_range(0..N);
            let b = rng.gen_range(0..N);
            (a.min(b), a.max(b))
        })
        .collect();

    println!("n = {}, {} ops per column, ns/op", N, OPS);
    println!("{:<18} {:>10} {:>10} {:>10}", "policy", "update", "query", "point");

    for combination in Combination::ALL {
        for update in Update::ALL {
            let Ok(policy) = Policy::new(combination, update) else {
                continue;
            };
            // Products and repeated scaling overflow quickly; keep the stream neutral.
            let delta = match (combination, update) {
                (Combination::Product, _) | (_, Update::Multiply) => 1,
                _ => 3,
            };
            let base: Vec<i64> = match combination {
                Combination::Product => vec![1; N],
                _ => values.clone(),
            };

            let mut tree = LazySegmentTree::with_policy(&base, policy).unwrap();
            let update_ns = time_ops(|| {
                for &(l, r) in &ranges {
                    tree.range_update(l, r, delta).unwrap();
                }
                0
            });
            let query_ns = time_ops(|| {
                let mut acc = 0i64;
                for &(l, r) in &ranges {
                    acc = acc.wrapping_add(tree.range_query(l, r).unwrap());
                }
                acc
            });
            let point_ns = time_ops(|| {
                for &(l, _) in &ranges {
                    tree.point_update(l, base[l]).unwrap();
                }
                0
            });

            println!("{:<18} {:>10.1} {:>10.1} {:>10.1}", policy.to_string(), update_ns, query_ns, point_ns);
        }
    }

    // Baseline without lazy state
    let mut compact = CompactSegmentTree::build(&values, Combination::Sum).unwrap();
    let query_ns = time_ops(|| {
        let mut acc = 0i64;
        for &(l, r) in &ranges {
            acc = acc.wrapping_add(compact.range_query(l, r).unwrap());
        }
        acc
    });
    let point_ns = time_ops(|| {
        for &(l, _) in &ranges {
            compact.point_update(l, values[l]).unwrap();
        }
        0
    });
    println!("{:<18} {:>10} {:>10.1} {:>10.1}", "compact sum", "-", query_ns, point_ns);
}
