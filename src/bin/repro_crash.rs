//! Reproduce AFL crashes without AFL instrumentation
//!
//! Usage: cargo run --bin repro_crash -- <crash_file>

use std::fs;

use segtree::fuzz::FuzzCase;
use segtree::naive::NaiveArray;
use segtree::tree::LazySegmentTree;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <crash_file>", args[0]);
        std::process::exit(1);
    }

    let data = fs::read(&args[1]).expect("failed to read crash file");
    eprintln!("Input: {} bytes", data.len());
    eprintln!("Hex: {}", data.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(" "));

    let Some(case) = FuzzCase::decode(&data) else {
        eprintln!("Input does not decode to a case (too short or unsupported policy)");
        return;
    };
    eprintln!("Policy: {}", case.policy);
    eprintln!("Values: {:?}", case.values);

    let mut tree = LazySegmentTree::with_policy(&case.values, case.policy).expect("values are never empty");
    let mut naive = NaiveArray::with_policy(&case.values, case.policy).expect("values are never empty");

    for (step, op) in case.ops.iter().enumerate() {
        eprintln!("Op {}: {:?}", step, op);
        let from_tree = tree.apply(op);
        let from_naive = naive.apply(op);
        eprintln!("  tree:  {:?}", from_tree);
        eprintln!("  naive: {:?}", from_naive);
        let contents = tree.to_vec();
        eprintln!("  contents: {:?}", contents);
        if from_tree != from_naive || contents != naive.values() {
            eprintln!("  expected: {:?}", naive.values());
            eprintln!("{}", tree.debug_segments());
            eprintln!("DIVERGED at op {}", step);
            std::process::exit(2);
        }
    }
    eprintln!("No divergence");
}
