//! AFL Fuzz harness for the lazy segment tree
//!
//! Each input decodes to a policy, a short value array and a stream of
//! operations. The harness checks:
//! 1. Every operation returns the same result on the tree and on a plain vector
//! 2. The materialized contents agree after every operation
//! 3. Rejected operations are rejected by both, leaving both unchanged

use afl::fuzz;
use segtree::fuzz::FuzzCase;
use segtree::fuzz::run_case;

fn main() {
    fuzz!(|data: &[u8]| {
        let Some(case) = FuzzCase::decode(data) else {
            return;
        };
        if let Err(divergence) = run_case(&case) {
            panic!("{}: {}", case.policy, divergence);
        }
    });
}
