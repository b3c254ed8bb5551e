// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Byte-driven differential testing against [`NaiveArray`].
//!
//! Shared by the AFL harness and the crash reproducer. Magnitudes are kept
//! small so that no case can overflow `i128`, even for product trees under
//! repeated multiplication: at most 8 elements, 12 operations, and deltas
//! within `[-2, 2]` for multiplicative policies.

use crate::error::Error;
use crate::naive::NaiveArray;
use crate::op::Op;
use crate::policy::Combination;
use crate::policy::Policy;
use crate::policy::Update;
use crate::tree::LazySegmentTree;

pub const MAX_LEN: usize = 8;
pub const MAX_OPS: usize = 12;

/// A decoded fuzz input.
#[derive(Clone, Debug)]
pub struct FuzzCase {
    pub policy: Policy,
    pub values: Vec<i128>,
    pub ops: Vec<Op<i128>>,
}

/// The tree and the reference model disagreed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Divergence {
    #[error("op {step} ({op:?}): tree returned {tree:?}, reference returned {naive:?}")]
    Mismatch {
        step: usize,
        op: Op<i128>,
        tree: Result<Option<i128>, Error>,
        naive: Result<Option<i128>, Error>,
    },
    #[error("after op {step}: tree holds {tree:?}, reference holds {naive:?}")]
    Contents { step: usize, tree: Vec<i128>, naive: Vec<i128> },
}

fn small(byte: u8, multiplicative: bool) -> i128 {
    if multiplicative {
        return (byte % 5) as i128 - 2;
    }
    return byte as i8 as i128;
}

impl FuzzCase {
    /// Decode a case; `None` when the input is too short or names an
    /// unsupported policy.
    pub fn decode(bytes: &[u8]) -> Option<FuzzCase> {
        let (&header, rest) = bytes.split_first()?;
        let combination = Combination::ALL[(header % 4) as usize];
        let update = Update::ALL[((header / 4) % 3) as usize];
        let policy = Policy::new(combination, update).ok()?;
        let multiplicative = update == Update::Multiply || combination == Combination::Product;

        let (&len_byte, mut rest) = rest.split_first()?;
        let len = 1 + (len_byte as usize) % MAX_LEN;
        if rest.len() < len {
            return None;
        }
        let values = rest[..len].iter().map(|&b| small(b, combination == Combination::Product)).collect();
        rest = &rest[len..];

        let mut ops = Vec::new();
        while ops.len() < MAX_OPS {
            let Some((op, tail)) = Self::decode_op(rest, len, multiplicative) else {
                break;
            };
            ops.push(op);
            rest = tail;
        }
        return Some(FuzzCase { policy, values, ops });
    }

    fn decode_op(bytes: &[u8], len: usize, multiplicative: bool) -> Option<(Op<i128>, &[u8])> {
        if bytes.len() < 4 {
            return None;
        }
        let a = bytes[1] as usize % len;
        let b = bytes[2] as usize % len;
        let (l, r) = (a.min(b), a.max(b));
        let op = match bytes[0] % 3 {
            0 => Op::PointUpdate { index: a, value: small(bytes[3], multiplicative) },
            1 => Op::RangeUpdate { l, r, delta: small(bytes[3], multiplicative) },
            _ => Op::RangeQuery { l, r },
        };
        return Some((op, &bytes[4..]));
    }
}

/// Replay `case` on a tree and on the reference model, checking every result
/// and the full contents after every step.
pub fn run_case(case: &FuzzCase) -> Result<(), Divergence> {
    let (Ok(mut tree), Ok(mut naive)) = (
        LazySegmentTree::with_policy(&case.values, case.policy),
        NaiveArray::with_policy(&case.values, case.policy),
    ) else {
        return Ok(());
    };

    for (step, op) in case.ops.iter().enumerate() {
        let from_tree = tree.apply(op);
        let from_naive = naive.apply(op);
        if from_tree != from_naive {
            let divergence = Divergence::Mismatch { step, op: *op, tree: from_tree, naive: from_naive };
            #[cfg(feature = "tracing")]
            tracing::warn!(policy = %case.policy, %divergence, "fuzz case diverged");
            return Err(divergence);
        }
        let contents = tree.to_vec();
        if contents != naive.values() {
            let divergence = Divergence::Contents { step, tree: contents, naive: naive.values().to_vec() };
            #[cfg(feature = "tracing")]
            tracing::warn!(policy = %case.policy, %divergence, "fuzz case diverged");
            return Err(divergence);
        }
    }
    return Ok(());
}
