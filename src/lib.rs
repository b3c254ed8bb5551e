// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Segtree - range queries and range updates in O(log n).
//!
//! A [`LazySegmentTree`](tree::LazySegmentTree) is configured with a
//! [`Combination`](policy::Combination) (sum, min, max, product) and an
//! [`Update`](policy::Update) (assign, add, multiply). Range updates are
//! recorded lazily and pushed down only when an operation needs to descend.
//!
//! # Quick Start
//!
//! ```
//! use segtree::policy::{Combination, Update};
//! use segtree::tree::LazySegmentTree;
//!
//! let mut tree = LazySegmentTree::build(&[2i64, 1, 3, 4, -1], Combination::Min, Update::Multiply).unwrap();
//! tree.range_update(0, 4, -1).unwrap();
//! assert_eq!(tree.range_query(0, 4).unwrap(), -4);
//! ```
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | `tree` | The lazy propagation engine |
//! | `policy` | Combination and update functions, resolved into a `Policy` |
//! | `shadow` | Min/max extremes for multiplicative min/max trees |
//! | `compact` | Point-update-only bottom-up tree |
//! | `naive` | Vector reference model |
//! | `fuzz` | Differential fuzzing against the reference model |

pub mod compact;
pub mod error;
pub mod fuzz;
pub mod naive;
pub mod op;
pub mod policy;
pub mod shadow;
pub mod tree;
pub mod value;

pub use error::Error;
pub use error::ErrorKind;
pub use tree::LazySegmentTree;
