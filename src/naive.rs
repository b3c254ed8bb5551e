// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Plain vector reference model.
//!
//! Applies every update element by element and folds every query in O(n).
//! Slow, obviously correct, and validated exactly like the tree, so the two
//! can be driven with the same operation stream and compared.

use crate::error::Error;
use crate::error::check_index;
use crate::error::check_range;
use crate::op::Op;
use crate::policy::Combination;
use crate::policy::Policy;
use crate::policy::Update;
use crate::value::Value;

#[derive(Clone, Debug)]
pub struct NaiveArray<T> {
    policy: Policy,
    values: Vec<T>,
}

impl<T: Value> NaiveArray<T> {
    pub fn build(values: &[T], combination: Combination, update: Update) -> Result<Self, Error> {
        let policy = Policy::new(combination, update)?;
        return Self::with_policy(values, policy);
    }

    pub fn with_policy(values: &[T], policy: Policy) -> Result<Self, Error> {
        if values.is_empty() {
            return Err(Error::EmptyValues);
        }
        return Ok(NaiveArray { policy, values: values.to_vec() });
    }

    pub fn len(&self) -> usize {
        return self.values.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.values.is_empty();
    }

    pub fn values(&self) -> &[T] {
        return &self.values;
    }

    pub fn point_update(&mut self, index: usize, value: T) -> Result<(), Error> {
        check_index(index, self.values.len())?;
        self.values[index] = value;
        return Ok(());
    }

    pub fn range_update(&mut self, l: usize, r: usize, delta: T) -> Result<(), Error> {
        check_range(l, r, self.values.len())?;
        let update = self.policy.update();
        for value in &mut self.values[l..=r] {
            *value = update.apply_one(*value, delta);
        }
        return Ok(());
    }

    pub fn range_query(&self, l: usize, r: usize) -> Result<T, Error> {
        check_range(l, r, self.values.len())?;
        let combination = self.policy.combination();
        let folded = self.values[l..=r]
            .iter()
            .fold(combination.identity(), |acc, &v| combination.combine(acc, v));
        return Ok(folded);
    }

    pub fn apply(&mut self, op: &Op<T>) -> Result<Option<T>, Error> {
        return match *op {
            Op::PointUpdate { index, value } => self.point_update(index, value).map(|_| None),
            Op::RangeUpdate { l, r, delta } => self.range_update(l, r, delta).map(|_| None),
            Op::RangeQuery { l, r } => self.range_query(l, r).map(Some),
        };
    }
}
