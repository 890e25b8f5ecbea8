//! Permutation state of the annealing search.
//!
//! # Encoding
//!
//! The state is a permutation of task indices: position `p` holds the index
//! (into the caller's task list) of the task packed `p`-th. The initial
//! state is the identity, i.e. the caller's input order.
//!
//! # Reference
//! Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

use rand::Rng;

use crate::models::Task;

/// A task ordering: a permutation of `0..n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOrder {
    indices: Vec<usize>,
}

impl TaskOrder {
    /// The input order `0, 1, .., n-1`.
    pub fn identity(len: usize) -> Self {
        Self {
            indices: (0..len).collect(),
        }
    }

    /// Wraps an explicit permutation.
    ///
    /// Returns `None` if `indices` is not a permutation of `0..indices.len()`.
    pub fn from_indices(indices: Vec<usize>) -> Option<Self> {
        let order = Self { indices };
        order.is_permutation().then_some(order)
    }

    /// Number of positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the ordering is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Task indices in packing order.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Picks two distinct positions uniformly at random.
    ///
    /// Returns `None` when fewer than two positions exist.
    pub fn propose_swap<R: Rng>(&self, rng: &mut R) -> Option<(usize, usize)> {
        let len = self.indices.len();
        if len < 2 {
            return None;
        }
        let i = rng.random_range(0..len);
        let mut j = rng.random_range(0..len - 1);
        if j >= i {
            j += 1;
        }
        Some((i, j))
    }

    /// Swaps the tasks at two positions.
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.indices.swap(i, j);
    }

    /// Reorders positions by comparing the task indices they hold.
    ///
    /// Stable, so equal indices keep their relative order.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&usize, &usize) -> std::cmp::Ordering,
    {
        self.indices.sort_by(compare);
    }

    /// Tasks in packing order.
    pub fn tasks<'a>(&'a self, tasks: &'a [Task]) -> impl Iterator<Item = &'a Task> + 'a {
        self.indices.iter().map(move |&idx| &tasks[idx])
    }

    /// Whether every index in `0..len` occurs exactly once.
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.indices.len()];
        for &idx in &self.indices {
            match seen.get_mut(idx) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}
