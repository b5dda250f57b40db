//! Allocation patterns with the same element count but very different
//! allocation behaviour: one heap node per element, a vector grown from
//! empty, and a vector sized up front.

use std::time::{Duration, Instant};

pub struct Node {
    pub value: i64,
    pub next: Option<Box<Node>>,
}

impl Node {
    pub fn new(value: i64) -> Self {
        Node { value, next: None }
    }
}

// Drop iteratively; the default recursive drop overflows the stack on long chains.
impl Drop for Node {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

/// Builds `0..size` as a singly linked chain (head holds `size - 1`).
pub fn boxed_chain(size: usize) -> Option<Box<Node>> {
    let mut head = None;
    for i in 0..size {
        let mut node = Box::new(Node::new(i as i64));
        node.next = head;
        head = Some(node);
    }
    head
}

pub fn chain_sum(head: &Option<Box<Node>>) -> i64 {
    let mut sum = 0;
    let mut cursor = head.as_deref();
    while let Some(node) = cursor {
        sum += node.value;
        cursor = node.next.as_deref();
    }
    sum
}

/// Vector grown by `push` from empty; reallocates as capacity doubles.
pub fn grown_vec(size: usize) -> Vec<i64> {
    let mut vec = Vec::new();
    for i in 0..size {
        vec.push(i as i64);
    }
    vec
}

/// Vector with its capacity reserved before filling; a single allocation.
pub fn presized_vec(size: usize) -> Vec<i64> {
    let mut vec = Vec::with_capacity(size);
    for i in 0..size {
        vec.push(i as i64);
    }
    vec
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    BoxedChain,
    GrownVec,
    PresizedVec,
}

impl Pattern {
    pub const ALL: [Pattern; 3] = [Pattern::BoxedChain, Pattern::GrownVec, Pattern::PresizedVec];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::BoxedChain => "boxed_chain",
            Pattern::GrownVec => "grown_vec",
            Pattern::PresizedVec => "presized_vec",
        }
    }

    /// Builds the structure, sums it, and drops it. Returns the sum.
    pub fn build_and_sum(self, size: usize) -> i64 {
        match self {
            Pattern::BoxedChain => chain_sum(&boxed_chain(size)),
            Pattern::GrownVec => grown_vec(size).iter().sum(),
            Pattern::PresizedVec => presized_vec(size).iter().sum(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternRun {
    pub pattern: Pattern,
    pub sum: i64,
    pub elapsed: Duration,
    pub allocations: u64,
}

/// Times every pattern at `size`. `count_allocations` reads the caller's
/// allocation counter; the crate itself does not install an allocator.
pub fn run_patterns<F>(size: usize, count_allocations: F) -> Vec<PatternRun>
where
    F: Fn() -> u64,
{
    Pattern::ALL
        .iter()
        .map(|&pattern| {
            let before = count_allocations();
            let start = Instant::now();
            let sum = pattern.build_and_sum(size);
            let elapsed = start.elapsed();
            PatternRun {
                pattern,
                sum,
                elapsed,
                allocations: count_allocations().saturating_sub(before),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_order_and_sum() {
        let head = boxed_chain(4);
        assert_eq!(head.as_ref().map(|n| n.value), Some(3));
        assert_eq!(chain_sum(&head), 6);
        assert_eq!(chain_sum(&boxed_chain(0)), 0);
    }

    #[test]
    fn test_long_chain_drops_without_overflow() {
        let head = boxed_chain(1_000_000);
        assert_eq!(chain_sum(&head), 499_999_500_000);
        drop(head);
    }

    #[test]
    fn test_vec_capacity() {
        let v = presized_vec(1000);
        assert_eq!(v.capacity(), 1000);
        assert_eq!(grown_vec(1000), v);
    }

    #[test]
    fn test_patterns_agree() {
        let runs = run_patterns(10_000, || 0);
        assert_eq!(runs.len(), 3);
        for run in &runs {
            assert_eq!(run.sum, 49_995_000, "{}", run.pattern.name());
            assert_eq!(run.allocations, 0);
        }
    }
}
