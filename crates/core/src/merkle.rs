//! Queue-based merkle fold for transaction roots.

use crate::digest::{DigestAlgorithm, Hash};
use std::collections::VecDeque;

/// Reduce an ordered sequence of leaf hashes to a single root hash.
///
/// The leaves are loaded into a queue; each round removes the two front
/// elements, digests `first ++ second`, and re-inserts the combined digest at
/// the head. The reduction is therefore a strict left-to-right sequential
/// fold:
///
/// ```text
/// fold([a])       = a
/// fold([a, b])    = D(a ++ b)
/// fold([a, b, c]) = D(D(a ++ b) ++ c)
/// ```
///
/// This is NOT a balanced binary merkle tree and must not be turned into
/// one: every block hash in an existing chain depends on this exact shape,
/// and leaf order changes which hashes get combined in later rounds. A
/// single leaf is returned unchanged, without hashing.
///
/// # Panics
///
/// Panics when `leaves` is empty; the fold has no defined result there and
/// callers are required to pass at least one leaf.
pub fn fold(leaves: &[Hash], algorithm: DigestAlgorithm) -> Hash {
    assert!(!leaves.is_empty(), "merkle fold requires at least one leaf");

    let mut queue: VecDeque<Hash> = leaves.iter().cloned().collect();
    while queue.len() > 1 {
        let first = queue.pop_front().expect("queue holds at least two elements");
        let second = queue.pop_front().expect("queue holds at least two elements");

        let mut combined = Vec::with_capacity(first.len() + second.len());
        combined.extend_from_slice(first.as_bytes());
        combined.extend_from_slice(second.as_bytes());

        // Each round removes two elements and re-inserts one, so the queue
        // shrinks by exactly one per round and the fold terminates after
        // n - 1 digests regardless of parity.
        queue.push_front(algorithm.digest(&combined));
    }

    queue.pop_front().expect("exactly one element remains")
}
