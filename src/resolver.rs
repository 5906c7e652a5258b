//! Minimum bitwise-OR path cost.
//!
//! Bits are decided from the most significant down. Bit `i` is essential when
//! `goal` cannot be reached using only edges below `2^i`; in that case it joins
//! the answer and every edge whose highest remaining bit is `i` drops that bit,
//! so it stays usable while the lower bits are decided.

use crate::graph::{Graph, PENALTY_BITS, UNRESTRICTED};
use crate::reachability::reachable;

/// Outcome of a resolution run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Minimum OR cost, `None` if `goal` is unreachable.
    pub cost: Option<u32>,
    /// Essential bit positions, highest first.
    pub essential_bits: Vec<u32>,
}

/// Returns the minimum OR cost of a path from `start` to `goal`, or `None`
/// when no path exists. Penalties in `graph` are rewritten along the way.
pub fn solve(graph: &mut Graph, start: usize, goal: usize) -> Option<u32> {
    solve_with_report(graph, start, goal).cost
}

pub fn solve_with_report(graph: &mut Graph, start: usize, goal: usize) -> Resolution {
    if !reachable(graph, start, goal, UNRESTRICTED) {
        tracing::debug!(start, goal, "goal unreachable");
        return Resolution {
            cost: None,
            essential_bits: vec![],
        };
    }

    let mut cost = 0;
    let mut essential_bits = vec![];
    for i in (0..PENALTY_BITS).rev() {
        let bit = 1 << i;
        if reachable(graph, start, goal, bit) {
            tracing::debug!(position = i, "bit avoidable");
            continue;
        }
        tracing::debug!(position = i, "bit essential");
        cost += bit;
        essential_bits.push(i);
        graph.rewrite_bit(bit);
    }

    Resolution {
        cost: Some(cost),
        essential_bits,
    }
}
