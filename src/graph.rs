//! Adjacency-list store for an undirected graph with 10-bit edge penalties.

/// Largest penalty an edge may carry.
pub const MAX_PENALTY: u32 = 1023;

/// Number of bits a penalty occupies.
pub const PENALTY_BITS: u32 = 10;

/// Threshold admitting every edge.
pub const UNRESTRICTED: u32 = MAX_PENALTY + 1;

/// One directional record of an undirected edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub to: usize,
    pub penalty: u32,
}

/// Nodes are numbered `1..=n`; each owns a list of outgoing edge records.
///
/// An undirected edge is stored twice, once in each endpoint's list. The two
/// records are independent values, so reweighting touches both.
#[derive(Clone, Debug)]
pub struct Graph {
    // slot 0 is unused
    neighbors: Vec<Vec<Edge>>,
}

impl Graph {
    pub fn new(n: usize) -> Self {
        Self {
            neighbors: vec![vec![]; n + 1],
        }
    }

    pub fn node_count(&self) -> usize {
        self.neighbors.len() - 1
    }

    /// Total number of directional records, i.e. twice the undirected edge count.
    pub fn edge_record_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum()
    }

    /// Adds the edge `a - b` unless `a` already has a record `(b, penalty)`.
    /// Both directions are inserted together or not at all.
    ///
    /// Returns true iff the edge was inserted.
    pub fn insert_edge(&mut self, a: usize, b: usize, penalty: u32) -> bool {
        debug_assert!(penalty <= MAX_PENALTY);
        let record = Edge { to: b, penalty };
        if self.neighbors[a].contains(&record) {
            return false;
        }
        self.neighbors[a].push(record);
        self.neighbors[b].push(Edge { to: a, penalty });
        true
    }

    pub fn edges_of(&self, node: usize) -> &[Edge] {
        &self.neighbors[node]
    }

    /// Subtracts `bit` from every penalty in `[bit, 2 * bit)`.
    ///
    /// Penalties outside that range are left alone, so a second call with the
    /// same `bit` only affects records that were not already reduced below it.
    pub fn rewrite_bit(&mut self, bit: u32) {
        debug_assert!(bit.is_power_of_two());
        let range = bit..2 * bit;
        for edge in self.neighbors.iter_mut().flatten() {
            if range.contains(&edge.penalty) {
                edge.penalty -= bit;
            }
        }
    }
}
