use or_path::io::{read_problem, write_cost};
use or_path::{reachable, solve, Graph, MAX_PENALTY};
use proptest::prelude::*;

mod naive {
    use or_path::MAX_PENALTY;

    // Smallest mask m such that goal is reachable over edges whose penalty is a submask of m.
    pub fn min_or_cost(n: usize, edges: &[(usize, usize, u32)], start: usize, goal: usize) -> Option<u32> {
        (0..=MAX_PENALTY).find(|&mask| {
            let mut seen = vec![false; n + 1];
            let mut stack = vec![start];
            seen[start] = true;
            while let Some(u) = stack.pop() {
                for &(a, b, p) in edges {
                    if p & !mask != 0 {
                        continue;
                    }
                    let v = if a == u {
                        b
                    } else if b == u {
                        a
                    } else {
                        continue;
                    };
                    if !seen[v] {
                        seen[v] = true;
                        stack.push(v);
                    }
                }
            }
            seen[goal]
        })
    }
}

fn build(n: usize, edges: &[(usize, usize, u32)]) -> Graph {
    let mut g = Graph::new(n);
    for &(a, b, p) in edges {
        g.insert_edge(a, b, p);
    }
    g
}

fn run(source: &str) -> String {
    let mut problem = read_problem(source).unwrap();
    let cost = solve(&mut problem.graph, problem.start, problem.goal);
    let mut buf = Vec::<u8>::new();
    write_cost(&mut buf, cost).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn scenario_two_disjoint_paths() {
    assert_eq!(run("4 4\n1 2 1\n2 4 8\n1 3 32\n3 4 1\n1 4\n"), "9\n");
}

#[test]
fn scenario_no_edges() {
    assert_eq!(run("2 0\n1 2\n"), "-1\n");
}

#[test]
fn scenario_single_zero_edge() {
    assert_eq!(run("2 1\n1 2 0\n1 2\n"), "0\n");
}

#[test]
fn scenario_start_is_goal_on_isolated_node() {
    assert_eq!(run("3 1\n1 2 700\n3 3\n"), "0\n");
}

#[test]
fn test_solution_small_exhaustive() {
    // every multiset of up to three edges on a 3-node graph, penalties from a small pool
    let pool = [0, 1, 2, 3, 5, 6, 8, 12];
    let pairs = [(1, 2), (2, 3), (1, 3)];
    let mut candidates = vec![];
    for &(a, b) in &pairs {
        for &p in &pool {
            candidates.push((a, b, p));
        }
    }
    for i in 0..candidates.len() {
        for j in i..candidates.len() {
            for k in j..candidates.len() {
                let edges = [candidates[i], candidates[j], candidates[k]];
                let mut g = build(3, &edges);
                assert_eq!(
                    solve(&mut g, 1, 3),
                    naive::min_or_cost(3, &edges, 1, 3),
                    "{:?}",
                    edges
                );
            }
        }
    }
}

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>, usize, usize)> {
    (1usize..=8).prop_flat_map(|n| {
        let edge = (1..=n, 1..=n, 0..=MAX_PENALTY);
        (
            Just(n),
            prop::collection::vec(edge, 0..16),
            1..=n,
            1..=n,
        )
    })
}

proptest! {
    #[test]
    fn matches_naive((n, edges, start, goal) in graph_strategy()) {
        let mut g = build(n, &edges);
        prop_assert_eq!(solve(&mut g, start, goal), naive::min_or_cost(n, &edges, start, goal));
    }

    #[test]
    fn result_in_range((n, edges, start, goal) in graph_strategy()) {
        let mut g = build(n, &edges);
        match solve(&mut g, start, goal) {
            Some(cost) => prop_assert!(cost <= MAX_PENALTY),
            None => prop_assert!(!reachable(&build(n, &edges), start, goal, MAX_PENALTY + 1)),
        }
    }

    #[test]
    fn start_equals_goal_costs_zero((n, edges, start, _) in graph_strategy()) {
        let mut g = build(n, &edges);
        prop_assert_eq!(solve(&mut g, start, start), Some(0));
    }

    #[test]
    fn dedup_is_idempotent((n, edges, _, _) in graph_strategy()) {
        let once = build(n, &edges);
        let doubled: Vec<_> = edges.iter().chain(edges.iter()).copied().collect();
        let twice = build(n, &doubled);
        prop_assert_eq!(once.edge_record_count(), twice.edge_record_count());
    }

    #[test]
    fn zero_path_costs_zero((n, edges, start, goal) in graph_strategy()) {
        let mut g = build(n, &edges);
        for u in 1..n {
            g.insert_edge(u, u + 1, 0);
        }
        prop_assert_eq!(solve(&mut g, start, goal), Some(0));
    }

    #[test]
    fn rewrite_never_underflows((n, edges, _, _) in graph_strategy(), bits in prop::collection::vec(0u32..10, 0..6)) {
        let mut g = build(n, &edges);
        for i in bits {
            g.rewrite_bit(1 << i);
            g.rewrite_bit(1 << i);
        }
        for u in 1..=n {
            for e in g.edges_of(u) {
                prop_assert!(e.penalty <= MAX_PENALTY);
            }
        }
    }
}
