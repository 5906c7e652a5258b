//! Minimum bitwise-OR path cost between two nodes of an undirected graph whose
//! edge penalties are 10-bit integers.

pub mod error;
pub mod graph;
pub mod io;
pub mod reachability;
pub mod resolver;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, MAX_PENALTY};
pub use reachability::reachable;
pub use resolver::{solve, solve_with_report, Resolution};
