//! Whitespace-token input and single-line output.
//!
//! Input format:
//! ```text
//! n m
//! a_1 b_1 penalty_1
//! ...
//! a_m b_m penalty_m
//! start goal
//! ```

use std::io::Write;
use std::str::{FromStr, SplitAsciiWhitespace};

use crate::error::{Error, Result};
use crate::graph::{Graph, MAX_PENALTY};

pub struct InputAtOnce<'a> {
    iter: SplitAsciiWhitespace<'a>,
}

impl<'a> InputAtOnce<'a> {
    pub fn new(buf: &'a str) -> Self {
        Self {
            iter: buf.split_ascii_whitespace(),
        }
    }

    pub fn token(&mut self, field: &'static str) -> Result<&'a str> {
        self.iter.next().ok_or(Error::UnexpectedEof(field))
    }

    pub fn value<T: FromStr>(&mut self, field: &'static str) -> Result<T> {
        let token = self.token(field)?;
        token.parse().map_err(|_| Error::InvalidToken {
            field,
            token: token.to_owned(),
        })
    }

    fn node(&mut self, field: &'static str, n: usize) -> Result<usize> {
        let id = self.value(field)?;
        if !(1..=n).contains(&id) {
            return Err(Error::NodeOutOfRange { id, n });
        }
        Ok(id)
    }
}

pub fn stdin_at_once() -> Result<String> {
    Ok(std::io::read_to_string(std::io::stdin())?)
}

pub fn stdout() -> std::io::BufWriter<std::io::Stdout> {
    std::io::BufWriter::new(std::io::stdout())
}

/// A parsed instance: the graph plus the query endpoints.
#[derive(Clone, Debug)]
pub struct Problem {
    pub graph: Graph,
    pub start: usize,
    pub goal: usize,
}

pub fn read_problem(buf: &str) -> Result<Problem> {
    let mut input = InputAtOnce::new(buf);

    let n: usize = input.value("node count")?;
    let m: usize = input.value("edge count")?;

    let mut graph = Graph::new(n);
    let mut duplicates = 0;
    for _ in 0..m {
        let a = input.node("edge endpoint", n)?;
        let b = input.node("edge endpoint", n)?;
        let penalty: u32 = input.value("penalty")?;
        if penalty > MAX_PENALTY {
            return Err(Error::PenaltyOutOfRange(penalty));
        }
        if !graph.insert_edge(a, b, penalty) {
            duplicates += 1;
        }
    }
    if duplicates > 0 {
        tracing::debug!(duplicates, "skipped duplicate edges");
    }

    let start = input.node("start", n)?;
    let goal = input.node("goal", n)?;
    Ok(Problem { graph, start, goal })
}

/// Writes the cost, or `-1` when the goal is unreachable.
pub fn write_cost(output: &mut impl Write, cost: Option<u32>) -> std::io::Result<()> {
    match cost {
        Some(cost) => writeln!(output, "{}", cost),
        None => writeln!(output, "-1"),
    }
}
