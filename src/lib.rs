//! Reductions from CNF satisfiability to 3-SAT and from 3-SAT to Vertex Cover.
//!
//! ```
//! use sat2vc::{graph::VertexCover, reduce::{reduce, Method}, types::Problem};
//!
//! let problem = Problem { var_count: 4, clauses: vec![vec![1, -2, 3, 4], vec![-1]] };
//! let formula = reduce(&problem, Method::Linear).unwrap();
//! assert!(formula.clauses().iter().all(|clause| clause.len() == 3));
//!
//! let vc = VertexCover::from_formula(&formula).unwrap();
//! assert_eq!(vc.cover_size(), formula.var_count() + 2 * formula.clause_count());
//! ```

pub mod error;
pub mod formula;
pub mod graph;
pub mod io;
pub mod reduce;
pub mod types;

#[cfg(test)]
mod testing;
