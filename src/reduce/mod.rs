mod linear;
mod tree;

use std::{fmt, str::FromStr};

use crate::{error::ReduceError, formula::Formula, types::Problem};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Method {
    /// Keep clauses unchanged, every clause must have at most 3 literals
    PassThrough,
    /// Balanced encoding with AND/OR biimplications
    Tree,
    /// Chain each long clause with fresh variables
    Linear,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::PassThrough, Method::Tree, Method::Linear];

    fn name(self) -> &'static str {
        match self {
            Method::PassThrough => "pass-through",
            Method::Tree => "tree",
            Method::Linear => "linear",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| method.name() == s)
            .ok_or_else(|| format!("unknown method `{s}`, expected one of pass-through, tree, linear"))
    }
}

fn pass_through(formula: &mut Formula, problem: &Problem) -> Result<(), ReduceError> {
    if let Some((index, clause)) = problem
        .clauses
        .iter()
        .enumerate()
        .find(|(_, clause)| clause.len() > 3)
    {
        return Err(ReduceError::ClauseTooLong {
            index,
            len: clause.len(),
        });
    }

    for clause in problem.clauses.iter().filter(|clause| !clause.is_empty()) {
        formula.push(clause.clone());
    }
    Ok(())
}

/// Reduces `problem` to an equisatisfiable 3-CNF formula.
pub fn reduce(problem: &Problem, method: Method) -> Result<Formula, ReduceError> {
    let mut formula = Formula::new(problem.var_count);

    match method {
        Method::PassThrough => pass_through(&mut formula, problem)?,
        Method::Tree => tree::reduce(&mut formula, &problem.clauses),
        Method::Linear => linear::reduce(&mut formula, &problem.clauses),
    }

    log::info!(
        "{method} reduction: {} variables, {} clauses -> {} variables, {} clauses",
        problem.var_count,
        problem.clauses.len(),
        formula.var_count(),
        formula.clause_count()
    );

    Ok(formula)
}
