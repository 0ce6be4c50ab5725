//! Test helpers: a naive DPLL search and random CNF instances.

use rand::{rngs::StdRng, Rng};

use crate::types::{to_var, Clause, Lit, Problem};

#[path = "../tests/common/dpll.rs"]
mod dpll;

pub use dpll::{satisfiable, satisfiable_under};

/// Evaluates `clauses` under `assignment`, where `assignment[v - 1]` is the value of `v`.
pub fn eval(clauses: &[Clause], assignment: &[bool]) -> bool {
    clauses.iter().all(|clause| {
        clause
            .iter()
            .any(|&lit| assignment[to_var(lit) - 1] == lit.is_positive())
    })
}

/// All assignments of `var_count` variables as assumption cubes.
pub fn cubes(var_count: usize) -> impl Iterator<Item = (Vec<bool>, Vec<Lit>)> {
    (0..1u32 << var_count).map(move |bits| {
        let values: Vec<bool> = (0..var_count).map(|i| bits >> i & 1 != 0).collect();
        let cube = values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let lit = (i + 1) as Lit;
                if value {
                    lit
                } else {
                    -lit
                }
            })
            .collect();
        (values, cube)
    })
}

pub fn random_problem(rng: &mut StdRng, var_count: usize, clause_count: usize, max_len: usize) -> Problem {
    let clauses = (0..clause_count)
        .map(|_| {
            let len = rng.gen_range(1..=max_len);
            (0..len)
                .map(|_| {
                    let var = rng.gen_range(1..=var_count) as Lit;
                    if rng.gen_bool(0.5) {
                        var
                    } else {
                        -var
                    }
                })
                .collect()
        })
        .collect();

    Problem { var_count, clauses }
}
