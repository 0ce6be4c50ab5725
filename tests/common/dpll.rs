use super::{Clause, Lit};

fn assign(clauses: &[Clause], lit: Lit) -> Vec<Clause> {
    clauses
        .iter()
        .filter(|clause| !clause.contains(&lit))
        .map(|clause| clause.iter().copied().filter(|&l| l != -lit).collect())
        .collect()
}

fn dpll(clauses: Vec<Clause>) -> bool {
    if clauses.is_empty() {
        return true;
    }
    if clauses.iter().any(|clause| clause.is_empty()) {
        return false;
    }

    if let Some(unit) = clauses.iter().find(|clause| clause.len() == 1) {
        let lit = unit[0];
        return dpll(assign(&clauses, lit));
    }

    let lit = clauses[0][0];
    dpll(assign(&clauses, lit)) || dpll(assign(&clauses, -lit))
}

pub fn satisfiable(clauses: &[Clause]) -> bool {
    dpll(clauses.to_vec())
}

pub fn satisfiable_under(clauses: &[Clause], assumptions: &[Lit]) -> bool {
    let mut clauses = clauses.to_vec();
    clauses.extend(assumptions.iter().map(|&lit| vec![lit]));
    dpll(clauses)
}
