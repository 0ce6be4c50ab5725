use crate::{
    formula::{Connective, Formula},
    types::{to_lit, Clause, Lit},
};

fn fresh(formula: &mut Formula) -> Lit {
    to_lit(formula.allocate_auxiliary())
}

/// Folds `lits` into `root <-> (l1 v l2 v ... v ln)`.
fn disjunction(formula: &mut Formula, mut root: Lit, lits: &[Lit]) {
    let n = lits.len();
    match lits {
        [] => {}
        [lit] => formula.add_biimplication(&[root, *lit], Connective::Or),
        _ => {
            for &lit in &lits[..n - 2] {
                let next = fresh(formula);
                formula.add_biimplication(&[root, next, lit], Connective::Or);
                root = next;
            }
            formula.add_biimplication(&[root, lits[n - 2], lits[n - 1]], Connective::Or);
        }
    }
}

/// Folds `clauses` into `root <-> (C1 ^ C2 ^ ... ^ Cn)`, peeling one clause at a time.
fn conjunction(formula: &mut Formula, mut root: Lit, clauses: &[Clause]) {
    let Some((last, init)) = clauses.split_last() else {
        return;
    };

    for clause in init {
        let next = fresh(formula);
        let clause_root = fresh(formula);
        formula.add_biimplication(&[root, next, clause_root], Connective::And);
        disjunction(formula, clause_root, clause);
        root = next;
    }

    disjunction(formula, root, last);
}

pub fn reduce(formula: &mut Formula, clauses: &[Clause]) {
    let root = fresh(formula);
    formula.add_biimplication(&[root], Connective::Or);
    conjunction(formula, root, clauses);
}
