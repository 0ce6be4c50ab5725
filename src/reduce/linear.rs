use crate::{
    formula::Formula,
    types::{to_lit, Clause},
};

/// Splits every clause longer than three into a chain
/// `(c0 c1 y1) (-y1 c2 y2) ... (-yk c[n-2] c[n-1])`.
pub fn reduce(formula: &mut Formula, clauses: &[Clause]) {
    for clause in clauses {
        let n = clause.len();
        if n <= 3 {
            formula.add_clause(clause);
            continue;
        }

        let mut y = to_lit(formula.allocate_auxiliary());
        formula.add_clause(&[clause[0], clause[1], y]);

        for &lit in &clause[2..n - 2] {
            let next = to_lit(formula.allocate_auxiliary());
            formula.add_clause(&[-y, lit, next]);
            y = next;
        }

        formula.add_clause(&[-y, clause[n - 2], clause[n - 1]]);
    }
}

#[cfg(test)]
mod tests {
    use crate::{formula::Formula, testing::satisfiable_under};

    use super::reduce;

    #[test]
    fn four_literals() {
        let mut formula = Formula::new(4);
        reduce(&mut formula, &[vec![1, 2, 3, 4]]);
        assert_eq!(formula.clauses(), &[vec![1, 2, 5], vec![-5, 3, 4]]);
    }

    #[test]
    fn chain() {
        let mut formula = Formula::new(6);
        reduce(&mut formula, &[vec![1, -2, 3, -4, 5, -6]]);
        assert_eq!(
            formula.clauses(),
            &[
                vec![1, -2, 7],
                vec![-7, 3, 8],
                vec![-8, -4, 9],
                vec![-9, 5, -6]
            ]
        );
        assert_eq!(formula.last_aux(), 9);

        assert!(!satisfiable_under(formula.clauses(), &[-1, 2, -3, 4, -5, 6]));
        assert!(satisfiable_under(formula.clauses(), &[-1, 2, -3, -4, -5, 6]));
    }

    #[test]
    fn independent_chains() {
        let mut formula = Formula::new(5);
        reduce(&mut formula, &[vec![1, 2, 3, 4], vec![2], vec![-1, -2, -3, -4, -5]]);
        assert_eq!(
            formula.clauses(),
            &[
                vec![1, 2, 6],
                vec![-6, 3, 4],
                vec![2, -7, -8],
                vec![2, -7, 8],
                vec![2, 7, -8],
                vec![2, 7, 8],
                vec![-1, -2, 9],
                vec![-9, -3, 10],
                vec![-10, -4, -5],
            ]
        );
    }
}
