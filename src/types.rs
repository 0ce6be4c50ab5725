pub type Lit = i32;

pub type Var = usize;

pub type Clause = Vec<Lit>;

pub fn to_var(lit: Lit) -> Var {
    assert_ne!(lit, 0);
    lit.unsigned_abs() as Var
}

pub fn to_lit(var: Var) -> Lit {
    assert_ne!(var, 0);
    Lit::try_from(var).unwrap_or_else(|_| panic!("variable {var} does not fit in a literal"))
}

/// A CNF formula as read from DIMACS, clauses of any arity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    pub var_count: usize,
    pub clauses: Vec<Clause>,
}

#[cfg(test)]
mod tests {
    use super::{to_lit, to_var};

    #[test]
    fn conversions() {
        assert_eq!(to_var(7), 7);
        assert_eq!(to_var(-7), 7);
        assert_eq!(to_lit(3), 3);
        assert_eq!(to_var(to_lit(42)), 42);
    }

    #[test]
    #[should_panic]
    fn zero_is_not_a_literal() {
        to_var(0);
    }

    #[test]
    #[should_panic]
    fn oversized_variable() {
        to_lit(i32::MAX as usize + 1);
    }
}
