use std::collections::BTreeSet;

use crate::types::{to_lit, to_var, Clause, Lit, Var};

/// Fresh variable ids above the original ones.
#[derive(Clone, Debug)]
pub struct AuxAllocator {
    counter: Var,
}

impl AuxAllocator {
    pub fn new(seed: Var) -> Self {
        Self { counter: seed }
    }

    pub fn allocate(&mut self) -> Var {
        self.counter += 1;
        self.counter
    }

    pub fn last(&self) -> Var {
        self.counter
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
}

// Sign patterns that falsify `x <-> (y op z)`, applied to `[x, y, z]`.
const AND_FALSIFYING: [[Lit; 3]; 4] = [[1, -1, -1], [-1, 1, 1], [-1, 1, -1], [-1, -1, 1]];
const OR_FALSIFYING: [[Lit; 3]; 4] = [[1, 1, -1], [1, -1, 1], [1, -1, -1], [-1, 1, 1]];

#[derive(Clone, Debug)]
pub struct Formula {
    variables: BTreeSet<Var>,
    clauses: Vec<Clause>,
    aux: AuxAllocator,
}

impl Formula {
    /// Creates a formula over the original variables `1..=var_count`.
    pub fn new(var_count: usize) -> Self {
        Self {
            variables: (1..=var_count).collect(),
            clauses: vec![],
            aux: AuxAllocator::new(var_count),
        }
    }

    pub fn variables(&self) -> &BTreeSet<Var> {
        &self.variables
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn var_count(&self) -> usize {
        self.variables.len()
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    pub fn last_aux(&self) -> Var {
        self.aux.last()
    }

    pub fn allocate_auxiliary(&mut self) -> Var {
        let var = self.aux.allocate();
        self.variables.insert(var);
        var
    }

    fn fresh_lit(&mut self) -> Lit {
        to_lit(self.allocate_auxiliary())
    }

    pub(crate) fn push(&mut self, clause: Clause) {
        for &lit in &clause {
            self.variables.insert(to_var(lit));
        }
        self.clauses.push(clause);
    }

    /// Pads `clause` to three literals with fresh variables; empty clauses are dropped.
    pub fn add_clause(&mut self, clause: &[Lit]) {
        assert!(
            clause.len() <= 3,
            "invalid number of literals in disjunction clause, expected at most 3, got {}",
            clause.len()
        );

        match *clause {
            [] => {}
            [a] => {
                let x = self.fresh_lit();
                let y = self.fresh_lit();
                for i in [-1, 1] {
                    for j in [-1, 1] {
                        self.push(vec![a, i * x, j * y]);
                    }
                }
            }
            [a, b] => {
                let x = self.fresh_lit();
                for i in [-1, 1] {
                    self.push(vec![a, b, i * x]);
                }
            }
            _ => self.push(clause.to_vec()),
        }
    }

    /// `[x, y, z]` encodes `x <-> (y op z)`, `[x, y]` encodes `x <-> y`, `[x]` asserts `x`.
    pub fn add_biimplication(&mut self, lits: &[Lit], connective: Connective) {
        assert!(
            (1..=3).contains(&lits.len()),
            "invalid number of literals in biimplication clause, expected 1 to 3, got {}",
            lits.len()
        );

        match *lits {
            [x] => self.add_clause(&[x]),
            [x, y] => {
                self.add_clause(&[-x, y]);
                self.add_clause(&[x, -y]);
            }
            [x, y, z] => {
                let rows = match connective {
                    Connective::And => &AND_FALSIFYING,
                    Connective::Or => &OR_FALSIFYING,
                };
                for [s1, s2, s3] in rows {
                    self.add_clause(&[s1 * x, s2 * y, s3 * z]);
                }
            }
            _ => unreachable!(),
        }
    }
}
