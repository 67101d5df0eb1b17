//! Definitional CNF transformation.
//!
//! Formulas are turned into equisatisfiable CNF by introducing one gate
//! variable per connective. Engine variables keep their indices, so a solver
//! model restricted to the indices below the reserved count reads back
//! directly as an assignment of the original formula's variables; gate
//! variables are allocated above that count.

use varisat::{CnfFormula, ExtendFormula};

use pdrsat_formula::Expr;

pub struct Encoder {
    cnf: CnfFormula,
    const_true: Option<varisat::Lit>,
}

impl Encoder {
    /// Create an encoder reserving the variable indices below `var_count` for
    /// engine variables.
    pub fn new(var_count: usize) -> Encoder {
        let mut cnf = CnfFormula::new();
        cnf.set_var_count(var_count);
        Encoder {
            cnf,
            const_true: None,
        }
    }

    /// Encode a formula, returning its defining literal.
    ///
    /// The clauses added to the underlying CNF constrain the returned literal
    /// to be true exactly when the formula is.
    pub fn encode(&mut self, expr: &Expr) -> varisat::Lit {
        match expr {
            Expr::Const(true) => self.const_true(),
            Expr::Const(false) => !self.const_true(),
            Expr::Var(var) => varisat::Lit::from_index(var.index(), true),
            Expr::Not(expr) => !self.encode(expr),
            Expr::And(exprs) => {
                let lits: Vec<_> = exprs.iter().map(|expr| self.encode(expr)).collect();
                self.gate_and(&lits)
            }
            Expr::Or(exprs) => {
                let lits: Vec<_> = exprs.iter().map(|expr| self.encode(expr)).collect();
                self.gate_or(&lits)
            }
            Expr::Xor(lhs, rhs) => {
                let lhs = self.encode(lhs);
                let rhs = self.encode(rhs);
                self.gate_xor(lhs, rhs)
            }
            Expr::Eq(lhs, rhs) => {
                let lhs = self.encode(lhs);
                let rhs = self.encode(rhs);
                !self.gate_xor(lhs, rhs)
            }
            Expr::Implies(lhs, rhs) => {
                let lhs = self.encode(lhs);
                let rhs = self.encode(rhs);
                self.gate_or(&[!lhs, rhs])
            }
        }
    }

    /// Assert that a previously encoded literal holds.
    pub fn assert(&mut self, lit: varisat::Lit) {
        self.cnf.add_clause(&[lit]);
    }

    /// The accumulated CNF.
    pub fn into_formula(self) -> CnfFormula {
        self.cnf
    }

    /// A literal constrained to be true.
    fn const_true(&mut self) -> varisat::Lit {
        match self.const_true {
            Some(lit) => lit,
            None => {
                let lit = self.cnf.new_var().positive();
                self.cnf.add_clause(&[lit]);
                self.const_true = Some(lit);
                lit
            }
        }
    }

    /// Gate variable for the conjunction of `lits`.
    fn gate_and(&mut self, lits: &[varisat::Lit]) -> varisat::Lit {
        match *lits {
            [] => self.const_true(),
            [lit] => lit,
            _ => {
                let gate = self.cnf.new_var().positive();
                for &lit in lits {
                    self.cnf.add_clause(&[!gate, lit]);
                }
                let mut long: Vec<_> = lits.iter().map(|&lit| !lit).collect();
                long.push(gate);
                self.cnf.add_clause(&long);
                gate
            }
        }
    }

    /// Gate variable for the disjunction of `lits`.
    fn gate_or(&mut self, lits: &[varisat::Lit]) -> varisat::Lit {
        match *lits {
            [] => !self.const_true(),
            [lit] => lit,
            _ => {
                let gate = self.cnf.new_var().positive();
                for &lit in lits {
                    self.cnf.add_clause(&[gate, !lit]);
                }
                let mut long: Vec<_> = lits.to_vec();
                long.push(!gate);
                self.cnf.add_clause(&long);
                gate
            }
        }
    }

    /// Gate variable for the exclusive or of two literals.
    fn gate_xor(&mut self, lhs: varisat::Lit, rhs: varisat::Lit) -> varisat::Lit {
        let gate = self.cnf.new_var().positive();
        self.cnf.add_clause(&[!gate, lhs, rhs]);
        self.cnf.add_clause(&[!gate, !lhs, !rhs]);
        self.cnf.add_clause(&[gate, !lhs, rhs]);
        self.cnf.add_clause(&[gate, lhs, !rhs]);
        gate
    }
}
