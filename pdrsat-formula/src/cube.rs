//! Cubes and blocking clauses.
use std::fmt;

use crate::expr::Expr;
use crate::lit::Lit;

/// A conjunction of literals.
///
/// A cube describes a (possibly partial) state of a transition system: every
/// literal fixes the value of one variable. The empty cube is the constant
/// true formula.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Cube {
    lits: Vec<Lit>,
}

impl Cube {
    /// Create a cube from its literals.
    pub fn from_lits(lits: Vec<Lit>) -> Cube {
        Cube { lits }
    }

    /// The literals of the cube.
    pub fn lits(&self) -> &[Lit] {
        &self.lits
    }

    /// Number of literals in the cube.
    pub fn len(&self) -> usize {
        self.lits.len()
    }

    /// Whether the cube has no literals.
    pub fn is_empty(&self) -> bool {
        self.lits.is_empty()
    }

    /// The clause that excludes exactly the states described by this cube.
    pub fn negate(&self) -> Clause {
        Clause {
            lits: self.lits.iter().map(|&lit| !lit).collect(),
        }
    }

    /// The cube as a formula.
    pub fn to_expr(&self) -> Expr {
        Expr::and(self.lits.iter().map(|&lit| Expr::lit(lit)))
    }
}

impl fmt::Debug for Cube {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.lits.iter()).finish()
    }
}

/// A disjunction of literals.
///
/// A clause is the negation of a cube. The engine stores clauses in frames as
/// blocking constraints that exclude a bad region of the state space. The
/// empty clause is the constant false formula.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Clause {
    lits: Vec<Lit>,
}

impl Clause {
    /// Create a clause from its literals.
    pub fn from_lits(lits: Vec<Lit>) -> Clause {
        Clause { lits }
    }

    /// The literals of the clause.
    pub fn lits(&self) -> &[Lit] {
        &self.lits
    }

    /// Number of literals in the clause.
    pub fn len(&self) -> usize {
        self.lits.len()
    }

    /// Whether the clause has no literals.
    pub fn is_empty(&self) -> bool {
        self.lits.is_empty()
    }

    /// The cube describing exactly the states excluded by this clause.
    pub fn negate(&self) -> Cube {
        Cube {
            lits: self.lits.iter().map(|&lit| !lit).collect(),
        }
    }

    /// The clause as a formula.
    pub fn to_expr(&self) -> Expr {
        Expr::or(self.lits.iter().map(|&lit| Expr::lit(lit)))
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.lits.iter()).finish()
    }
}
