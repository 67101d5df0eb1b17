//! Paired current-state and next-state vocabularies.
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use pdrsat_formula::{Expr, Var};

/// Possible errors while building or using a vocabulary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VocabError {
    #[error("the vocabulary must contain at least one variable pair")]
    Empty,
    #[error("variable {} occurs twice in the vocabulary", var)]
    DuplicateVar { var: Var },
    #[error(
        "formula over current-state variables mentions {}, which is not a current-state variable",
        var
    )]
    NotAStateVar { var: Var },
}

/// The bijection between current-state and next-state variables.
///
/// A vocabulary is an ordered list of pairs `(x, x')` where `x` denotes the
/// value of a state variable now and `x'` its value after one transition. The
/// initial-state and postcondition formulas of a transition system mention
/// only current-state variables; the transition formula may mention both
/// halves. Renaming a formula from one half to the other is called priming
/// (resp. unpriming) and is a plain simultaneous substitution.
#[derive(Clone, Debug)]
pub struct Vocab {
    pairs: Vec<(Var, Var)>,
    to_next: FxHashMap<Var, Var>,
    to_current: FxHashMap<Var, Var>,
}

impl Vocab {
    /// Build a vocabulary from current/next variable pairs.
    ///
    /// The pairs must be nonempty and all involved variables must be
    /// pairwise distinct.
    pub fn new(pairs: impl IntoIterator<Item = (Var, Var)>) -> Result<Vocab, VocabError> {
        let pairs: Vec<_> = pairs.into_iter().collect();
        if pairs.is_empty() {
            return Err(VocabError::Empty);
        }

        let mut seen = FxHashSet::default();
        for &(current, next) in pairs.iter() {
            for &var in [current, next].iter() {
                if !seen.insert(var) {
                    return Err(VocabError::DuplicateVar { var });
                }
            }
        }

        let to_next = pairs.iter().copied().collect();
        let to_current = pairs.iter().map(|&(current, next)| (next, current)).collect();

        Ok(Vocab {
            pairs,
            to_next,
            to_current,
        })
    }

    /// The variable pairs in their original order.
    pub fn pairs(&self) -> &[(Var, Var)] {
        &self.pairs
    }

    /// Number of variable pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the vocabulary has no pairs. Always false for a constructed
    /// vocabulary.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The next-state twin of a current-state variable.
    pub fn next_var(&self, var: Var) -> Option<Var> {
        self.to_next.get(&var).copied()
    }

    /// The current-state twin of a next-state variable.
    pub fn current_var(&self, var: Var) -> Option<Var> {
        self.to_current.get(&var).copied()
    }

    /// Rename every current-state variable to its next-state twin.
    pub fn prime(&self, expr: &Expr) -> Expr {
        expr.substitute(|var| self.next_var(var))
    }

    /// Rename every next-state variable to its current-state twin.
    pub fn unprime(&self, expr: &Expr) -> Expr {
        expr.substitute(|var| self.current_var(var))
    }

    /// Check that a formula mentions only current-state variables.
    ///
    /// Initial-state and postcondition formulas must pass this check; the
    /// transition formula is exempt, as it relates both vocabularies and may
    /// additionally use auxiliary definitional variables (circuit wires
    /// constrained by equations inside the formula).
    pub fn check_state_formula(&self, expr: &Expr) -> Result<(), VocabError> {
        for var in expr.vars() {
            if !self.to_next.contains_key(&var) {
                return Err(VocabError::NotAStateVar { var });
            }
        }
        Ok(())
    }
}
