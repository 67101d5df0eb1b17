//! Entailment oracle for the pdrsat safety verifier.
//!
//! The verification engine interacts with a propositional decision procedure
//! through a single capability: checking whether a formula is a tautology and,
//! when it is not, obtaining a countermodel. This crate defines that interface
//! ([`Oracle`]) together with the [`SatOracle`] implementation that decides
//! queries with the varisat CDCL solver.

use std::fmt;

use rustc_hash::FxHashMap;
use thiserror::Error;

use pdrsat_formula::Var;

mod encode;
mod sat;

pub use sat::SatOracle;

/// Errors of the entailment backend.
///
/// The engine treats any backend error as fatal for the running query and
/// surfaces it to the caller of the verification entry point; there is no
/// local recovery.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The backend finished without producing a verdict.
    #[error("entailment backend failed to decide the query: {cause}")]
    Backend { cause: anyhow::Error },
}

/// A total assignment for the free variables of a checked formula.
///
/// Models witness falsifiability: evaluating the checked formula under the
/// model yields false. Variables that were not free in the checked formula
/// are absent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Model {
    values: FxHashMap<Var, bool>,
}

impl Model {
    /// The value the model assigns to a variable, if any.
    pub fn value(&self, var: Var) -> Option<bool> {
        self.values.get(&var).copied()
    }

    /// Iterator over the assigned variables.
    pub fn vars(&self) -> impl Iterator<Item = Var> + '_ {
        self.values.keys().copied()
    }

    /// Number of assigned variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the model assigns no variables.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::iter::FromIterator<(Var, bool)> for Model {
    fn from_iter<I: IntoIterator<Item = (Var, bool)>>(iter: I) -> Model {
        Model {
            values: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut entries: Vec<_> = self.values.iter().collect();
        entries.sort();
        f.debug_map().entries(entries).finish()
    }
}

/// Outcome of a tautology check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The formula holds under every assignment.
    Valid,
    /// The formula is falsified by the contained model.
    Falsifiable(Model),
}

impl Verdict {
    /// Whether the checked formula is a tautology.
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

/// A propositional decision procedure with model extraction.
///
/// Implementations must be deterministic for repeated identical queries and
/// must answer queries independently of each other; the engine issues them in
/// strict sequential order and never relies on solver state surviving from
/// one query to the next.
pub trait Oracle {
    /// Check whether the formula is a tautology.
    ///
    /// A [`Verdict::Falsifiable`] result carries a model assigning a value to
    /// every free variable of the formula under which the formula evaluates
    /// to false.
    fn check_tautology(&mut self, formula: &pdrsat_formula::Expr) -> Result<Verdict, OracleError>;
}
