//! Deciding entailment with the varisat CDCL solver.

use anyhow::anyhow;
use rustc_hash::FxHashMap;
use varisat::solver::Solver;

use pdrsat_formula::Expr;

use crate::encode::Encoder;
use crate::{Model, Oracle, OracleError, Verdict};

/// An entailment oracle backed by the varisat SAT solver.
///
/// Each query is decided by a fresh solver instance on the CNF transformation
/// of the negated formula: an unsatisfiable negation means the formula is a
/// tautology, a satisfying assignment is a countermodel. Queries are therefore
/// semantically independent and the oracle is deterministic.
#[derive(Default)]
pub struct SatOracle {
    queries: u64,
}

impl SatOracle {
    /// Create a new oracle.
    pub fn new() -> SatOracle {
        SatOracle::default()
    }

    /// Number of queries decided so far.
    pub fn query_count(&self) -> u64 {
        self.queries
    }
}

impl Oracle for SatOracle {
    fn check_tautology(&mut self, formula: &Expr) -> Result<Verdict, OracleError> {
        self.queries += 1;
        log::trace!("query {}: {:?}", self.queries, formula);

        let free_vars = formula.vars();
        let var_count = free_vars.last().map_or(0, |var| var.index() + 1);

        let mut encoder = Encoder::new(var_count);
        let root = encoder.encode(formula);
        encoder.assert(!root);

        let mut solver = Solver::new();
        solver.add_formula(&encoder.into_formula());

        let negation_satisfiable = solver
            .solve()
            .map_err(|err| OracleError::Backend { cause: err.into() })?;

        if !negation_satisfiable {
            log::trace!("query {}: valid", self.queries);
            return Ok(Verdict::Valid);
        }

        let assignment: FxHashMap<usize, bool> = solver
            .model()
            .ok_or_else(|| OracleError::Backend {
                cause: anyhow!("solver reported satisfiable but produced no model"),
            })?
            .into_iter()
            .map(|lit| (lit.index(), lit.is_positive()))
            .collect();

        // A free variable the solver never decided is unconstrained in the
        // countermodel; pick false so the model stays total over the free
        // variables of the query.
        let model: Model = free_vars
            .into_iter()
            .map(|var| {
                let value = assignment.get(&var.index()).copied().unwrap_or(false);
                (var, value)
            })
            .collect();

        log::trace!("query {}: falsifiable {:?}", self.queries, model);
        Ok(Verdict::Falsifiable(model))
    }
}
