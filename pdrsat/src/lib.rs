//! A property directed reachability (IC3) safety verifier for boolean
//! transition systems.
//!
//! A transition system is given by a vocabulary of paired current/next-state
//! variables, an initial-state formula, a transition formula and a safety
//! postcondition. [`verify`] decides whether every state reachable from the
//! initial states satisfies the postcondition, returning either an inductive
//! invariant witnessing safety or a concrete counterexample trace.
pub mod check;
pub mod state;
pub mod trace;
pub mod vocab;

mod push;
mod refine;

pub use check::{verify, Outcome, VerifyError};
pub use state::State;
pub use vocab::{Vocab, VocabError};

pub use pdrsat_formula::{Clause, Cube, Expr, Lit, Var};
pub use pdrsat_oracle::{Model, Oracle, OracleError, SatOracle, Verdict};
