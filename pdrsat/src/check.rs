//! The verification driver.
//!
//! The driver owns the trace of frames and alternates two phases until a
//! fixed point: backward refinement strengthens the frames until the last one
//! entails the postcondition or a counterexample reaches the initial states,
//! and the forward push rebuilds the trace by propagating every clause that
//! stays inductive, extending it by one frame. Verification ends when two
//! adjacent frames become logically equivalent (their common conjunction is
//! an inductive invariant) or when a counterexample is found.
use thiserror::Error;

use pdrsat_formula::Expr;
use pdrsat_oracle::{Oracle, OracleError, Verdict};

use crate::state::{State, Vocabulary};
use crate::trace::Frame;
use crate::vocab::{Vocab, VocabError};

/// Result of a completed verification.
#[derive(Clone, Debug)]
pub enum Outcome {
    /// Every state reachable from the initial states satisfies the
    /// postcondition. The contained formula `I` is an inductive invariant
    /// witnessing this: `Init => I`, `I & T => I'` and `I => Post` all hold.
    Safe {
        /// The inductive invariant, over current-state variables.
        invariant: Expr,
    },
    /// The postcondition can be violated. The contained states lead from an
    /// initial state to a violation: the first state satisfies the
    /// initial-state formula, consecutive states are related by the
    /// transition formula and the last state falsifies the postcondition.
    Unsafe {
        /// The counterexample trace, never empty.
        counterexample: Vec<State>,
    },
}

/// Possible errors of a verification run.
///
/// A backend failure means the verdict is unknown; no partial trace is
/// exposed in that case.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("invalid input: {0}")]
    Vocab(#[from] VocabError),
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// Decide whether a transition system can reach a state violating its
/// postcondition.
///
/// `init` and `post` must mention only current-state variables of the
/// vocabulary; this is checked eagerly. `trans` relates both halves of the
/// vocabulary and may use auxiliary definitional variables.
pub fn verify<O: Oracle>(
    oracle: &mut O,
    vocab: &Vocab,
    init: &Expr,
    trans: &Expr,
    post: &Expr,
) -> Result<Outcome, VerifyError> {
    vocab.check_state_formula(init)?;
    vocab.check_state_formula(post)?;

    let mut pdr = Pdr {
        oracle,
        vocab,
        init,
        trans,
        post,
    };
    Ok(pdr.run()?)
}

/// A single verification run.
///
/// Groups the fixed inputs so that the refinement and push phases can share
/// the entailment helpers below.
pub(crate) struct Pdr<'a, O: Oracle> {
    pub(crate) oracle: &'a mut O,
    pub(crate) vocab: &'a Vocab,
    pub(crate) init: &'a Expr,
    pub(crate) trans: &'a Expr,
    pub(crate) post: &'a Expr,
}

impl<'a, O: Oracle> Pdr<'a, O> {
    pub(crate) fn run(&mut self) -> Result<Outcome, OracleError> {
        // A postcondition violated by an initial state needs no transition;
        // the frame search below only discovers violations at least one step
        // away from the initial states.
        let init = self.init;
        let post = self.post;
        if let Verdict::Falsifiable(model) = self.entails(init, post)? {
            log::info!("an initial state violates the postcondition");
            let state = State::from_model(&model, self.vocab, Vocabulary::Unprimed);
            return Ok(Outcome::Unsafe {
                counterexample: vec![state],
            });
        }

        let mut frames = vec![Frame::new()];
        loop {
            let len = frames.len();
            log::info!("strengthening a trace of {} frames", len);

            match self.back_prop(&frames, post, 0)? {
                crate::refine::Refinement::Unsafe(counterexample) => {
                    log::info!("found a counterexample of {} states", counterexample.len());
                    return Ok(Outcome::Unsafe { counterexample });
                }
                crate::refine::Refinement::Safe(stronger) => {
                    let first = stronger
                        .into_iter()
                        .next()
                        .expect("strengthening a nonempty trace yields a nonempty trace");
                    frames = self.forward_prop(first, len + 1)?;
                }
            }

            if frames.len() >= 2 {
                let last = frames[frames.len() - 1].conj();
                let previous = frames[frames.len() - 2].conj();
                if self.equivalent(&previous, &last)? {
                    log::info!("adjacent frames converged, the system is safe");
                    return Ok(Outcome::Safe { invariant: last });
                }
            }
        }
    }

    /// Check the plain implication `pre => post`.
    pub(crate) fn entails(&mut self, pre: &Expr, post: &Expr) -> Result<Verdict, OracleError> {
        self.oracle
            .check_tautology(&Expr::implies(pre.clone(), post.clone()))
    }

    /// Check the relative induction query `pre & T => post'`.
    pub(crate) fn step_entails(&mut self, pre: &Expr, post: &Expr) -> Result<Verdict, OracleError> {
        let query = Expr::implies(
            Expr::and(vec![pre.clone(), self.trans.clone()]),
            self.vocab.prime(post),
        );
        self.oracle.check_tautology(&query)
    }

    /// Check whether two formulas have the same models.
    pub(crate) fn equivalent(&mut self, lhs: &Expr, rhs: &Expr) -> Result<bool, OracleError> {
        Ok(self
            .oracle
            .check_tautology(&Expr::eq(lhs.clone(), rhs.clone()))?
            .is_valid())
    }
}
