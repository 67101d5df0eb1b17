//! Backward counterexample-to-induction refinement.
//!
//! Given a trace and an obligation its last frame must support, the
//! refinement either strengthens the frames with blocking clauses until the
//! obligation holds, or assembles a concrete trace of states showing that the
//! obligation fails from the initial states. Every counterexample to
//! induction found at some level becomes a stronger obligation one level
//! down; the recursion bottoms out at the initial-state formula.

use pdrsat_formula::Expr;
use pdrsat_oracle::{Oracle, OracleError, Verdict};

use crate::check::Pdr;
use crate::state::{State, Vocabulary};
use crate::trace::Frame;

/// Result of one backward refinement pass.
pub(crate) enum Refinement {
    /// The obligation holds; the possibly strengthened frames are returned.
    Safe(Vec<Frame>),
    /// The obligation fails; the states lead from an initial state to the
    /// violation. Never empty.
    Unsafe(Vec<State>),
}

impl<'a, O: Oracle> Pdr<'a, O> {
    /// Strengthen `frames` until the last one supports `post`, or find a
    /// counterexample.
    ///
    /// At the top level (`level == 0`) the obligation is a plain implication:
    /// the last frame must entail the postcondition. At recursive levels the
    /// obligation came from a blocked state one level up and must hold after
    /// one transition, so the relative induction query is used instead.
    pub(crate) fn back_prop(
        &mut self,
        frames: &[Frame],
        post: &Expr,
        level: usize,
    ) -> Result<Refinement, OracleError> {
        log::debug!("back_prop({}): {} frames", level, frames.len());

        let (last, prefix) = match frames.split_last() {
            Some((last, prefix)) => (last, prefix),
            None => {
                // initial frontier: the obligation must hold one step after
                // the initial states
                let init = self.init;
                return Ok(match self.step_entails(init, post)? {
                    Verdict::Valid => Refinement::Safe(Vec::new()),
                    Verdict::Falsifiable(model) => {
                        let vocab = self.vocab;
                        log::debug!("back_prop({}): obligation fails from the start", level);
                        Refinement::Unsafe(vec![
                            State::from_model(&model, vocab, Vocabulary::Unprimed),
                            State::from_model(&model, vocab, Vocabulary::Primed),
                        ])
                    }
                });
            }
        };

        let mut last = last.clone();
        let mut strengthened_prefix = prefix.to_vec();

        loop {
            let obligation = last.conj();
            let verdict = if level == 0 {
                self.entails(&obligation, post)?
            } else {
                self.step_entails(&obligation, post)?
            };

            let model = match verdict {
                Verdict::Valid => break,
                Verdict::Falsifiable(model) => model,
            };

            // block the counterexample to induction at this level
            let cti = State::from_model(&model, self.vocab, Vocabulary::Unprimed);
            log::debug!("back_prop({}): blocking {:?}", level, cti);
            last.add(cti.to_cube(self.vocab).negate());

            // the new clause must be supported one level down
            match self.back_prop(prefix, &last.conj(), level + 1)? {
                Refinement::Safe(stronger) => strengthened_prefix = stronger,
                Refinement::Unsafe(mut trace) => {
                    if level > 0 {
                        self.extend_trace(&mut trace, &last.conj())?;
                    }
                    return Ok(Refinement::Unsafe(trace));
                }
            }
        }

        strengthened_prefix.push(last);
        Ok(Refinement::Safe(strengthened_prefix))
    }

    /// Append the successor state that carries the counterexample from the
    /// last state of `trace` into the region blocked by the current frame.
    fn extend_trace(
        &mut self,
        trace: &mut Vec<State>,
        blocked: &Expr,
    ) -> Result<(), OracleError> {
        let tail = trace
            .last()
            .expect("counterexample traces are never empty")
            .to_cube(self.vocab)
            .to_expr();
        let vocab = self.vocab;
        match self.step_entails(&tail, blocked)? {
            Verdict::Falsifiable(model) => {
                trace.push(State::from_model(&model, vocab, Vocabulary::Primed));
                Ok(())
            }
            // the blocked state was chosen because no predecessor inside the
            // frame prefix supports it, yet the trace reaches it, so it must
            // have a successor outside the strengthened frame
            Verdict::Valid => unreachable!("reached state has no successor in the blocked region"),
        }
    }
}
