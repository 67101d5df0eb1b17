//! Forward propagation of inductive clauses.
//!
//! After backward refinement the first frame holds all learned clauses. The
//! push rebuilds the trace from it: each frame's relatively inductive clauses
//! survive into the next frame, the rest are dropped at that level. Dropping
//! preserves the trace invariants, as a frame with fewer clauses only grows
//! its set of models. The push stops early when a frame reproduces itself;
//! the driver then recognizes the fixed point as an inductive invariant.

use pdrsat_oracle::{Oracle, OracleError};

use crate::check::Pdr;
use crate::trace::Frame;

impl<'a, O: Oracle> Pdr<'a, O> {
    /// Rebuild a trace of up to `max_len` frames starting from `first`.
    pub(crate) fn forward_prop(
        &mut self,
        first: Frame,
        max_len: usize,
    ) -> Result<Vec<Frame>, OracleError> {
        log::debug!(
            "forward_prop: pushing {} clauses through up to {} frames",
            first.len(),
            max_len
        );

        let mut frames = vec![first.clone()];
        let mut current = first;

        for _ in 1..max_len {
            let next = self.induct(&current)?;
            let fixed_point = self.equivalent(&current.conj(), &next.conj())?;
            frames.push(next.clone());
            if fixed_point {
                log::debug!("forward_prop: fixed point after {} frames", frames.len());
                break;
            }
            current = next;
        }

        Ok(frames)
    }

    /// The clauses of `frame` that are inductive relative to the whole frame.
    fn induct(&mut self, frame: &Frame) -> Result<Frame, OracleError> {
        let context = frame.conj();
        let mut next = Frame::new();
        for clause in frame.clauses() {
            if self.step_entails(&context, &clause.to_expr())?.is_valid() {
                next.add(clause.clone());
            }
        }
        Ok(next)
    }
}
