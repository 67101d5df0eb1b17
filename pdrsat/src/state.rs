//! States and their cubes.
use std::fmt;
use std::iter::FromIterator;

use rustc_hash::FxHashMap;

use pdrsat_formula::{Cube, Var};
use pdrsat_oracle::Model;

use crate::vocab::Vocab;

/// Which half of the vocabulary to read a countermodel through.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Vocabulary {
    /// Read current-state variables directly.
    Unprimed,
    /// Read next-state variables and relabel them to their current-state
    /// twins.
    Primed,
}

/// A partial assignment of the current-state variables.
///
/// States are always keyed by current-state variables, also when they were
/// extracted from the primed half of a countermodel. A variable the model did
/// not constrain is simply absent; a state assigning every variable of the
/// vocabulary is called full. The states of a counterexample trace are full
/// whenever the transition formula mentions the whole vocabulary.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct State {
    values: FxHashMap<Var, bool>,
}

impl State {
    /// Extract a state from a countermodel.
    ///
    /// Reads each pair of the vocabulary through the chosen half and skips
    /// variables the model does not assign.
    pub fn from_model(model: &Model, vocab: &Vocab, side: Vocabulary) -> State {
        vocab
            .pairs()
            .iter()
            .filter_map(|&(current, next)| {
                let read = match side {
                    Vocabulary::Unprimed => current,
                    Vocabulary::Primed => next,
                };
                model.value(read).map(|value| (current, value))
            })
            .collect()
    }

    /// The value assigned to a variable, if any.
    pub fn value(&self, var: Var) -> Option<bool> {
        self.values.get(&var).copied()
    }

    /// Number of assigned variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the state assigns no variables.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether every current-state variable of the vocabulary is assigned.
    pub fn is_full(&self, vocab: &Vocab) -> bool {
        vocab
            .pairs()
            .iter()
            .all(|&(current, _)| self.values.contains_key(&current))
    }

    /// The cube whose models are exactly the full states extending this one.
    ///
    /// Literals appear in vocabulary order; unassigned variables contribute
    /// none. The empty state produces the empty cube, i.e. the constant true
    /// formula.
    pub fn to_cube(&self, vocab: &Vocab) -> Cube {
        Cube::from_lits(
            vocab
                .pairs()
                .iter()
                .filter_map(|&(current, _)| self.value(current).map(|value| current.lit(value)))
                .collect(),
        )
    }
}

impl FromIterator<(Var, bool)> for State {
    fn from_iter<I: IntoIterator<Item = (Var, bool)>>(iter: I) -> State {
        State {
            values: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut entries: Vec<_> = self.values.iter().collect();
        entries.sort();
        f.debug_map().entries(entries).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(index: usize) -> Var {
        Var::from_index(index)
    }

    fn vocab(count: usize) -> Vocab {
        Vocab::new((0..count).map(|i| (v(2 * i), v(2 * i + 1)))).unwrap()
    }

    #[test]
    fn cube_of_extracted_state_is_satisfied_by_the_model() {
        let vocab = vocab(3);
        let model: Model = vec![(v(0), true), (v(2), false), (v(4), true)]
            .into_iter()
            .collect();

        let state = State::from_model(&model, &vocab, Vocabulary::Unprimed);
        assert!(state.is_full(&vocab));

        let cube = state.to_cube(&vocab);
        assert!(cube
            .to_expr()
            .eval(&|var| model.value(var).unwrap_or(false)));
    }

    #[test]
    fn primed_extraction_relabels_to_current_state() {
        let vocab = vocab(2);
        let model: Model = vec![(v(1), true), (v(3), false)].into_iter().collect();

        let state = State::from_model(&model, &vocab, Vocabulary::Primed);
        assert_eq!(state.value(v(0)), Some(true));
        assert_eq!(state.value(v(2)), Some(false));
        assert_eq!(state.value(v(1)), None);
    }

    #[test]
    fn unassigned_variables_are_skipped() {
        let vocab = vocab(2);
        let model: Model = vec![(v(0), true)].into_iter().collect();

        let state = State::from_model(&model, &vocab, Vocabulary::Unprimed);
        assert!(!state.is_full(&vocab));
        assert_eq!(state.to_cube(&vocab).lits(), &[v(0).positive()]);
    }
}
