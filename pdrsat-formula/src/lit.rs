//! State variables and literals.
use std::{fmt, ops};

/// A boolean state variable.
///
/// A variable is identified by a 0-based index. The verification engine works
/// with two disjoint sets of variables, one describing the current state of a
/// transition system and one describing the next state; which half a variable
/// belongs to is recorded by the vocabulary that pairs the two sets, not by
/// the variable itself.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Var {
    index: u32,
}

impl Var {
    /// Creates a variable from a 0-based index.
    #[inline]
    pub fn from_index(index: usize) -> Var {
        debug_assert!(index <= u32::max_value() as usize);
        Var {
            index: index as u32,
        }
    }

    /// The 0-based index identifying this variable.
    #[inline]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    /// The literal asserting that this variable has the given value.
    #[inline]
    pub fn lit(self, value: bool) -> Lit {
        Lit { var: self, value }
    }

    /// The literal asserting this variable.
    #[inline]
    pub fn positive(self) -> Lit {
        self.lit(true)
    }

    /// The literal asserting the negation of this variable.
    #[inline]
    pub fn negative(self) -> Lit {
        self.lit(false)
    }
}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "v{}", self.index)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A variable together with the value it asserts.
///
/// A cube describes a state by one literal per assigned variable, and the
/// blocking clause excluding that state disjoins the negations of those
/// literals. A positive literal asserts its variable, a negative literal
/// asserts the variable's negation.
///
/// Literals order by variable first, so sorting a clause groups the two
/// polarities of each variable together.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Lit {
    var: Var,
    value: bool,
}

impl Lit {
    /// The literal asserting the variable.
    #[inline]
    pub fn positive(var: Var) -> Lit {
        var.lit(true)
    }

    /// The literal asserting the variable's negation.
    #[inline]
    pub fn negative(var: Var) -> Lit {
        var.lit(false)
    }

    /// The literal's variable.
    #[inline]
    pub fn var(self) -> Var {
        self.var
    }

    /// The value this literal asserts for its variable.
    #[inline]
    pub fn value(self) -> bool {
        self.value
    }

    /// Whether the literal asserts its variable.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.value
    }

    /// Whether the literal asserts its variable's negation.
    #[inline]
    pub fn is_negative(self) -> bool {
        !self.value
    }
}

impl ops::Not for Lit {
    type Output = Lit;

    #[inline]
    fn not(self) -> Lit {
        Lit {
            var: self.var,
            value: !self.value,
        }
    }
}

impl fmt::Debug for Lit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_negative() {
            write!(f, "!")?;
        }
        fmt::Debug::fmt(&self.var, f)
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(any(test, feature = "proptest-strategies"))]
#[doc(hidden)]
pub mod strategy {
    use super::*;

    use proptest::prelude::*;

    pub fn var(index: impl Strategy<Value = usize>) -> impl Strategy<Value = Var> {
        index.prop_map(Var::from_index)
    }

    pub fn lit(index: impl Strategy<Value = usize>) -> impl Strategy<Value = Lit> {
        (var(index), proptest::bool::ANY).prop_map(|(var, value)| var.lit(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn polarity_constructors_agree() {
        let var = Var::from_index(7);
        assert_eq!(var.positive(), var.lit(true));
        assert_eq!(var.negative(), var.lit(false));
        assert_eq!(Lit::positive(var), var.positive());
        assert_eq!(Lit::negative(var), var.negative());
        assert!(var.positive().is_positive());
        assert!(var.negative().is_negative());
    }

    proptest! {
        #[test]
        fn index_roundtrip(index in 0usize..(1 << 20)) {
            prop_assert_eq!(Var::from_index(index).index(), index);
        }

        #[test]
        fn negation_involution(index in 0usize..(1 << 20), value in proptest::bool::ANY) {
            let lit = Var::from_index(index).lit(value);
            prop_assert_eq!(!!lit, lit);
            prop_assert_eq!((!lit).var(), lit.var());
            prop_assert_ne!((!lit).value(), lit.value());
        }

        #[test]
        fn literals_order_by_variable_first(a in 0usize..64, b in 0usize..64) {
            let (a, b) = (Var::from_index(a), Var::from_index(b));
            if a < b {
                prop_assert!(a.positive() < b.negative());
                prop_assert!(a.negative() < b.positive());
            }
        }
    }
}
