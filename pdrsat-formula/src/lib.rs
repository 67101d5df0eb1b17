//! Propositional formula data types used by the pdrsat safety verifier.

/// Shortcut for tests
#[cfg(any(test, feature = "internal-testing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! var {
    ($x:expr) => {
        $crate::lit::Var::from_index($x)
    };
}

/// Shortcut for tests
#[cfg(any(test, feature = "internal-testing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! lit {
    ( ! $x:expr ) => {
        $crate::lit::Lit::negative($crate::lit::Var::from_index($x))
    };
    ( $x:expr ) => {
        $crate::lit::Lit::positive($crate::lit::Var::from_index($x))
    };
}

/// Shortcut for tests
#[cfg(any(test, feature = "internal-testing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! cube {
    ( $( $lit:expr ),* $(,)? ) => {
        $crate::cube::Cube::from_lits(vec![ $( $lit ),* ])
    };
}

/// Shortcut for tests
#[cfg(any(test, feature = "internal-testing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! clause {
    ( $( $lit:expr ),* $(,)? ) => {
        $crate::cube::Clause::from_lits(vec![ $( $lit ),* ])
    };
}

pub mod cube;
pub mod expr;
pub mod lit;

pub use cube::{Clause, Cube};
pub use expr::Expr;
pub use lit::{Lit, Var};
