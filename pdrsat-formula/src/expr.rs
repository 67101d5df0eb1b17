//! Propositional formulas as expression trees.
use std::fmt;

use crate::lit::{Lit, Var};

/// A propositional formula.
///
/// Formulas are immutable values. The engine builds them from variables and
/// connectives, renames variables between the current-state and next-state
/// vocabularies, and hands them to an entailment oracle; it never rewrites a
/// formula in place.
///
/// `And` and `Or` are n-ary. The empty conjunction is the constant true
/// formula and the empty disjunction is the constant false formula, which is
/// what the [`and`](Expr::and) and [`or`](Expr::or) constructors produce for
/// empty inputs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A constant truth value.
    Const(bool),
    /// A variable.
    Var(Var),
    /// Negation.
    Not(Box<Expr>),
    /// N-ary conjunction.
    And(Vec<Expr>),
    /// N-ary disjunction.
    Or(Vec<Expr>),
    /// Exclusive or.
    Xor(Box<Expr>, Box<Expr>),
    /// Equivalence.
    Eq(Box<Expr>, Box<Expr>),
    /// Implication.
    Implies(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// The constant true formula.
    pub const TRUE: Expr = Expr::Const(true);

    /// The constant false formula.
    pub const FALSE: Expr = Expr::Const(false);

    /// A formula consisting of a single variable.
    pub fn var(var: Var) -> Expr {
        Expr::Var(var)
    }

    /// A formula consisting of a single literal.
    pub fn lit(lit: Lit) -> Expr {
        if lit.is_positive() {
            Expr::Var(lit.var())
        } else {
            Expr::Not(Box::new(Expr::Var(lit.var())))
        }
    }

    /// The negation of a formula.
    pub fn not(expr: Expr) -> Expr {
        Expr::Not(Box::new(expr))
    }

    /// The conjunction of the given formulas.
    ///
    /// An empty input produces the constant true formula and a singleton input
    /// is returned as is.
    pub fn and(exprs: impl IntoIterator<Item = Expr>) -> Expr {
        let mut exprs: Vec<Expr> = exprs.into_iter().collect();
        match exprs.len() {
            0 => Expr::TRUE,
            1 => exprs.pop().unwrap(),
            _ => Expr::And(exprs),
        }
    }

    /// The disjunction of the given formulas.
    ///
    /// An empty input produces the constant false formula and a singleton
    /// input is returned as is.
    pub fn or(exprs: impl IntoIterator<Item = Expr>) -> Expr {
        let mut exprs: Vec<Expr> = exprs.into_iter().collect();
        match exprs.len() {
            0 => Expr::FALSE,
            1 => exprs.pop().unwrap(),
            _ => Expr::Or(exprs),
        }
    }

    /// The exclusive or of two formulas.
    pub fn xor(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Xor(Box::new(lhs), Box::new(rhs))
    }

    /// The equivalence of two formulas.
    pub fn eq(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Eq(Box::new(lhs), Box::new(rhs))
    }

    /// The implication from one formula to another.
    pub fn implies(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Implies(Box::new(lhs), Box::new(rhs))
    }

    /// The free variables of the formula, sorted and free of duplicates.
    pub fn vars(&self) -> Vec<Var> {
        let mut vars = Vec::new();
        self.collect_vars(&mut vars);
        vars.sort();
        vars.dedup();
        vars
    }

    fn collect_vars(&self, out: &mut Vec<Var>) {
        match self {
            Expr::Const(_) => (),
            Expr::Var(var) => out.push(*var),
            Expr::Not(expr) => expr.collect_vars(out),
            Expr::And(exprs) | Expr::Or(exprs) => {
                for expr in exprs {
                    expr.collect_vars(out);
                }
            }
            Expr::Xor(lhs, rhs) | Expr::Eq(lhs, rhs) | Expr::Implies(lhs, rhs) => {
                lhs.collect_vars(out);
                rhs.collect_vars(out);
            }
        }
    }

    /// Simultaneous syntactic substitution of variables by variables.
    ///
    /// Every variable `v` with `map(v) == Some(w)` is replaced by `w`; all
    /// other variables are kept. As only variables are substituted for
    /// variables the substitution is trivially capture-free, and because all
    /// replacements are decided against the input formula it is simultaneous:
    /// `substitute` with a map swapping two variables really swaps them.
    pub fn substitute(&self, map: impl Fn(Var) -> Option<Var>) -> Expr {
        self.substitute_inner(&map)
    }

    fn substitute_inner(&self, map: &impl Fn(Var) -> Option<Var>) -> Expr {
        match self {
            Expr::Const(value) => Expr::Const(*value),
            Expr::Var(var) => Expr::Var(map(*var).unwrap_or(*var)),
            Expr::Not(expr) => Expr::Not(Box::new(expr.substitute_inner(map))),
            Expr::And(exprs) => {
                Expr::And(exprs.iter().map(|expr| expr.substitute_inner(map)).collect())
            }
            Expr::Or(exprs) => {
                Expr::Or(exprs.iter().map(|expr| expr.substitute_inner(map)).collect())
            }
            Expr::Xor(lhs, rhs) => Expr::Xor(
                Box::new(lhs.substitute_inner(map)),
                Box::new(rhs.substitute_inner(map)),
            ),
            Expr::Eq(lhs, rhs) => Expr::Eq(
                Box::new(lhs.substitute_inner(map)),
                Box::new(rhs.substitute_inner(map)),
            ),
            Expr::Implies(lhs, rhs) => Expr::Implies(
                Box::new(lhs.substitute_inner(map)),
                Box::new(rhs.substitute_inner(map)),
            ),
        }
    }

    /// Evaluate the formula under a total assignment.
    pub fn eval(&self, assignment: &impl Fn(Var) -> bool) -> bool {
        match self {
            Expr::Const(value) => *value,
            Expr::Var(var) => assignment(*var),
            Expr::Not(expr) => !expr.eval(assignment),
            Expr::And(exprs) => exprs.iter().all(|expr| expr.eval(assignment)),
            Expr::Or(exprs) => exprs.iter().any(|expr| expr.eval(assignment)),
            Expr::Xor(lhs, rhs) => lhs.eval(assignment) ^ rhs.eval(assignment),
            Expr::Eq(lhs, rhs) => lhs.eval(assignment) == rhs.eval(assignment),
            Expr::Implies(lhs, rhs) => !lhs.eval(assignment) || rhs.eval(assignment),
        }
    }
}

impl From<Var> for Expr {
    fn from(var: Var) -> Expr {
        Expr::Var(var)
    }
}

impl From<Lit> for Expr {
    fn from(lit: Lit) -> Expr {
        Expr::lit(lit)
    }
}

fn fmt_nary(f: &mut fmt::Formatter, exprs: &[Expr], op: &str, empty: &str) -> fmt::Result {
    match exprs {
        [] => write!(f, "{}", empty),
        [expr] => fmt::Debug::fmt(expr, f),
        _ => {
            write!(f, "(")?;
            for (i, expr) in exprs.iter().enumerate() {
                if i > 0 {
                    write!(f, " {} ", op)?;
                }
                fmt::Debug::fmt(expr, f)?;
            }
            write!(f, ")")
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Const(true) => write!(f, "true"),
            Expr::Const(false) => write!(f, "false"),
            Expr::Var(var) => fmt::Debug::fmt(var, f),
            Expr::Not(expr) => {
                write!(f, "!")?;
                fmt::Debug::fmt(expr, f)
            }
            Expr::And(exprs) => fmt_nary(f, exprs, "&", "true"),
            Expr::Or(exprs) => fmt_nary(f, exprs, "|", "false"),
            Expr::Xor(lhs, rhs) => write!(f, "({:?} ^ {:?})", lhs, rhs),
            Expr::Eq(lhs, rhs) => write!(f, "({:?} == {:?})", lhs, rhs),
            Expr::Implies(lhs, rhs) => write!(f, "({:?} -> {:?})", lhs, rhs),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(any(test, feature = "proptest-strategies"))]
#[doc(hidden)]
pub mod strategy {
    use super::*;

    use proptest::prelude::*;

    use crate::lit::strategy::var;

    /// Random formulas over the variables with index below `vars`.
    pub fn expr(vars: usize) -> impl Strategy<Value = Expr> {
        let leaf = prop_oneof![
            1 => Just(Expr::TRUE),
            1 => Just(Expr::FALSE),
            4 => var(0..vars).prop_map(Expr::var),
        ];
        leaf.prop_recursive(5, 48, 4, |inner| {
            prop_oneof![
                inner.clone().prop_map(Expr::not),
                proptest::collection::vec(inner.clone(), 0..4).prop_map(Expr::and),
                proptest::collection::vec(inner.clone(), 0..4).prop_map(Expr::or),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::xor(a, b)),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::eq(a, b)),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::implies(a, b)),
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn v(index: usize) -> Var {
        Var::from_index(index)
    }

    #[test]
    fn empty_connectives_are_constants() {
        assert_eq!(Expr::and(vec![]), Expr::TRUE);
        assert_eq!(Expr::or(vec![]), Expr::FALSE);
        assert_eq!(Expr::and(vec![Expr::var(v(0))]), Expr::var(v(0)));
    }

    #[test]
    fn vars_are_sorted_and_deduplicated() {
        let expr = Expr::and(vec![
            Expr::var(v(3)),
            Expr::xor(Expr::var(v(1)), Expr::var(v(3))),
            Expr::not(Expr::var(v(0))),
        ]);
        assert_eq!(expr.vars(), vec![v(0), v(1), v(3)]);
    }

    #[test]
    fn substitution_is_simultaneous() {
        // swapping v0 and v1 must not turn (v0 -> v1) into (v1 -> v1)
        let expr = Expr::implies(Expr::var(v(0)), Expr::var(v(1)));
        let swapped = expr.substitute(|var| match var.index() {
            0 => Some(v(1)),
            1 => Some(v(0)),
            _ => None,
        });
        assert_eq!(
            swapped,
            Expr::implies(Expr::var(v(1)), Expr::var(v(0)))
        );
    }

    #[test]
    fn eval_connectives() {
        let assignment = |var: Var| var.index() == 0;
        assert!(Expr::or(vec![Expr::var(v(0)), Expr::var(v(1))]).eval(&assignment));
        assert!(!Expr::and(vec![Expr::var(v(0)), Expr::var(v(1))]).eval(&assignment));
        assert!(Expr::xor(Expr::var(v(0)), Expr::var(v(1))).eval(&assignment));
        assert!(Expr::eq(Expr::var(v(1)), Expr::FALSE).eval(&assignment));
        assert!(Expr::implies(Expr::var(v(1)), Expr::var(v(0))).eval(&assignment));
    }

    proptest! {
        #[test]
        fn substitution_roundtrip(expr in strategy::expr(8)) {
            // rename into a shifted vocabulary and back
            let shifted = expr.substitute(|var| Some(Var::from_index(var.index() + 8)));
            let back = shifted.substitute(|var| Some(Var::from_index(var.index() - 8)));
            prop_assert_eq!(back, expr);
        }

        #[test]
        fn substitution_preserves_eval(expr in strategy::expr(8)) {
            // renaming to a disjoint vocabulary preserves the truth table
            let shifted = expr.substitute(|var| Some(Var::from_index(var.index() + 8)));
            for bits in 0u32..256 {
                let original = expr.eval(&|var: Var| bits & (1 << var.index()) != 0);
                let renamed = shifted.eval(&|var: Var| bits & (1 << (var.index() - 8)) != 0);
                prop_assert_eq!(original, renamed);
            }
        }
    }
}
