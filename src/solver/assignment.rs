use std::collections::HashMap;

use crate::types::{to_var, Lit, Var};

/// A partial valuation kept as a trail of literals, split into decision levels.
///
/// Level 0 holds the literals given up front and everything forced by them.
/// Each decision opens a new level; backtracking drops whole levels.
/// Values are keyed by variable, so memory follows the number of assigned
/// variables rather than the largest variable number.
#[derive(Clone, Debug, Default)]
pub struct Assignment {
    values: HashMap<Var, bool>,
    trail: Vec<Lit>,
    levels: Vec<usize>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a level-0 assignment from `lits`, or `None` if they contain
    /// a literal together with its negation.
    pub fn from_lits(lits: &[Lit]) -> Option<Self> {
        let mut assignment = Self::new();
        for &lit in lits {
            match assignment.eval(lit) {
                Some(true) => (),
                Some(false) => return None,
                None => assignment.push(lit),
            }
        }
        Some(assignment)
    }

    pub fn eval(&self, lit: Lit) -> Option<bool> {
        self.values
            .get(&to_var(lit))
            .map(|&value| value == lit.is_positive())
    }

    pub fn contains(&self, lit: Lit) -> bool {
        self.eval(lit) == Some(true)
    }

    pub fn is_assigned(&self, var: Var) -> bool {
        self.values.contains_key(&var)
    }

    /// Adds `lit` at the current level. The variable must be unassigned.
    pub fn push(&mut self, lit: Lit) {
        let var = to_var(lit);
        debug_assert!(!self.is_assigned(var));
        self.values.insert(var, lit.is_positive());
        self.trail.push(lit);
    }

    /// Opens a new level with `lit` as its decision and returns that level.
    pub fn decide(&mut self, lit: Lit) -> usize {
        self.levels.push(self.trail.len());
        self.push(lit);
        self.last_level()
    }

    pub fn trail(&self) -> &[Lit] {
        &self.trail
    }

    pub fn len(&self) -> usize {
        self.trail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    pub fn last_level(&self) -> usize {
        self.levels.len()
    }

    /// Unassigns every literal pushed after the first `mark` trail entries.
    pub fn undo_to(&mut self, mark: usize) {
        while self.levels.last().is_some_and(|&start| start >= mark) {
            self.levels.pop();
        }
        for lit in self.trail.drain(mark..) {
            self.values.remove(&to_var(lit));
        }
    }

    /// Revert all changes at `level` (incl.) and above.
    pub fn backtrack(&mut self, level: usize) {
        debug_assert!(level >= 1);
        if let Some(&start) = self.levels.get(level - 1) {
            self.undo_to(start);
        }
    }
}
