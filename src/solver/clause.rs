use crate::types::Lit;

use super::assignment::Assignment;

pub fn is_satisfied(clause: &[Lit], assignment: &Assignment) -> bool {
    clause.iter().any(|&lit| assignment.contains(lit))
}

pub fn is_falsified_literal(lit: Lit, assignment: &Assignment) -> bool {
    assignment.eval(lit) == Some(false)
}

/// Every literal is falsified, so no extension of `assignment` satisfies the clause.
/// Holds for the empty clause under any assignment.
pub fn is_conflicting(clause: &[Lit], assignment: &Assignment) -> bool {
    clause
        .iter()
        .all(|&lit| is_falsified_literal(lit, assignment))
}

#[derive(Debug, PartialEq, Eq)]
pub enum ClauseState {
    Satisfied,
    Conflicting,
    Unit(Lit),
    Open,
}

/// Classifies `clause` under `assignment` in a single scan.
pub fn state(clause: &[Lit], assignment: &Assignment) -> ClauseState {
    let mut open = None;
    for &lit in clause {
        match assignment.eval(lit) {
            Some(true) => return ClauseState::Satisfied,
            Some(false) => (),
            // a repeated literal is still a single choice
            None if open.is_none() || open == Some(lit) => open = Some(lit),
            None => return ClauseState::Open,
        }
    }
    match open {
        Some(lit) => ClauseState::Unit(lit),
        None => ClauseState::Conflicting,
    }
}
