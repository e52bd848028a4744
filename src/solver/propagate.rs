use crate::{
    log::targets,
    types::{Clause, Formula, Lit},
};

use super::{
    assignment::Assignment,
    clause::{is_falsified_literal, is_satisfied, state, ClauseState},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Propagation {
    /// The fixpoint: no clause is satisfied, falsified literals are struck
    /// and no unit clause remains.
    Simplified(Formula),
    Conflict,
}

/// Drops satisfied clauses and strikes falsified literals from the rest.
/// Returns `None` as soon as a clause loses all of its literals.
fn strike(formula: &[Clause], assignment: &Assignment) -> Option<Formula> {
    let mut simplified = Vec::with_capacity(formula.len());
    for clause in formula {
        if is_satisfied(clause, assignment) {
            continue;
        }
        let rest: Clause = clause
            .iter()
            .copied()
            .filter(|&lit| !is_falsified_literal(lit, assignment))
            .collect();
        if rest.is_empty() {
            return None;
        }
        simplified.push(rest);
    }
    Some(simplified)
}

fn unit_lits(formula: &[Clause], assignment: &Assignment) -> Vec<Lit> {
    formula
        .iter()
        .filter_map(|clause| match state(clause, assignment) {
            ClauseState::Unit(lit) => Some(lit),
            _ => None,
        })
        .collect()
}

/// Forces unit literals into `assignment` until none remain.
///
/// On conflict `assignment` is left exactly as it was passed in.
pub fn propagate(formula: &[Clause], assignment: &mut Assignment) -> Propagation {
    let mark = assignment.len();
    let mut current = formula.to_vec();

    loop {
        let Some(simplified) = strike(&current, assignment) else {
            log::debug!(target: targets::PROPAGATION, "Empty clause after {} forced literals", assignment.len() - mark);
            assignment.undo_to(mark);
            return Propagation::Conflict;
        };

        let units = unit_lits(&simplified, assignment);
        if units.is_empty() {
            return Propagation::Simplified(simplified);
        }

        for lit in units {
            match assignment.eval(lit) {
                Some(true) => (),
                Some(false) => {
                    log::debug!(target: targets::PROPAGATION, "Forced {lit} against {}", -lit);
                    assignment.undo_to(mark);
                    return Propagation::Conflict;
                }
                None => {
                    log::trace!(target: targets::PROPAGATION, "Forced {lit}");
                    assignment.push(lit);
                }
            }
        }

        current = simplified;
    }
}

/// Unit propagation from the empty assignment.
pub fn simplify(formula: &[Clause]) -> Propagation {
    propagate(formula, &mut Assignment::new())
}
