//! Reference solvers without unit propagation, used as oracles for DPLL.

use std::collections::BTreeSet;

use crate::types::{to_lit, to_var, Clause, Lit, SatResult, Var};

use super::{
    assignment::Assignment,
    clause::{is_conflicting, is_satisfied},
    search::choose,
};

fn vars(formula: &[Clause]) -> Vec<Var> {
    let vars: BTreeSet<Var> = formula.iter().flatten().map(|&lit| to_var(lit)).collect();
    vars.into_iter().collect()
}

/// Tries every total assignment over the variables of `formula`.
///
/// Bit `j` of the counter sets the `j`-th smallest variable to true.
///
/// # Panics
///
/// If `formula` mentions 64 or more distinct variables.
pub fn brute_force(formula: &[Clause]) -> SatResult {
    let vars = vars(formula);
    assert!(vars.len() < u64::BITS as usize, "too many variables to enumerate");

    for bits in 0..(1u64 << vars.len()) {
        let model: Option<Vec<Lit>> = vars
            .iter()
            .enumerate()
            .map(|(j, &var)| to_lit(var, bits & (1 << j) != 0))
            .collect();
        // skips valuations that make variable 2^31 true
        let Some(model) = model else {
            continue;
        };

        let satisfied = Assignment::from_lits(&model).is_some_and(|assignment| {
            formula.iter().all(|clause| is_satisfied(clause, &assignment))
        });
        if satisfied {
            return SatResult::Sat { model };
        }
    }

    SatResult::Unsat
}

fn branch(formula: &[Clause], assignment: &mut Assignment) -> SatResult {
    if formula.iter().all(|clause| is_satisfied(clause, assignment)) {
        return SatResult::Sat {
            model: assignment.trail().to_vec(),
        };
    }

    if formula.iter().any(|clause| is_conflicting(clause, assignment)) {
        return SatResult::Unsat;
    }

    let Some(var) = choose(formula, assignment) else {
        return SatResult::Unsat;
    };

    for decision in [true, false].into_iter().filter_map(|value| to_lit(var, value)) {
        let level = assignment.decide(decision);
        let result = branch(formula, assignment);
        if result.is_sat() {
            return result;
        }
        assignment.backtrack(level);
    }

    SatResult::Unsat
}

/// Plain backtracking search over `initial`, with no propagation.
pub fn branching(formula: &[Clause], initial: &[Lit]) -> SatResult {
    match Assignment::from_lits(initial) {
        Some(mut assignment) => branch(formula, &mut assignment),
        None => SatResult::Unsat,
    }
}
