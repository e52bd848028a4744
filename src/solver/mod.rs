pub mod assignment;
pub mod baseline;
pub mod clause;
pub mod propagate;
pub mod search;

use crate::{
    log::targets,
    types::{Clause, Formula, Lit, SatResult},
};

use self::{
    assignment::Assignment,
    clause::is_satisfied,
    search::{search, Stats},
};

pub struct Solver {
    formula: Formula,
    initial: Vec<Lit>,
    stats: Stats,
}

impl Solver {
    pub fn new(formula: Formula) -> Self {
        Self::with_assignment(formula, vec![])
    }

    /// A solver that only looks for models extending `initial`.
    pub fn with_assignment(formula: Formula, initial: Vec<Lit>) -> Self {
        Solver {
            formula,
            initial,
            stats: Stats::default(),
        }
    }

    pub fn solve(&mut self) -> SatResult {
        let Some(mut assignment) = Assignment::from_lits(&self.initial) else {
            log::info!(target: targets::SOLVE, "Initial assignment is contradictory");
            return SatResult::Unsat;
        };

        let result = search(&self.formula, &mut assignment, &mut self.stats);

        let Stats {
            decisions,
            propagations,
            conflicts,
        } = self.stats;
        log::info!(
            target: targets::SOLVE,
            "{} after {decisions} decisions, {propagations} propagations, {conflicts} conflicts",
            if result.is_sat() { "SAT" } else { "UNSAT" }
        );

        result
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }
}

/// Decides `formula` under the partial assignment `initial`.
pub fn solve(formula: Formula, initial: &[Lit]) -> SatResult {
    Solver::with_assignment(formula, initial.to_vec()).solve()
}

/// Checks that a `Sat` model is consistent and satisfies every clause.
/// An `Unsat` result carries nothing to check.
pub fn verify(formula: &[Clause], result: &SatResult) -> bool {
    match result {
        SatResult::Sat { model } => match Assignment::from_lits(model) {
            Some(assignment) => formula
                .iter()
                .all(|clause| is_satisfied(clause, &assignment)),
            None => false,
        },
        SatResult::Unsat => true,
    }
}
