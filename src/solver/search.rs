use crate::{
    log::targets,
    types::{to_lit, to_var, Clause, SatResult, Var},
};

use super::{
    assignment::Assignment,
    clause::{is_conflicting, is_satisfied},
    propagate::{propagate, Propagation},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub decisions: usize,
    pub propagations: usize,
    pub conflicts: usize,
}

/// The smallest unassigned variable occurring in `formula`.
pub fn choose(formula: &[Clause], assignment: &Assignment) -> Option<Var> {
    formula
        .iter()
        .flatten()
        .map(|&lit| to_var(lit))
        .filter(|&var| !assignment.is_assigned(var))
        .min()
}

/// One DPLL node: propagate, stop on a verdict, otherwise branch true-first.
///
/// Literals added below this node are removed again before an `Unsat` is
/// returned, so the caller sees `assignment` unchanged in that case.
/// Recursion depth grows with the number of branching variables.
pub fn search(formula: &[Clause], assignment: &mut Assignment, stats: &mut Stats) -> SatResult {
    let before = assignment.len();
    let formula = match propagate(formula, assignment) {
        Propagation::Conflict => {
            stats.conflicts += 1;
            return SatResult::Unsat;
        }
        Propagation::Simplified(formula) => formula,
    };
    stats.propagations += assignment.len() - before;

    if formula.iter().all(|clause| is_satisfied(clause, assignment)) {
        return SatResult::Sat {
            model: assignment.trail().to_vec(),
        };
    }

    if formula.iter().any(|clause| is_conflicting(clause, assignment)) {
        stats.conflicts += 1;
        assignment.undo_to(before);
        return SatResult::Unsat;
    }

    let Some(var) = choose(&formula, assignment) else {
        assignment.undo_to(before);
        return SatResult::Unsat;
    };

    for decision in [true, false].into_iter().filter_map(|value| to_lit(var, value)) {
        stats.decisions += 1;
        let level = assignment.decide(decision);
        log::trace!(target: targets::SEARCH, "Decided {decision} at level {level}");

        let result = search(&formula, assignment, stats);
        if result.is_sat() {
            return result;
        }

        log::debug!(target: targets::SEARCH, "Backtracking from level {level}");
        assignment.backtrack(level);
    }

    assignment.undo_to(before);
    SatResult::Unsat
}

#[cfg(test)]
mod tests {
    use super::{choose, search, Stats};
    use crate::{solver::assignment::Assignment, types::SatResult};

    #[test]
    fn choose_smallest_open_var() {
        let ass = Assignment::from_lits(&[2]).unwrap();
        assert_eq!(choose(&[vec![5, -2], vec![-3, 2]], &ass), Some(3));
        assert_eq!(choose(&[vec![2]], &ass), None);
        assert_eq!(choose(&[], &ass), None);
    }

    #[test]
    fn branches_true_first() {
        let mut ass = Assignment::new();
        let mut stats = Stats::default();
        let result = search(&[vec![1, 2], vec![-1, 3]], &mut ass, &mut stats);
        assert_eq!(result, SatResult::Sat { model: vec![1, 3] });
        assert_eq!(stats.decisions, 1);
        assert_eq!(stats.propagations, 1);
        assert_eq!(stats.conflicts, 0);
    }

    #[test]
    fn falls_back_to_false_branch() {
        let mut ass = Assignment::new();
        let mut stats = Stats::default();
        let result = search(&[vec![-1, 2], vec![-1, -2], vec![1, 3]], &mut ass, &mut stats);
        assert_eq!(result, SatResult::Sat { model: vec![-1, 3] });
        assert_eq!(stats.decisions, 2);
        assert_eq!(stats.conflicts, 1);
    }

    #[test]
    fn variable_without_positive_literal() {
        let mut ass = Assignment::new();
        let mut stats = Stats::default();
        let result = search(&[vec![i32::MIN, i32::MIN]], &mut ass, &mut stats);
        assert_eq!(result, SatResult::Sat { model: vec![i32::MIN] });
    }

    #[test]
    fn unsat_leaves_assignment_untouched() {
        let mut ass = Assignment::from_lits(&[4]).unwrap();
        let mut stats = Stats::default();
        let formula = vec![vec![1, -2], vec![-1, 2], vec![-1, -2], vec![1, 2]];
        assert_eq!(search(&formula, &mut ass, &mut stats), SatResult::Unsat);
        assert_eq!(ass.trail(), &[4]);
        assert_eq!(ass.last_level(), 0);
    }
}
