//! Property tests for the DPLL solver, with brute-force enumeration as the oracle.

use dpll_sat::{
    solver::{
        self,
        assignment::Assignment,
        baseline::{branching, brute_force},
        propagate::{propagate, Propagation},
    },
    types::{Clause, Formula, Lit},
};
use proptest::prelude::*;

fn lit(max_var: Lit) -> impl Strategy<Value = Lit> {
    (1..=max_var, any::<bool>()).prop_map(|(var, neg)| if neg { -var } else { var })
}

fn formula(max_var: Lit, max_clauses: usize) -> impl Strategy<Value = Formula> {
    prop::collection::vec(prop::collection::vec(lit(max_var), 1..=4), 0..=max_clauses)
}

fn normalized(formula: &[Clause]) -> Vec<Clause> {
    let mut clauses: Vec<Clause> = formula
        .iter()
        .map(|clause| {
            let mut clause = clause.clone();
            clause.sort();
            clause
        })
        .collect();
    clauses.sort();
    clauses
}

fn sorted(lits: &[Lit]) -> Vec<Lit> {
    let mut lits = lits.to_vec();
    lits.sort();
    lits
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every clause of the input has a literal in the returned model,
    /// and the model never holds a literal with its negation.
    #[test]
    fn models_are_sound(f in formula(8, 30)) {
        let result = solver::solve(f.clone(), &[]);
        if let Some(model) = result.model() {
            for clause in &f {
                prop_assert!(clause.iter().any(|lit| model.contains(lit)));
            }
            for lit in model {
                prop_assert!(!model.contains(&-lit));
            }
        }
    }

    #[test]
    fn agrees_with_truth_table(f in formula(12, 60)) {
        let expected = brute_force(&f).is_sat();
        prop_assert_eq!(solver::solve(f.clone(), &[]).is_sat(), expected);
        prop_assert_eq!(branching(&f, &[]).is_sat(), expected);
    }

    #[test]
    fn propagation_is_idempotent(f in formula(8, 30)) {
        let mut ass = Assignment::new();
        if let Propagation::Simplified(once) = propagate(&f, &mut ass) {
            let trail = ass.trail().to_vec();
            let twice = propagate(&once, &mut ass);
            prop_assert_eq!(twice, Propagation::Simplified(once));
            prop_assert_eq!(ass.trail(), &trail[..]);
        }
    }

    #[test]
    fn propagation_ignores_clause_order(f in formula(8, 30)) {
        let mut reversed = f.clone();
        reversed.reverse();

        let mut ass = Assignment::new();
        let mut ass_rev = Assignment::new();
        match (propagate(&f, &mut ass), propagate(&reversed, &mut ass_rev)) {
            (Propagation::Simplified(a), Propagation::Simplified(b)) => {
                prop_assert_eq!(normalized(&a), normalized(&b));
                prop_assert_eq!(sorted(ass.trail()), sorted(ass_rev.trail()));
            }
            (Propagation::Conflict, Propagation::Conflict) => (),
            _ => prop_assert!(false, "propagation outcome depends on clause order"),
        }
    }

    #[test]
    fn empty_clause_is_unsat(mut f in formula(8, 20), at in any::<prop::sample::Index>()) {
        let position = at.index(f.len() + 1);
        f.insert(position, vec![]);
        prop_assert!(!solver::solve(f, &[]).is_sat());
    }

    /// Models found under an initial assignment extend it.
    #[test]
    fn models_extend_initial(f in formula(8, 20), initial in prop::collection::vec(lit(8), 0..4)) {
        let Some(start) = Assignment::from_lits(&initial) else {
            prop_assert!(!solver::solve(f, &initial).is_sat());
            return Ok(());
        };
        let result = solver::solve(f.clone(), &initial);
        prop_assert!(solver::verify(&f, &result));
        if let Some(model) = result.model() {
            for lit in start.trail() {
                prop_assert!(model.contains(lit));
            }
        }
    }
}
