pub type Lit = i32;

pub type Var = usize;

pub fn to_var(lit: Lit) -> Var {
    debug_assert_ne!(lit, 0);
    lit.unsigned_abs() as Var
}

/// The literal giving `var` the truth value `value`, if it fits in a `Lit`.
/// Variable 2^31 only has its negative literal, `Lit::MIN`.
pub fn to_lit(var: Var, value: bool) -> Option<Lit> {
    match Lit::try_from(var) {
        Ok(lit) => Some(if value { lit } else { -lit }),
        Err(_) => (!value && var == Lit::MIN.unsigned_abs() as Var).then_some(Lit::MIN),
    }
}

pub type Clause = Vec<Lit>;

/// A conjunction of clauses. Clause order carries no meaning but decides
/// which model the search finds first.
pub type Formula = Vec<Clause>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SatResult {
    Sat { model: Vec<Lit> },
    Unsat,
}

impl SatResult {
    pub fn is_sat(&self) -> bool {
        matches!(self, SatResult::Sat { .. })
    }

    pub fn model(&self) -> Option<&[Lit]> {
        match self {
            SatResult::Sat { model } => Some(model),
            SatResult::Unsat => None,
        }
    }
}

/// Largest variable mentioned by `formula`, 0 for a formula without literals.
pub fn max_var(formula: &[Clause]) -> Var {
    formula.iter().flatten().map(|&lit| to_var(lit)).max().unwrap_or(0)
}
