//! A DPLL decision procedure for CNF formulas.
//!
//! ```
//! use dpll_sat::{solver::solve, types::SatResult};
//!
//! let result = solve(vec![vec![1], vec![-1, 2]], &[]);
//! assert_eq!(result, SatResult::Sat { model: vec![1, 2] });
//! ```

pub mod error;
pub mod io;
pub mod log;
pub mod solver;
pub mod types;
