use std::{path::PathBuf, process::ExitCode, thread};

use clap::{Parser, ValueEnum};
use dpll_sat::{
    io,
    solver::{self, baseline, Solver},
    types::{Formula, SatResult},
};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum Method {
    #[default]
    Dpll,
    Branching,
    BruteForce,
}

/// Decides satisfiability of a DIMACS CNF formula.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Input formula in DIMACS CNF format.
    input: PathBuf,

    #[arg(long, value_enum, default_value_t)]
    method: Method,

    /// Check the model against the formula before reporting it.
    #[arg(long)]
    verify: bool,

    /// Stack size of the solving thread in MiB; search depth grows with
    /// the number of variables.
    #[arg(long, default_value_t = 256)]
    stack_size: usize,
}

fn run(method: Method, formula: Formula) -> SatResult {
    match method {
        Method::Dpll => Solver::new(formula).solve(),
        Method::Branching => baseline::branching(&formula, &[]),
        Method::BruteForce => baseline::brute_force(&formula),
    }
}

fn stack_bytes(mib: usize) -> Option<usize> {
    mib.checked_mul(1 << 20)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let formula = match io::read_file(&args.input) {
        Ok(formula) => formula,
        Err(err) => {
            eprintln!("c {}: {err}", args.input.display());
            return ExitCode::FAILURE;
        }
    };

    let Some(stack_size) = stack_bytes(args.stack_size) else {
        eprintln!("c stack size of {} MiB is too large", args.stack_size);
        return ExitCode::FAILURE;
    };

    let reference = args.verify.then(|| formula.clone());
    let method = args.method;
    let worker = thread::Builder::new()
        .name("solver".into())
        .stack_size(stack_size)
        .spawn(move || run(method, formula));
    let result = match worker.map(|handle| handle.join()) {
        Ok(Ok(result)) => result,
        Ok(Err(_)) => return ExitCode::FAILURE,
        Err(err) => {
            eprintln!("c failed to start solver thread: {err}");
            return ExitCode::FAILURE;
        }
    };

    if reference.is_some_and(|formula| !solver::verify(&formula, &result)) {
        eprintln!("c model does not satisfy the formula");
        return ExitCode::FAILURE;
    }

    if let Err(err) = io::write_result(&mut std::io::stdout(), &result) {
        eprintln!("c {err}");
        return ExitCode::FAILURE;
    }

    // exit codes of the SAT competition
    match result {
        SatResult::Sat { .. } => ExitCode::from(10),
        SatResult::Unsat => ExitCode::from(20),
    }
}
