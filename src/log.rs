//! Targets passed to the [log] macros, so output can be filtered with
//! e.g. `RUST_LOG=search=trace`.

pub mod targets {
    /// Unit propagation.
    pub const PROPAGATION: &str = "propagation";

    /// Decisions and backtracking.
    pub const SEARCH: &str = "search";

    /// Solve summaries.
    pub const SOLVE: &str = "solve";

    /// Reading formulas and writing results.
    pub const IO: &str = "io";
}
