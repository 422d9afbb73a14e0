mod outcome;
mod run_lookup;

pub use outcome::LookupOutcome;
pub use run_lookup::LookupUseCase;
