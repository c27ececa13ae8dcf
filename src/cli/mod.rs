pub mod cli;
pub mod display_results;
pub mod run;
pub mod run_lookup;
