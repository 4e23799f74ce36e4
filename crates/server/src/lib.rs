pub mod routes;
pub mod startup;
pub mod errors;
pub mod openapi;

pub use startup::{build_state, load_config, run, run_with_config, serve};
