pub mod config;
pub mod logging;
pub mod run;

pub use config::load_config;
pub use run::{run_app, wire, Runtime};
