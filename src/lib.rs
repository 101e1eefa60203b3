pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::{build_router, run_server};
pub use config::ServiceConfig;
pub use domain::cpf::is_valid_cpf;
pub use utils::error::{Result, ServiceError};
