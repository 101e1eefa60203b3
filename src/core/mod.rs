pub mod handler;

pub use crate::domain::model::{ValidationOutcome, ValidationResponse};
pub use handler::{extract_cpf, handle_validation};
