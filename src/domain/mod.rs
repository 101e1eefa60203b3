// Domain layer: the CPF checksum and the verdict model. No transport or runtime dependencies.

pub mod cpf;
pub mod model;
