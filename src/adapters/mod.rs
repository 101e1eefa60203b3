// Adapters layer: transports that host the validation handler (HTTP server, serverless events).

pub mod http;
pub mod lambda;
