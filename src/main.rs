use clap::Parser;
use cpf_validator::config::{ConfigOverrides, ServiceConfig};
use cpf_validator::utils::logger;
use cpf_validator::ServiceError;

#[derive(Debug, Parser)]
#[command(name = "cpf-validator")]
#[command(about = "HTTP service that validates Brazilian CPF checksums")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Address to bind (overrides the config file)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Path prefix placed before /validate-cpf, e.g. "api"
    #[arg(long)]
    route_prefix: Option<String>,

    /// Emit JSON log lines
    #[arg(long)]
    json_logs: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(args: &Args) -> cpf_validator::Result<ServiceConfig> {
    let overrides = ConfigOverrides {
        host: args.host.clone(),
        port: args.port,
        route_prefix: args.route_prefix.clone(),
        json_logs: args.json_logs,
    };

    ServiceConfig::load(args.config.as_deref(), overrides)
}

fn exit_with(e: &ServiceError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    logger::init_server_logger(&config.logging.level, config.logging.format, args.verbose);

    tracing::info!("Starting cpf-validator");
    if args.verbose {
        tracing::debug!("Service config: {:?}", config);
    }

    if let Err(e) = cpf_validator::run_server(&config.server).await {
        tracing::error!(
            "Server failed: {} (Category: {:?})",
            e,
            e.category()
        );
        exit_with(&e);
    }
}
