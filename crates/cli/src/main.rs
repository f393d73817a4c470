use anyhow::Context;
use clap::{Args, CommandFactory, Parser, Subcommand};
use devdns_application::use_cases::ResolveQueryUseCase;
use devdns_domain::{CliOverrides, Config, RecordStore};
use devdns_infrastructure::dns::{DnsForwarder, DnsServerHandler};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "devdns")]
#[command(version)]
#[command(about = "devdns - local DNS responder with upstream forwarding")]
struct Cli {
    /// Configuration file path [default: ~/.devdns/config.json]
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Save or print the configuration
    Config(ConfigArgs),
    /// Start the DNS server
    Run(RunArgs),
}

#[derive(Args)]
struct ConfigArgs {
    /// Write the sample configuration to the config path
    #[arg(long, conflicts_with = "print")]
    save: bool,

    /// Print the configuration as JSON
    #[arg(long)]
    print: bool,

    /// With --print, show the sample configuration instead of the loaded one
    #[arg(long, requires = "print")]
    template: bool,
}

#[derive(Args)]
struct RunArgs {
    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path.unwrap_or_else(Config::default_path);

    match cli.command {
        Command::Config(args) => run_config_command(&config_path, args),
        Command::Run(args) => run_server(&config_path, args).await,
    }
}

fn run_config_command(config_path: &Path, args: ConfigArgs) -> anyhow::Result<()> {
    if args.save {
        Config::default()
            .save(config_path)
            .context("failed to save default config")?;
        println!("Sample configuration written to {}", config_path.display());
    } else if args.print {
        let config = if args.template {
            Config::default()
        } else {
            Config::from_file(config_path).context("cannot print config")?
        };
        println!("{}", config.to_pretty_json()?);
    } else {
        let mut command = Cli::command();
        if let Some(config_command) = command.find_subcommand_mut("config") {
            config_command.print_help()?;
        }
    }
    Ok(())
}

async fn run_server(config_path: &Path, args: RunArgs) -> anyhow::Result<()> {
    let cli_overrides = CliOverrides {
        bind_address: args.bind,
        port: args.port,
        log_level: args.log_level,
    };
    let config = bootstrap::load_config(config_path, cli_overrides)?;

    bootstrap::init_logging(&config);
    info!("Starting devdns v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::config::log_config(config_path, &config);

    let records = Arc::new(RecordStore::from_config(&config));
    let mut engine = ResolveQueryUseCase::new(records);
    if config.forwarding.enabled {
        engine = engine.with_forwarding(Arc::new(DnsForwarder::from_config(&config.forwarding)));
    }

    let handler = DnsServerHandler::new(Arc::new(engine));
    server::start_dns_server(config.server.listen_addr(), handler).await?;

    info!("Server shutdown complete");
    Ok(())
}
