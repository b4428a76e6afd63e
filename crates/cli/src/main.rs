use clap::Parser;
use mockdns_domain::CliOverrides;
use mockdns_infrastructure::dns::MockDnsHandler;
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "mockdns")]
#[command(version)]
#[command(about = "Authoritative DNS responder serving records from a JSON document")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Listen address
    #[arg(short = 'a', long = "addr", visible_alias = "bind")]
    addr: Option<String>,

    /// DNS port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// JSON record document
    #[arg(short = 'd', long = "data", value_name = "FILE")]
    data: Option<String>,

    /// Default TTL for records that do not set one
    #[arg(short = 't', long)]
    ttl: Option<String>,

    /// resolv.conf-style file listing upstream name servers
    #[arg(short = 'r', long = "resolv", value_name = "FILE")]
    resolv: Option<String>,

    /// Forward queries for unknown domains upstream
    #[arg(long, value_name = "BOOL")]
    proxy: Option<bool>,

    /// Log one line per answered question
    #[arg(short = 'v', long, value_name = "BOOL")]
    verbose: Option<bool>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            dns_port: self.port,
            bind_address: self.addr.clone(),
            data_file: self.data.clone(),
            default_ttl: self.ttl.clone(),
            resolv_conf: self.resolv.clone(),
            proxy: self.proxy,
            verbose: self.verbose,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config);

    info!("Starting mockdns v{}", env!("CARGO_PKG_VERSION"));

    // Everything fatal happens before any socket is bound.
    let store = bootstrap::load_zone(&config).await?;
    let upstreams = bootstrap::load_upstreams(&config).await?;
    let dns_services = di::DnsServices::new(&config, store, upstreams);

    let listen_addr: SocketAddr = config
        .server
        .listen_addr()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid listen address {}: {}", config.server.listen_addr(), e))?;

    let shutdown = CancellationToken::new();
    server::spawn_signal_handler(shutdown.clone());

    let handler = MockDnsHandler::new(dns_services.handler_use_case);
    server::start_dns_server(listen_addr, handler, shutdown).await?;

    info!("Server shutdown complete");
    Ok(())
}
