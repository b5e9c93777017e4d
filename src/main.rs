use anyhow::Result;
use std::io::BufRead;
use std::path::PathBuf;
use vhostroute::configuration::Configuration;
use vhostroute::router::Router;
#[macro_use]
extern crate log;
use clap::Parser;
use vhostroute::args::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or(PathBuf::from("config.yaml"));

    let conf = Configuration::parse(config_path)?;
    env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .format_target(false)
        .parse_filters(conf.log_level.clone().as_str())
        .init();
    info!("Loaded {} domain rules", conf.rules.len());
    let router = Router::try_from(conf)?;

    let hosts = if cli.hosts.is_empty() {
        std::io::stdin()
            .lock()
            .lines()
            .collect::<std::io::Result<Vec<_>>>()?
    } else {
        cli.hosts
    };

    for host in hosts.iter().map(|h| h.trim()).filter(|h| !h.is_empty()) {
        match router.route(host).await {
            Some(route) if route.fallback => println!("{} -> {} (default)", host, route.cluster),
            Some(route) => println!("{} -> {}", host, route.cluster),
            None => {
                warn!("No route found for {}", host);
                println!("{} -> no match", host);
            }
        }
    }

    Ok(())
}
