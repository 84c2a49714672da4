use clap::{ArgAction, Parser};
use std::net::IpAddr;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Prometheus exporter for the Summer of Making shop", long_about = None)]
pub struct Cli {
    /// The port to run the Prometheus exporter on
    #[arg(long, default_value_t = 9040)]
    pub port: u16,

    /// Log whenever data is scraped (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// How often to fetch data, in seconds
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,

    /// Address the metrics listener binds to
    #[arg(long, default_value = "0.0.0.0")]
    pub bind_address: IpAddr,
}
