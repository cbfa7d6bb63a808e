//! Outbreak CLI
//!
//! Native tooling around the dashboard:
//! - Serve the built frontend bundle
//! - Load the dashboard data once and print a summary
//! - Print the default configuration file

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};

use outbreak::config::{generate_default_config, Config, MapConfig};
use outbreak::dashboard::{DashboardData, DashboardLoader, DashboardPhase, LineChartConfig, MapView};
use outbreak::stats::{FixedPosition, HttpStatsClient, NoGeolocation, UserPosition};

#[derive(Parser)]
#[command(name = "outbreak")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "COVID-19 statistics dashboard tooling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: ~/.config/outbreak/config.toml, then ./outbreak.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the built frontend bundle
    Serve {
        /// Bundle directory containing index.html
        #[arg(long)]
        dist: Option<PathBuf>,
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Load the dashboard data once and print a summary
    Snapshot {
        /// Latitude to center on (default: configured fallback center)
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Longitude to center on
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Number of countries to list, by active cases
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Print the default config file
    DefaultConfig,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { dist, host, port } => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(dist) = dist {
                config.server.dist_dir = dist.to_string_lossy().into_owned();
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            tracing::info!("Outbreak v{}", env!("CARGO_PKG_VERSION"));
            outbreak::serve(&config.server).await?;
        }

        Commands::Snapshot {
            lat,
            lon,
            format,
            top,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let client = HttpStatsClient::new(&config.stats)?;
            let fallback = config.map.fallback_position();

            tracing::info!("Loading dashboard data from {}", client.api_base());
            let data = match lat.zip(lon) {
                Some((latitude, longitude)) => {
                    let position = FixedPosition {
                        latitude,
                        longitude,
                    };
                    DashboardLoader::new(client, position, fallback).load().await
                }
                None => DashboardLoader::new(client, NoGeolocation, fallback).load().await,
            };

            let report = SnapshotReport::new(&data, &config.map, top);
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Table => print_report(&report),
            }
        }

        Commands::DefaultConfig => {
            print!("{}", generate_default_config());
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = Config::resolve(path)?;
    outbreak::logging::init(&config.logging);
    Ok(config)
}

/// Summary of one dashboard load
#[derive(Serialize)]
struct SnapshotReport {
    phase: DashboardPhase,
    days: usize,
    latest_total: Option<u64>,
    first_day: Option<NaiveDate>,
    last_day: Option<NaiveDate>,
    center: UserPosition,
    zoom: u8,
    markers: usize,
    top_active: Vec<CountryRow>,
}

#[derive(Serialize)]
struct CountryRow {
    country: String,
    active: u64,
    recovered: u64,
    deaths: u64,
}

impl SnapshotReport {
    fn new(data: &DashboardData, map_config: &MapConfig, top: usize) -> Self {
        let chart = LineChartConfig::from_series(&data.series);
        let map = MapView::build(data.position, &data.countries, map_config);

        let mut by_active: Vec<_> = data.countries.iter().collect();
        by_active.sort_by(|a, b| b.active_cases.cmp(&a.active_cases));

        Self {
            phase: DashboardPhase::of(Some(data)),
            days: chart.labels.len(),
            latest_total: data.series.latest(),
            first_day: data.series.first_day(),
            last_day: data.series.last_day(),
            center: map.center,
            zoom: map.zoom,
            markers: map.markers.len(),
            top_active: by_active
                .into_iter()
                .take(top)
                .map(|c| CountryRow {
                    country: c.country_name.clone(),
                    active: c.active_cases,
                    recovered: c.recovered_cases,
                    deaths: c.deaths,
                })
                .collect(),
        }
    }
}

fn print_report(report: &SnapshotReport) {
    let span = match (report.first_day, report.last_day) {
        (Some(first), Some(last)) => format!(" ({} to {})", first, last),
        _ => String::new(),
    };

    println!("Outbreak snapshot");
    println!();
    println!("Phase:        {:?}", report.phase);
    println!("Series:       {} days{}", report.days, span);
    match report.latest_total {
        Some(total) => println!("Latest total: {}", total),
        None => println!("Latest total: n/a"),
    }
    println!(
        "Map center:   {}{} at zoom {}",
        report.center,
        if report.center.is_fallback() { " (fallback)" } else { "" },
        report.zoom
    );
    println!("Markers:      {}", report.markers);

    if report.top_active.is_empty() {
        return;
    }

    println!();
    println!("{:<28} {:>14} {:>14} {:>12}", "Country", "Active", "Recovered", "Deaths");
    println!("{}", "-".repeat(71));
    for row in &report.top_active {
        println!(
            "{:<28} {:>14} {:>14} {:>12}",
            row.country, row.active, row.recovered, row.deaths
        );
    }
}
