mod args;
mod config;

use anyhow::Context;
use calculator::{CostError, EnhancementRequest, description, title};
use clap::Parser;
use models::EnhancementKind;
use tracing_subscriber::EnvFilter;

use args::{Args, Command};
use config::{Config, Settings};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match Config::load(args.config.as_deref())? {
        Some((path, config)) => {
            tracing::info!(?path, "using config file");
            config
        }
        None => Config::default(),
    };
    let settings = Settings::resolve(&args.overrides(), &config);
    tracing::debug!(%settings, "resolved settings");

    match args.command {
        Command::Cost { kind, breakdown } => {
            println!("{}", cost_line(settings.request(kind), breakdown)?);
        }
        Command::List => {
            let (rows, outcome) = list_rows(&settings);
            for row in rows {
                println!("{row}");
            }
            outcome?;
        }
        Command::Quote { path } => {
            let request_str = std::fs::read_to_string(&path)
                .with_context(|| format!("unable to read request file {path:?}"))?;
            let request = EnhancementRequest::from_toml_str(&request_str)
                .with_context(|| format!("invalid request file {path:?}"))?;
            println!("{}", cost_line(request, true)?);
        }
    }
    Ok(())
}

fn cost_line(request: EnhancementRequest, breakdown: bool) -> anyhow::Result<String> {
    let kind = request.kind();
    let priced = request
        .breakdown()
        .with_context(|| format!("unable to price {}", title(kind)))?;
    if breakdown {
        Ok(format!("{} costs {} ({priced})", title(kind), priced.total()))
    } else {
        Ok(format!("{} costs {}", title(kind), priced.total()))
    }
}

/// One row per kind after a settings header. Rows that fail to price show `-`
/// and the first failure is returned alongside the rows.
fn list_rows(settings: &Settings) -> (Vec<String>, anyhow::Result<()>) {
    let mut rows = vec![settings.to_string()];
    let mut first_error: Option<(EnhancementKind, CostError)> = None;
    for kind in EnhancementKind::all() {
        let cost = match settings.request(kind).cost() {
            Ok(cost) => cost.to_string(),
            Err(error) => {
                first_error.get_or_insert((kind, error));
                "-".to_string()
            }
        };
        let description = match description(kind) {
            Ok(description) => description,
            Err(error) => {
                first_error.get_or_insert((kind, error));
                "-".to_string()
            }
        };
        rows.push(format!(
            "{:<16} {:<20} {:<30} {cost:>6}",
            kind.slug(),
            title(kind),
            description,
        ));
    }
    let outcome = match first_error {
        Some((kind, error)) => {
            Err(error).with_context(|| format!("unable to price {}", title(kind)))
        }
        None => Ok(()),
    };
    (rows, outcome)
}
