use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pointkit::prelude::*;
use serde_json::json;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod config;
mod provenance;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Inspect, compare and sort 2D points by distance to the origin")]
struct Cmd {
    /// JSON config with `colors` / `extra_colors` for the registry
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Register an extra allowed color (repeatable)
    #[arg(long = "add-color", global = true)]
    add_color: Vec<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Distance of (x, y) to the origin
    Distance {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Compare two points by origin-distance
    Compare {
        #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
        a: (f64, f64),
        #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
        b: (f64, f64),
    },
    /// Draw random points and sort them by origin-distance
    Sort {
        #[arg(long, default_value_t = 5)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Optional JSON artifact (a provenance sidecar is written next to it)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Build a color-restricted point from the registry
    Advanced {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        #[arg(long, default_value = pointkit::DEFAULT_COLOR)]
        color: String,
    },
    /// Distance between two color-restricted points
    Between {
        #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
        a: (f64, f64),
        #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
        b: (f64, f64),
        #[arg(long, default_value = pointkit::DEFAULT_COLOR)]
        color: String,
    },
    /// List the allowed colors
    Colors,
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = CliConfig::load_or_default(cmd.config.as_deref())?;
    let registry = cfg.registry(&cmd.add_color);
    match cmd.action {
        Action::Distance { x, y } => distance(x, y),
        Action::Compare { a, b } => compare(a, b),
        Action::Sort { count, seed, out } => sort(count, seed, out.as_deref()),
        Action::Advanced { x, y, color } => advanced(x, y, color, &registry),
        Action::Between { a, b, color } => between(a, b, color, &registry),
        Action::Colors => colors(&registry),
        Action::Report => report(cmd.config.as_deref(), &registry),
    }
}

/// Parse `X,Y` into a coordinate pair.
fn parse_pair(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {s:?}"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad x {x:?}: {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad y {y:?}: {e}"))?;
    Ok((x, y))
}

fn distance(x: f64, y: f64) -> Result<()> {
    let p = Point::new(x, y);
    tracing::info!(%p, "distance");
    println!("{}", p.distance_to_orig());
    Ok(())
}

fn compare_line(a: Point, b: Point) -> String {
    let symbol = match a.origin_cmp(&b) {
        Ordering::Greater => ">",
        Ordering::Equal => "==",
        Ordering::Less => "<",
    };
    format!("{a} {symbol} {b}")
}

fn compare(a: (f64, f64), b: (f64, f64)) -> Result<()> {
    let (a, b) = (Point::from(a), Point::from(b));
    tracing::info!(%a, %b, "compare");
    println!("{}", compare_line(a, b));
    Ok(())
}

fn sorted_points(count: usize, seed: u64) -> (Vec<Point>, Vec<Point>) {
    let cfg = SampleCfg {
        count,
        ..SampleCfg::default()
    };
    let drawn = draw_points(cfg, seed);
    let mut sorted = drawn.clone();
    sort_by_origin_distance(&mut sorted);
    (drawn, sorted)
}

fn sort(count: usize, seed: u64, out: Option<&Path>) -> Result<()> {
    tracing::info!(count, seed, out = ?out, "sort");
    let (drawn, sorted) = sorted_points(count, seed);
    println!("I got these {} random points:", drawn.len());
    for p in &drawn {
        println!("{p}");
    }
    println!("The sorted list of points is:");
    println!("{sorted:?}");

    if let Some(out) = out {
        let rows: Vec<_> = sorted
            .iter()
            .map(|p| json!({"x": p.x, "y": p.y, "distance": p.distance_to_orig()}))
            .collect();
        provenance::ensure_parent(out)?;
        fs::write(out, serde_json::to_vec_pretty(&rows)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let sidecar = provenance::write_sidecar(out, json!({"count": count, "seed": seed}))?;
        tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "sort_written");
    }
    Ok(())
}

fn advanced(x: f64, y: f64, color: String, registry: &ColorRegistry) -> Result<()> {
    tracing::info!(x, y, color = %color, "advanced");
    let p = AdvancedPoint::new(x, y, color, registry)?;
    println!("{p} color={} distance_to_orig={}", p.color(), p.distance_to_orig());
    Ok(())
}

fn between(a: (f64, f64), b: (f64, f64), color: String, registry: &ColorRegistry) -> Result<()> {
    tracing::info!(?a, ?b, color = %color, "between");
    let p1 = AdvancedPoint::from_tuple_with_color(a, color.clone(), registry)?;
    let p2 = AdvancedPoint::from_tuple_with_color(b, color, registry)?;
    println!("{}", AdvancedPoint::distance_2_points(&p1, &p2));
    Ok(())
}

fn colors(registry: &ColorRegistry) -> Result<()> {
    tracing::info!(count = registry.len(), "colors");
    for color in registry.colors() {
        println!("{color}");
    }
    Ok(())
}

fn report(config: Option<&Path>, registry: &ColorRegistry) -> Result<()> {
    let doc = provenance::document(
        json!({
            "config": config.map(|p| p.display().to_string()),
            "colors": registry.colors(),
        }),
        &[],
    );
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
