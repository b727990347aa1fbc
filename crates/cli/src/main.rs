use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use lpviz::geom2::rand::{draw_cloud, CloudCfg, ReplayToken};
use lpviz::geom2::{convex_hull_eps, GeomCfg};
use lpviz::scene::Scene;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod config;
mod points;
mod provenance;

use config::{load_scene, SceneArgs};
use provenance::{ensure_parent, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "LP geometry artifacts for an external renderer")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute one frame (hull, objective line, boundaries) and write it as JSON
    Frame {
        #[command(flatten)]
        scene: SceneArgs,
        /// Objective target; clamped to the configured range. Defaults to the config's z
        #[arg(long)]
        z: Option<f64>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write the sampled feasible points as CSV (x,y)
    Sample {
        #[command(flatten)]
        scene: SceneArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Gift-wrap a point set read from CSV or drawn at random
    Hull {
        /// CSV with x,y columns
        #[arg(long, conflicts_with = "random", required_unless_present = "random")]
        input: Option<PathBuf>,
        /// Number of random points in [0,10]²
        #[arg(long)]
        random: Option<usize>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Frame { scene, z, out } => frame(&scene, z, &out),
        Action::Sample { scene, out } => sample(&scene, &out),
        Action::Hull {
            input,
            random,
            seed,
            out,
        } => hull(input, random, seed, &out),
        Action::Report => report(),
    }
}

fn frame(args: &SceneArgs, z: Option<f64>, out: &Path) -> Result<()> {
    let cfg = load_scene(args)?;
    let z = z.unwrap_or(cfg.objective.z);
    tracing::info!(z, strategy = ?cfg.strategy, out = %out.display(), "frame");
    let frame = Scene::compute(&cfg, z)?;
    if !frame.fillable {
        tracing::info!(vertices = frame.hull.len(), "no region to fill");
    }
    ensure_parent(out)?;
    fs::write(out, serde_json::to_vec_pretty(&frame)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let mut payload = Payload::new(serde_json::json!({
        "z": frame.z,
        "strategy": cfg.strategy,
        "preset": args.preset,
        "grid": cfg.grid,
    }));
    if let Some(path) = &args.config {
        payload = payload.with_input(path.to_string_lossy());
    }
    write_sidecar(out, payload)?;
    Ok(())
}

fn sample(args: &SceneArgs, out: &Path) -> Result<()> {
    let cfg = load_scene(args)?;
    let sampler = cfg.strategy.sampler(cfg.grid, cfg.geom)?;
    let pts = sampler.sample(&cfg.constraints);
    tracing::info!(points = pts.len(), strategy = ?cfg.strategy, out = %out.display(), "sample");
    ensure_parent(out)?;
    points::write_points(out, &pts)?;
    write_sidecar(
        out,
        Payload::new(serde_json::json!({
            "strategy": cfg.strategy,
            "preset": args.preset,
            "grid": cfg.grid,
            "points": pts.len(),
        })),
    )?;
    Ok(())
}

fn hull(input: Option<PathBuf>, random: Option<usize>, seed: u64, out: &Path) -> Result<()> {
    let (pts, payload) = match (input, random) {
        (Some(path), _) => {
            let pts = points::read_points(&path)?;
            let payload = Payload::new(serde_json::json!({ "source": "csv" }))
                .with_input(path.to_string_lossy());
            (pts, payload)
        }
        (None, Some(count)) => {
            let cfg = CloudCfg {
                count,
                ..CloudCfg::default()
            };
            let pts = draw_cloud(cfg, ReplayToken { seed, index: 0 });
            let payload = Payload::new(serde_json::json!({
                "source": "random",
                "count": count,
                "seed": seed,
            }));
            (pts, payload)
        }
        (None, None) => bail!("either --input or --random is required"),
    };
    let hull = convex_hull_eps(&pts, GeomCfg::default().eps_point);
    tracing::info!(
        points = pts.len(),
        vertices = hull.len(),
        out = %out.display(),
        "hull"
    );
    ensure_parent(out)?;
    let doc = serde_json::json!({
        "vertices": hull,
        "fillable": hull.is_fillable(),
        "area": hull.signed_area(),
    });
    fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    write_sidecar(out, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::document(&Payload::new(serde_json::json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
