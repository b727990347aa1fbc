//! Scene configuration: JSON file, then command-line overrides.

use anyhow::{anyhow, Context, Result};
use clap::{Args, ValueEnum};
use lpviz::lp::{presets, Strategy};
use lpviz::scene::SceneCfg;
use std::fs;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StrategyArg {
    /// Dense grid filtered by exact membership (approximate)
    Grid,
    /// Feasible boundary intersections (exact)
    Vertices,
    /// Sutherland–Hodgman clip of the viewing box (exact)
    Clip,
}

impl From<StrategyArg> for Strategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::Grid => Strategy::Grid,
            StrategyArg::Vertices => Strategy::Vertices,
            StrategyArg::Clip => Strategy::Clip,
        }
    }
}

#[derive(Args, Clone, Debug, Default)]
pub struct SceneArgs {
    /// JSON scene config; missing fields fall back to the textbook problem
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Named constraint set (textbook, open-quadrant); replaces the config's constraints
    #[arg(long)]
    pub preset: Option<String>,
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,
    /// Grid step for sampling and line sweeps
    #[arg(long)]
    pub step: Option<f64>,
}

pub fn load_scene(args: &SceneArgs) -> Result<SceneCfg> {
    let mut cfg = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str::<SceneCfg>(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SceneCfg::default(),
    };
    if let Some(name) = &args.preset {
        cfg.constraints = presets::by_name(name).ok_or_else(|| {
            anyhow!(
                "unknown preset '{name}' (known: {})",
                presets::NAMES.join(", ")
            )
        })?;
    }
    if let Some(s) = args.strategy {
        cfg.strategy = s.into();
    }
    if let Some(step) = args.step {
        cfg.grid.step = step;
    }
    cfg.validate().context("invalid scene config")?;
    Ok(cfg)
}
