//! Sweep the objective target over the textbook problem and print a summary.
//!
//! Usage:
//!   cargo run -p lpviz --example textbook_sweep -- [grid|vertices|clip]

use lpviz::prelude::*;

fn main() {
    let strategy = std::env::args()
        .nth(1)
        .map(|s| s.parse::<Strategy>())
        .transpose()
        .unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(2);
        })
        .unwrap_or_default();
    let cfg = SceneCfg {
        strategy,
        ..SceneCfg::default()
    };
    let mut scene = match Scene::new(cfg) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("invalid scene: {e}");
            std::process::exit(1);
        }
    };
    for z in (0..=30).step_by(5) {
        match scene.frame(z as f64) {
            Ok(f) => println!(
                "z={:>4.1} hull={} area={:.3} objective_pts={}",
                f.z,
                f.hull.len(),
                f.area,
                f.objective.as_ref().map_or(0, Vec::len)
            ),
            Err(e) => eprintln!("z={z}: {e}"),
        }
    }
    println!("hull recomputations: {}", scene.cache().misses());
}
