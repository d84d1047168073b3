// ============================================================================
// Basic Usage Example
// ============================================================================

use dungeon_numbers::prelude::*;

fn main() {
    println!("=== Dungeon Numbers Example ===\n");

    // Descend the classic golden-ratio starting value.
    let engine = StaircaseEngine::with_config(StaircaseConfig::default());
    let descent = engine.descend(1.1).unwrap();

    println!(
        "Descent from 1.1: depth {}, endpoint {:.15}",
        descent.depth(),
        descent.converged().unwrap()
    );
    println!("Golden ratio:     {:.15}", metallic_mean(1));
    if let Some(step) = descent.convergence_step(1e-6) {
        println!("Settled within 1e-6 after {} steps\n", step);
    }

    // Sweep the survey grid and tally where the endpoints land.
    println!("=== Metallic Survey (90 starting values) ===\n");
    let config = SweepConfig::metallic_survey();
    let report = run_sweep_parallel(&config, 4).unwrap();

    for n in 1..=config.max_mean_index {
        let hits: Vec<f64> = report.hits(n).map(|point| point.input).collect();
        println!(
            "metallic ratio n = {} ({:.6}): {} starting values {:?}",
            n,
            metallic_mean(n),
            hits.len(),
            hits
        );
    }

    let unmatched = report
        .points()
        .iter()
        .filter(|point| point.metallic_index.is_none())
        .count();
    println!("\n{} starting values settled away from every mean", unmatched);
}
