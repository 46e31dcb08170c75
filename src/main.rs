use anyhow::Result;

use pagesim::workload;
use pagesim::{PolicyKind, SimConfig, Simulation};

fn main() -> Result<()> {
    let seed: u64 = rand::random();
    let config = SimConfig::default();
    let procs = workload::generate(150, seed);

    println!("Generated {} processes (seed {seed})", procs.len());
    let mut sim = Simulation::new(config, procs, PolicyKind::Fifo, seed)?;
    let stats = sim.run()?;

    println!(
        "FIFO: {} swaps, {} hits, {} misses, hit ratio {:.2}, {} completed",
        stats.swaps,
        stats.hits,
        stats.misses,
        stats.hit_ratio(),
        stats.completed
    );
    Ok(())
}
