use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use pagesim::workload;
use pagesim::{PolicyKind, SimConfig, Simulation};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "pagesim CLI - compare page replacement policies over random workloads"
)]
struct Cli {
    /// Number of independent runs to average over
    #[arg(short, long, default_value_t = 5)]
    runs: u32,

    /// Processes generated per run
    #[arg(short, long, default_value_t = 150)]
    processes: usize,

    /// Physical frame count
    #[arg(short, long, default_value_t = 100)]
    frames: usize,

    /// Simulation length in ticks
    #[arg(short, long, default_value_t = 60)]
    duration: u32,

    /// RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Restrict the comparison to a single policy
    #[arg(long, value_enum)]
    policy: Option<PolicyKind>,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct PolicyReport {
    policy: PolicyKind,
    runs: u32,
    avg_swaps: f64,
    avg_hit_ratio: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);
    let config = SimConfig {
        frame_count: cli.frames,
        total_duration: cli.duration,
        ..SimConfig::default()
    };
    let policies: Vec<PolicyKind> = match cli.policy {
        Some(kind) => vec![kind],
        None => PolicyKind::all().to_vec(),
    };

    let mut swap_totals = vec![0.0f64; policies.len()];
    let mut ratio_totals = vec![0.0f64; policies.len()];

    for run in 0..cli.runs {
        let run_seed = seed.wrapping_add(run as u64);
        // Every policy in a run sees the same workload, so their statistics
        // are directly comparable.
        let procs = workload::generate(cli.processes, run_seed);
        for (i, kind) in policies.iter().enumerate() {
            let mut sim = Simulation::new(config.clone(), procs.clone(), *kind, run_seed)?;
            let stats = sim.run()?;
            swap_totals[i] += stats.swaps as f64;
            ratio_totals[i] += stats.hit_ratio();
        }
    }

    let reports: Vec<PolicyReport> = policies
        .iter()
        .enumerate()
        .map(|(i, kind)| PolicyReport {
            policy: *kind,
            runs: cli.runs,
            avg_swaps: swap_totals[i] / cli.runs as f64,
            avg_hit_ratio: ratio_totals[i] / cli.runs as f64,
        })
        .collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        println!(
            "Averages over {} runs ({} processes, {} frames, {} ticks, seed {seed})",
            cli.runs, cli.processes, cli.frames, cli.duration
        );
        println!("{:<8} {:>12} {:>12}", "Policy", "Avg swaps", "Hit ratio");
        for report in &reports {
            println!(
                "{:<8} {:>12.2} {:>12.3}",
                report.policy.to_string(),
                report.avg_swaps,
                report.avg_hit_ratio
            );
        }
    }
    Ok(())
}
