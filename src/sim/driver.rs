use std::collections::VecDeque;

use log::{debug, info, warn};

use crate::common::types::{process_label, Tick};
use crate::config::SimConfig;
use crate::memory::policy::{create_policy, evict_one, EvictionPolicy, PolicyKind};
use crate::memory::table::FrameTable;
use crate::sim::admission::AdmissionController;
use crate::sim::error::SimError;
use crate::sim::process::{Process, ReadyQueue};
use crate::sim::reference::ReferenceGenerator;
use crate::sim::stats::RunStats;

/// One simulation run: the frame table, the process population, and the
/// injected eviction policy, stepped over discrete time.
///
/// Each tick runs three phases in order: admission (arrivals enter while
/// the free-frame gate holds), reference (every resident process touches
/// pages `refs_per_tick` times, faulting and evicting as needed), and
/// execution (current page is ensured resident, service time is charged,
/// finished processes exit and release their frames).
pub struct Simulation {
    config: SimConfig,
    table: FrameTable,
    ready: ReadyQueue,
    pending: VecDeque<Process>,
    policy: Box<dyn EvictionPolicy>,
    references: ReferenceGenerator,
    admission: AdmissionController,
    stats: RunStats,
}

impl Simulation {
    pub fn new(
        config: SimConfig,
        workload: Vec<Process>,
        kind: PolicyKind,
        seed: u64,
    ) -> Result<Self, SimError> {
        let policy = create_policy(kind, seed.wrapping_add(1));
        Self::with_policy(config, workload, policy, seed)
    }

    /// Build a run around an explicit policy object. Validates the
    /// configuration and workload; faults here abort before any tick runs.
    pub fn with_policy(
        config: SimConfig,
        mut workload: Vec<Process>,
        policy: Box<dyn EvictionPolicy>,
        seed: u64,
    ) -> Result<Self, SimError> {
        if config.frame_count == 0 {
            return Err(SimError::InvalidConfig(
                "frame table capacity must be positive".to_string(),
            ));
        }
        if config.refs_per_tick == 0 {
            return Err(SimError::InvalidConfig(
                "refs_per_tick must be positive".to_string(),
            ));
        }
        for proc in &workload {
            if proc.service_remaining == 0 {
                return Err(SimError::InvalidWorkload(format!(
                    "process {} has non-positive service time",
                    proc.label()
                )));
            }
            if proc.page_ceiling == 0 {
                return Err(SimError::InvalidWorkload(format!(
                    "process {} has a zero page ceiling",
                    proc.label()
                )));
            }
        }
        // Admission is strictly in arrival order; stable sort keeps the
        // generation order for equal arrivals.
        workload.sort_by_key(|p| p.arrival);

        let references = ReferenceGenerator::new(seed, config.locality_bias);
        let admission = AdmissionController::new(config.admission_free_frames);
        let table = FrameTable::new(config.frame_count);
        Ok(Self {
            config,
            table,
            ready: ReadyQueue::new(),
            pending: workload.into(),
            policy,
            references,
            admission,
            stats: RunStats::default(),
        })
    }

    pub fn frame_table(&self) -> &FrameTable {
        &self.table
    }

    pub fn frame_table_mut(&mut self) -> &mut FrameTable {
        &mut self.table
    }

    pub fn ready(&self) -> &ReadyQueue {
        &self.ready
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Run the full tick budget, ending early once every process has been
    /// admitted and finished.
    pub fn run(&mut self) -> Result<RunStats, SimError> {
        for t in 0..self.config.total_duration {
            if self.ready.is_empty() && self.pending.is_empty() {
                debug!("all processes finished by tick {t}; ending run early");
                break;
            }
            self.step(t)?;
        }
        Ok(self.stats)
    }

    /// Execute one tick.
    pub fn step(&mut self, t: Tick) -> Result<(), SimError> {
        self.admit_arrivals(t);
        self.reference_phase(t)?;
        self.execution_phase(t);
        if t % 10 == 0 {
            debug!("memory at tick {t}: {}", self.table.memory_map());
        }
        Ok(())
    }

    /// Admit eligible arrivals in arrival order. A refusal stops admission
    /// for this tick; later arrivals never skip ahead of an earlier one
    /// still waiting.
    fn admit_arrivals(&mut self, t: Tick) {
        let now = self.config.timestamp(t, 0);
        while let Some(eligible) = self.pending.front() {
            if eligible.arrival > t {
                break;
            }
            if self
                .admission
                .try_admit(&mut self.table, eligible, now)
                .is_none()
            {
                debug!(
                    "tick {t}: admission gate closed, {} waits with {} frames free",
                    eligible.label(),
                    self.table.free_frame_count()
                );
                break;
            }
            self.stats.swaps += 1;
            if let Some(proc) = self.pending.pop_front() {
                info!(
                    "<{t}, Process {}, Enter, Size: {}, Service: {}, Memory Map: {}>",
                    proc.label(),
                    proc.page_ceiling,
                    proc.service_remaining,
                    self.table.memory_map()
                );
                self.ready.push(proc);
            }
        }
    }

    /// Generate `refs_per_tick` page references per resident process,
    /// resolving each as a hit, a plain fault, or a fault-with-eviction.
    fn reference_phase(&mut self, t: Tick) -> Result<(), SimError> {
        for k in 0..self.config.refs_per_tick {
            let now = self.config.timestamp(t, k);
            for idx in 0..self.ready.len() {
                let Some(proc) = self.ready.get(idx) else {
                    continue;
                };
                if proc.service_remaining == 0 {
                    continue;
                }
                let (pid, current, ceiling) = (proc.id, proc.current_page, proc.page_ceiling);

                let next = self.references.next_page(current, ceiling);
                if let Some(proc) = self.ready.get_mut(idx) {
                    proc.current_page = next;
                }

                if let Some(frame) = self.table.find_frame(pid, next) {
                    self.table.touch(frame, now);
                    self.stats.hits += 1;
                    debug!("<{t}, Process {}, Referenced Page {next}, HIT>", process_label(pid));
                    continue;
                }

                self.stats.misses += 1;
                let frame = match self.table.allocate_free_frame() {
                    Some(frame) => Some(frame),
                    None => evict_one(&mut self.table, self.policy.as_mut())?,
                };
                match frame {
                    Some(frame) => {
                        self.table.load(frame, pid, next, now);
                        self.stats.swaps += 1;
                        debug!(
                            "<{t}, Process {}, Referenced Page {next}, MISS, loaded into frame {frame}>",
                            process_label(pid)
                        );
                    }
                    None => {
                        warn!(
                            "tick {t}: no victim available, Process {} stalls on page {next}",
                            process_label(pid)
                        );
                    }
                }
            }
        }
        Ok(())
    }

    /// Charge one tick of service to every resident process whose current
    /// page is (or can be made) resident, and retire finished processes.
    /// A process that cannot get its page loaded is stalled, not dropped;
    /// it keeps its service time and is retried next tick.
    fn execution_phase(&mut self, t: Tick) {
        let now = self.config.timestamp(t, self.config.refs_per_tick.saturating_sub(1));
        let mut idx = 0;
        while idx < self.ready.len() {
            let Some(proc) = self.ready.get(idx) else {
                break;
            };
            let (pid, page) = (proc.id, proc.current_page);

            if self.table.find_frame(pid, page).is_none() {
                match self.table.allocate_free_frame() {
                    Some(frame) => {
                        self.table.load(frame, pid, page, now);
                        self.stats.swaps += 1;
                    }
                    None => {
                        warn!(
                            "tick {t}: Process {} stalled, page {page} not resident and no free frame",
                            process_label(pid)
                        );
                        idx += 1;
                        continue;
                    }
                }
            }

            let finished = match self.ready.get_mut(idx) {
                Some(proc) if proc.service_remaining > 0 => {
                    proc.service_remaining -= 1;
                    proc.service_remaining == 0
                }
                _ => false,
            };

            if finished {
                self.stats.completed += 1;
                info!(
                    "<{t}, Process {}, Exit, Memory Map: {}>",
                    process_label(pid),
                    self.table.memory_map()
                );
                self.table.release(pid);
                self.ready.remove(pid);
                // the next process shifted into this slot
            } else {
                idx += 1;
            }
        }
    }
}
