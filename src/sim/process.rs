use crate::common::types::{process_label, PageNum, ProcessId, Tick};

/// One simulated process as the driver sees it.
#[derive(Debug, Clone)]
pub struct Process {
    pub id: ProcessId,
    /// Tick at which the process becomes eligible for admission.
    pub arrival: Tick,
    /// Service ticks left; the process exits when this reaches zero.
    pub service_remaining: Tick,
    /// Number of distinct logical pages the process may reference.
    pub page_ceiling: PageNum,
    /// Page the process will execute from this tick.
    pub current_page: PageNum,
}

impl Process {
    pub fn new(id: ProcessId, arrival: Tick, service: Tick, page_ceiling: PageNum) -> Self {
        Self {
            id,
            arrival,
            service_remaining: service,
            page_ceiling,
            current_page: 0,
        }
    }

    pub fn label(&self) -> String {
        process_label(self.id)
    }
}

/// Admitted, not-yet-finished processes in admission order.
///
/// Removal keeps the relative order of the remaining processes.
#[derive(Debug, Default)]
pub struct ReadyQueue {
    procs: Vec<Process>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.procs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procs.is_empty()
    }

    pub fn contains(&self, pid: ProcessId) -> bool {
        self.procs.iter().any(|p| p.id == pid)
    }

    pub fn push(&mut self, proc: Process) {
        self.procs.push(proc);
    }

    pub fn remove(&mut self, pid: ProcessId) -> Option<Process> {
        let idx = self.procs.iter().position(|p| p.id == pid)?;
        Some(self.procs.remove(idx))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.procs.iter()
    }

    pub fn get(&self, idx: usize) -> Option<&Process> {
        self.procs.get(idx)
    }

    pub(crate) fn get_mut(&mut self, idx: usize) -> Option<&mut Process> {
        self.procs.get_mut(idx)
    }
}
