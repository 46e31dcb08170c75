/// Process identifier type
pub type ProcessId = u32;

/// Logical page number type
pub type PageNum = u32;

/// Frame slot index type
pub type FrameId = u32;

/// Coarse simulation time unit
pub type Tick = u32;

/// Fine-grained reference clock: `tick * refs_per_tick + sub_step`
pub type Timestamp = u64;

/// Display label for a process: `A..Z`, then `a..z`, then `P{n}`.
pub fn process_label(id: ProcessId) -> String {
    match id {
        0..=25 => char::from(b'A' + id as u8).to_string(),
        26..=51 => char::from(b'a' + (id - 26) as u8).to_string(),
        _ => format!("P{}", id),
    }
}
