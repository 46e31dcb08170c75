use pagesim::FrameTable;

/// Load `count` synthetic pages of `pid` into the first free frames, with
/// ascending load timestamps starting at `base`.
pub fn fill_synthetic(table: &mut FrameTable, pid: u32, count: u32, base: u64) {
    for i in 0..count {
        let frame = table
            .allocate_free_frame()
            .expect("table should have a free frame");
        table.load(frame, pid, i, base + i as u64);
    }
}
