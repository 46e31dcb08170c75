use anyhow::Result;

use pagesim::memory::policy::{FifoPolicy, LfuPolicy, LruPolicy, MfuPolicy, RandomPolicy};
use pagesim::{evict_one, EvictionPolicy, FrameTable, FrameTableError};

mod common;
use common::fill_synthetic;

#[test]
fn test_fifo_selects_earliest_brought() -> Result<()> {
    let mut table = FrameTable::new(4);
    table.load(0, 1, 0, 5);
    table.load(1, 1, 1, 3);
    table.load(2, 1, 2, 9);

    let victim = FifoPolicy.select_victim(&table);
    assert_eq!(victim, Some(1));
    Ok(())
}

#[test]
fn test_fifo_tie_break_is_table_order() -> Result<()> {
    let mut table = FrameTable::new(4);
    table.load(0, 1, 0, 3);
    table.load(1, 1, 1, 3);
    table.load(2, 1, 2, 7);

    assert_eq!(FifoPolicy.select_victim(&table), Some(0));
    Ok(())
}

#[test]
fn test_lru_selects_oldest_reference() -> Result<()> {
    let mut table = FrameTable::new(4);
    table.load(0, 1, 0, 0);
    table.load(1, 1, 1, 0);
    table.load(2, 1, 2, 0);
    table.touch(0, 20);
    table.touch(1, 8);
    table.touch(2, 14);

    assert_eq!(LruPolicy.select_victim(&table), Some(1));
    Ok(())
}

#[test]
fn test_lfu_selects_smallest_count() -> Result<()> {
    let mut table = FrameTable::new(4);
    table.load(0, 1, 0, 0);
    table.load(1, 1, 1, 0);
    table.load(2, 1, 2, 0);
    // counts: frame 0 -> 3, frame 1 -> 1, frame 2 -> 2
    table.touch(0, 1);
    table.touch(0, 2);
    table.touch(2, 3);

    assert_eq!(LfuPolicy.select_victim(&table), Some(1));
    Ok(())
}

#[test]
fn test_mfu_selects_largest_count_first_in_table_order() -> Result<()> {
    let mut table = FrameTable::new(4);
    table.load(0, 1, 0, 0);
    table.load(1, 1, 1, 0);
    table.load(2, 1, 2, 0);
    // frames 1 and 2 tie at count 3
    table.touch(1, 1);
    table.touch(1, 2);
    table.touch(2, 3);
    table.touch(2, 4);

    assert_eq!(MfuPolicy.select_victim(&table), Some(1));
    Ok(())
}

#[test]
fn test_policies_skip_free_frames() -> Result<()> {
    let mut table = FrameTable::new(4);
    // Frame 0 free with zeroed metadata must never be picked
    table.load(1, 1, 0, 7);
    table.load(2, 1, 1, 4);

    assert_eq!(FifoPolicy.select_victim(&table), Some(2));
    assert_eq!(LruPolicy.select_victim(&table), Some(2));
    assert_eq!(LfuPolicy.select_victim(&table), Some(1));
    Ok(())
}

#[test]
fn test_random_picks_an_occupied_frame() -> Result<()> {
    let mut table = FrameTable::new(10);
    fill_synthetic(&mut table, 1, 3, 0);

    let mut policy = RandomPolicy::new(42);
    for _ in 0..20 {
        let victim = policy.select_victim(&table).expect("table is not empty");
        assert!(!table.frame(victim).is_free());
        assert!(victim < 3);
    }
    Ok(())
}

#[test]
fn test_evict_one_vacates_the_victim() -> Result<()> {
    let mut table = FrameTable::new(4);
    table.load(0, 1, 0, 2);
    table.load(1, 1, 1, 1);

    let victim = evict_one(&mut table, &mut FifoPolicy)?;
    assert_eq!(victim, Some(1));
    assert!(table.frame(1).is_free());
    assert_eq!(table.find_frame(1, 1), None);
    assert_eq!(table.occupied_count(), 1);
    Ok(())
}

#[test]
fn test_evict_one_on_empty_table_is_fatal() -> Result<()> {
    let mut table = FrameTable::new(4);
    let err = evict_one(&mut table, &mut FifoPolicy).unwrap_err();
    assert_eq!(err, FrameTableError::NoOccupiedFrames);
    Ok(())
}

struct DecliningPolicy;

impl EvictionPolicy for DecliningPolicy {
    fn select_victim(&mut self, _table: &FrameTable) -> Option<u32> {
        None
    }
}

#[test]
fn test_declined_eviction_with_occupied_frames_is_not_fatal() -> Result<()> {
    let mut table = FrameTable::new(4);
    table.load(0, 1, 0, 0);

    let victim = evict_one(&mut table, &mut DecliningPolicy)?;
    assert_eq!(victim, None);
    // The occupied frame is left alone
    assert_eq!(table.occupied_count(), 1);
    Ok(())
}
