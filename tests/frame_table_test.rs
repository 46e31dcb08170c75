use anyhow::Result;

use pagesim::FrameTable;

mod common;
use common::fill_synthetic;

#[test]
fn test_allocation_is_first_free_in_table_order() -> Result<()> {
    let mut table = FrameTable::new(4);

    assert_eq!(table.allocate_free_frame(), Some(0));
    table.load(0, 1, 0, 0);
    assert_eq!(table.allocate_free_frame(), Some(1));
    table.load(1, 1, 1, 1);

    // Vacating frame 0 makes it the first free frame again
    table.vacate(0);
    assert_eq!(table.allocate_free_frame(), Some(0));
    Ok(())
}

#[test]
fn test_find_frame_and_touch() -> Result<()> {
    let mut table = FrameTable::new(4);
    table.load(2, 7, 3, 10);

    let frame = table.find_frame(7, 3).expect("page should be resident");
    assert_eq!(frame, 2);
    assert_eq!(table.frame(frame).ref_count, 1);
    assert_eq!(table.frame(frame).brought_at, 10);

    table.touch(frame, 15);
    assert_eq!(table.frame(frame).ref_count, 2);
    assert_eq!(table.frame(frame).last_referenced, 15);
    // brought_at is set at load and never moves on a hit
    assert_eq!(table.frame(frame).brought_at, 10);

    assert_eq!(table.find_frame(7, 4), None);
    assert_eq!(table.find_frame(8, 3), None);
    Ok(())
}

#[test]
fn test_free_frame_accounting() -> Result<()> {
    let mut table = FrameTable::new(10);
    assert_eq!(table.free_frame_count(), 10);
    assert!(table.has_at_least_n_free(10));
    assert!(!table.has_at_least_n_free(11));
    assert!(table.has_at_least_n_free(0));

    fill_synthetic(&mut table, 1, 7, 0);
    assert_eq!(table.free_frame_count(), 3);
    assert_eq!(table.occupied_count(), 7);
    assert!(table.has_at_least_n_free(3));
    assert!(!table.has_at_least_n_free(4));
    Ok(())
}

#[test]
fn test_release_clears_every_frame_of_the_process() -> Result<()> {
    let mut table = FrameTable::new(10);
    fill_synthetic(&mut table, 1, 4, 0);
    fill_synthetic(&mut table, 2, 3, 10);

    let freed = table.release(1);
    assert_eq!(freed, 4);
    for page in 0..4 {
        assert_eq!(table.find_frame(1, page), None);
    }
    // The other process is untouched
    for page in 0..3 {
        assert!(table.find_frame(2, page).is_some());
    }

    // Idempotent: releasing again, or releasing an unknown pid, is a no-op
    assert_eq!(table.release(1), 0);
    assert_eq!(table.release(999), 0);
    Ok(())
}

#[test]
fn test_vacated_frame_has_no_metadata() -> Result<()> {
    let mut table = FrameTable::new(2);
    table.load(0, 1, 5, 42);
    table.touch(0, 43);
    table.vacate(0);

    let frame = table.frame(0);
    assert!(frame.is_free());
    assert_eq!(frame.brought_at, 0);
    assert_eq!(frame.last_referenced, 0);
    assert_eq!(frame.ref_count, 0);
    Ok(())
}

#[test]
fn test_memory_map_projection() -> Result<()> {
    let mut table = FrameTable::new(4);
    table.load(0, 0, 0, 0); // process A
    table.load(2, 26, 1, 0); // process a

    let map = table.memory_map();
    assert_eq!(map, "A . a .");
    Ok(())
}
