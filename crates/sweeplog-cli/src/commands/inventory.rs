//! Inventory command implementation.

use crate::error::Result;
use crate::output::{Formatter, InventoryRow};
use sweeplog_domain::format_timestamp;
use sweeplog_engine::ReportManager;

/// Execute the inventory command.
pub fn execute_inventory(reports: &ReportManager, formatter: &Formatter) -> Result<()> {
    let rows = inventory_rows(reports);
    println!("{}", formatter.inventory(&rows)?);
    Ok(())
}

/// One row per distinct room id, ascending.
pub fn inventory_rows(reports: &ReportManager) -> Vec<InventoryRow> {
    let manager = reports.manager();
    let index = manager.events_by_room();

    index
        .iter()
        .filter_map(|(room_id, events)| {
            // Later definitions of the same id win.
            let room = manager.rooms().iter().rev().find(|room| room.id == room_id)?;
            Some(InventoryRow {
                room_id: room_id.to_string(),
                length: room.length,
                width: room.width,
                area: room.area(),
                cleanings: events.len(),
                last_cleaned: events.first().map(|event| format_timestamp(&event.timestamp)),
            })
        })
        .collect()
}
