//! Workbook import command.

use std::path::Path;

use galiontek_core::meeting::Meeting;
use tracing::info;
use uuid::Uuid;

use crate::error::{CliError, CliResult};
use crate::store::Store;

/// Imports the workbook at `file` as meetings of `order_id` and saves the
/// data file.
pub fn run(store: &mut Store, order_id: &str, file: &Path) -> CliResult<()> {
    let order = store
        .order(order_id)
        .ok_or_else(|| CliError::OrderNotFound(order_id.to_string()))?;

    let batch = galiontek_import::read_workbook(file)?;
    let meetings = batch
        .into_iter()
        .map(|row| {
            Meeting::from_times(
                Uuid::new_v4().to_string(),
                order.id.clone(),
                row.date,
                row.start_time,
                row.end_time,
                row.topic,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    let count = meetings.len();
    store.add_meetings(meetings);
    store.save()?;

    info!(order = %order.id, count, "imported meetings");
    println!("נקלטו {} מפגשים להזמנה: {}", count, order.display_title());
    Ok(())
}
