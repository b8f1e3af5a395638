//! Summary command.

use galiontek_core::units::UnitMode;
use galiontek_core::{group_by_month, summarize};
use galiontek_export::table;

use crate::error::{CliError, CliResult};
use crate::store::Store;

/// Prints the summary band and monthly breakdown for an order.
pub fn run(store: &Store, order_id: &str, mode: UnitMode) -> CliResult<()> {
    let order = store
        .order(order_id)
        .ok_or_else(|| CliError::OrderNotFound(order_id.to_string()))?;
    let meetings = store.meetings_for_order(order_id);

    println!("{}", table::export_title(&order));
    let summary = summarize(&meetings, mode);
    for line in table::summary_lines(&order, &summary) {
        println!("{line}");
    }

    let groups = group_by_month(&meetings);
    if !groups.is_empty() {
        println!();
        for (key, group) in &groups {
            let minutes: u64 = group.iter().map(|m| u64::from(m.duration_minutes)).sum();
            println!(
                "{}: {} מפגשים, {} שעות",
                key.label(),
                group.len(),
                table::format_number(minutes as f64 / 60.0)
            );
        }
    }

    Ok(())
}
