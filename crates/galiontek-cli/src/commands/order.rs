//! Order upsert command.

use tracing::info;

use crate::error::CliResult;
use crate::store::{OrderRecord, Store};

/// Creates or replaces an order row and saves the data file.
pub fn run(
    store: &mut Store,
    id: &str,
    title: Option<String>,
    client_name: Option<String>,
    hours: Option<f64>,
) -> CliResult<()> {
    let record = OrderRecord {
        id: id.to_string(),
        title,
        client_name,
        hours,
    };
    let display = record.to_ref().display_title().to_string();

    store.upsert_order(record);
    store.save()?;

    info!(order = id, "saved order");
    println!("נשמרה הזמנה: {display}");
    Ok(())
}
