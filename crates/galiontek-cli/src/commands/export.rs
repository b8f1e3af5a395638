//! Export command.

use std::path::Path;

use chrono::Local;
use galiontek_core::units::UnitMode;
use galiontek_export::{email, pdf, whatsapp};
use tracing::info;

use crate::cli::ExportFormat;
use crate::error::{CliError, CliResult};
use crate::store::Store;

/// Runs one of the three export renderers for an order.
///
/// An order with no meetings is a no-op with a message, not an error; the
/// renderers themselves still refuse empty input as a backstop.
pub fn run(
    store: &Store,
    order_id: &str,
    format: ExportFormat,
    mode: UnitMode,
    out_dir: Option<&Path>,
    open_artifact: bool,
) -> CliResult<()> {
    let order = store
        .order(order_id)
        .ok_or_else(|| CliError::OrderNotFound(order_id.to_string()))?;
    let meetings = store.meetings_for_order(order_id);

    if meetings.is_empty() {
        println!("אין מפגשים לייצוא");
        return Ok(());
    }

    match format {
        ExportFormat::Pdf => {
            let export = pdf::render(&order, &meetings, mode, Local::now().date_naive())?;
            let path = out_dir.unwrap_or(Path::new(".")).join(&export.filename);
            std::fs::write(&path, &export.bytes)?;
            info!(path = %path.display(), "wrote PDF export");
            println!("{}", path.display());
            if open_artifact {
                open::that(&path)?;
            }
        }
        ExportFormat::Whatsapp => {
            let url = whatsapp::share_url(&order, &meetings, mode)?;
            println!("{url}");
            if open_artifact {
                open::that(&url)?;
            }
        }
        ExportFormat::Email => {
            let recipient = store.client_email(&order);
            let url = email::mailto_url(recipient.as_deref(), &order, &meetings, mode)?;
            println!("{url}");
            if open_artifact {
                open::that(&url)?;
            }
        }
    }

    Ok(())
}
