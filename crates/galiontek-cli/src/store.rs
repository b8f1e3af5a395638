//! The JSON data file.
//!
//! The hosted row store (orders, clients, meetings tables) lives outside
//! this codebase; locally a single JSON document stands in for it. Reads
//! are equality-filtered by order id; meeting lists come back sorted by
//! date then start time, which is the order every export preserves.

use std::path::{Path, PathBuf};

use galiontek_core::meeting::Meeting;
use galiontek_core::order::{ClientRef, OrderRef};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// An order row as stored in the data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Order identifier.
    pub id: String,
    /// Order title.
    pub title: Option<String>,
    /// Client display name.
    pub client_name: Option<String>,
    /// Agreed/contracted total units.
    pub hours: Option<f64>,
}

impl OrderRecord {
    /// Converts the stored row into the export-facing reference.
    pub fn to_ref(&self) -> OrderRef {
        OrderRef {
            id: self.id.clone(),
            title: self.title.clone(),
            client_name: self.client_name.clone(),
            agreed_hours: self.hours,
        }
    }
}

/// The whole data document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataFile {
    /// Order rows.
    pub orders: Vec<OrderRecord>,
    /// Client rows.
    pub clients: Vec<ClientRef>,
    /// Meeting rows.
    pub meetings: Vec<Meeting>,
}

/// File-backed store over a [`DataFile`].
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    data: DataFile,
}

impl Store {
    /// Opens the store at `path`; a missing file yields an empty document.
    pub fn open(path: PathBuf) -> CliResult<Self> {
        let data = if path.exists() {
            let text = std::fs::read_to_string(&path)?;
            serde_json::from_str(&text)
                .map_err(|e| CliError::Store(format!("invalid data file {}: {}", path.display(), e)))?
        } else {
            debug!(path = %path.display(), "data file missing, starting empty");
            DataFile::default()
        };

        Ok(Self { path, data })
    }

    /// Writes the document back to disk, creating parent directories.
    pub fn save(&self) -> CliResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| CliError::Store(format!("failed to serialize data file: {}", e)))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Looks up an order by id.
    pub fn order(&self, order_id: &str) -> Option<OrderRef> {
        self.data
            .orders
            .iter()
            .find(|o| o.id == order_id)
            .map(OrderRecord::to_ref)
    }

    /// Resolves the email address of the order's client, if both exist.
    pub fn client_email(&self, order: &OrderRef) -> Option<String> {
        let client_name = order.client_name.as_deref()?;
        self.data
            .clients
            .iter()
            .find(|c| c.name == client_name)
            .and_then(|c| c.email.clone())
    }

    /// The meetings belonging to an order, sorted by date then start time.
    pub fn meetings_for_order(&self, order_id: &str) -> Vec<Meeting> {
        let mut meetings: Vec<Meeting> = self
            .data
            .meetings
            .iter()
            .filter(|m| m.order_id == order_id)
            .cloned()
            .collect();
        meetings.sort_by_key(|m| (m.date, m.start_time));
        meetings
    }

    /// Appends validated meetings to the document (not yet saved).
    pub fn add_meetings(&mut self, meetings: Vec<Meeting>) {
        self.data.meetings.extend(meetings);
    }

    /// Inserts or replaces an order row (not yet saved).
    pub fn upsert_order(&mut self, record: OrderRecord) {
        if let Some(existing) = self.data.orders.iter_mut().find(|o| o.id == record.id) {
            *existing = record;
        } else {
            self.data.orders.push(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn meeting(id: &str, order: &str, d: NaiveDate, start: &str, end: &str) -> Meeting {
        Meeting::new(id, order, d, start, end, None).unwrap()
    }

    fn temp_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("data.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn missing_file_starts_empty() {
        let (_dir, store) = temp_store();
        assert!(store.order("o-1").is_none());
        assert!(store.meetings_for_order("o-1").is_empty());
    }

    #[test]
    fn save_and_reload_roundtrip() {
        let (_dir, mut store) = temp_store();
        store.upsert_order(OrderRecord {
            id: "o-1".to_string(),
            title: Some("קורס".to_string()),
            client_name: Some("דנה".to_string()),
            hours: Some(10.0),
        });
        store.add_meetings(vec![meeting("m-1", "o-1", date(2025, 3, 2), "09:00", "10:30")]);
        store.save().unwrap();

        let reloaded = Store::open(store.path().to_path_buf()).unwrap();
        let order = reloaded.order("o-1").unwrap();
        assert_eq!(order.display_title(), "קורס");
        assert_eq!(order.agreed_hours, Some(10.0));
        assert_eq!(reloaded.meetings_for_order("o-1").len(), 1);
    }

    #[test]
    fn meetings_filtered_and_sorted() {
        let (_dir, mut store) = temp_store();
        store.add_meetings(vec![
            meeting("m-2", "o-1", date(2025, 3, 9), "09:00", "10:00"),
            meeting("m-3", "o-2", date(2025, 3, 1), "09:00", "10:00"),
            meeting("m-1", "o-1", date(2025, 3, 2), "14:00", "15:00"),
            meeting("m-4", "o-1", date(2025, 3, 2), "09:00", "10:00"),
        ]);

        let meetings = store.meetings_for_order("o-1");
        let ids: Vec<_> = meetings.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m-4", "m-1", "m-2"]);
    }

    #[test]
    fn client_email_resolution() {
        let (_dir, mut store) = temp_store();
        store.upsert_order(OrderRecord {
            id: "o-1".to_string(),
            title: None,
            client_name: Some("דנה".to_string()),
            hours: None,
        });
        store.data.clients.push(ClientRef {
            name: "דנה".to_string(),
            email: Some("dana@example.com".to_string()),
        });

        let order = store.order("o-1").unwrap();
        assert_eq!(store.client_email(&order).as_deref(), Some("dana@example.com"));

        // Unknown client resolves to no recipient, not an error.
        let other = OrderRef::new("o-9").with_client_name("אחר");
        assert!(store.client_email(&other).is_none());
    }

    #[test]
    fn corrupt_file_is_a_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "not json").unwrap();

        let err = Store::open(path).unwrap_err();
        assert!(matches!(err, CliError::Store(_)));
    }
}
