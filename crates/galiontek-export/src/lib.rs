//! Meeting export renderers.
//!
//! Three independently invokable renderers share the contract
//! `(order, meetings, unit mode) -> artifact`:
//!
//! - [`pdf::render`] — landscape RTL paginated PDF table, returned as bytes
//!   plus a `meetings-{order}-{YYYYMMDD}.pdf` filename;
//! - [`whatsapp::share_url`] — a pre-filled `https://wa.me/?text=...` link;
//! - [`email::mailto_url`] — a pre-filled `mailto:` link with an HTML table
//!   body.
//!
//! All three consume the row and summary text built in [`table`], so the
//! totals embedded in each artifact are byte-for-byte identical for the same
//! input. Renderers refuse empty meeting lists; callers guard in the UI
//! layer. None of them perform I/O — saving the file or opening the link is
//! the caller's job.

pub mod email;
pub mod error;
pub mod pdf;
pub mod table;
pub mod whatsapp;

pub use error::ExportError;
pub use pdf::PdfExport;

#[cfg(test)]
mod consistency_tests;
