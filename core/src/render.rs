//! Presentation strategies for a list query result.
//!
//! The same query feeds either the people table or the raw filter-results
//! list; the caller picks the `Renderer`.

use crate::types::PersonRecord;
use crate::view::{TableRow, View};

/// Which view region a renderer writes to. List requests are sequenced per
/// target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Table,
    List,
}

pub trait Renderer {
    fn target(&self) -> Target;

    /// Replace the renderer's region with `records`, keeping their order.
    fn render(&self, records: &[PersonRecord], view: &mut dyn View);
}

/// One table row per record; list fields are comma-joined.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer;

impl TableRenderer {
    pub fn row(record: &PersonRecord) -> TableRow {
        TableRow {
            name: record.name().unwrap_or_default(),
            surname: record.surname().unwrap_or_default(),
            sex: record.sex().unwrap_or_default(),
            email_addresses: joined(record.email_addresses()),
            phone_numbers: joined(record.phone_numbers()),
        }
    }
}

impl Renderer for TableRenderer {
    fn target(&self) -> Target {
        Target::Table
    }

    fn render(&self, records: &[PersonRecord], view: &mut dyn View) {
        view.replace_table(records.iter().map(Self::row).collect());
    }
}

/// One paragraph per record holding its JSON text as the server sent it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListRenderer;

impl ListRenderer {
    pub fn paragraph(record: &PersonRecord) -> String {
        record.to_json()
    }
}

impl Renderer for ListRenderer {
    fn target(&self) -> Target {
        Target::List
    }

    fn render(&self, records: &[PersonRecord], view: &mut dyn View) {
        view.replace_list(records.iter().map(Self::paragraph).collect());
    }
}

fn joined(values: Option<Vec<String>>) -> String {
    values.map(|v| v.join(", ")).unwrap_or_default()
}
