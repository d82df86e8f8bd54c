//! Output surface the handlers write to.
//!
//! A front end implements `View` for its own toolkit: a browser table, a
//! terminal, or the in-memory `MemoryView` used by tests.

/// One row of the people table, already flattened to text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    pub name: String,
    pub surname: String,
    pub sex: String,
    pub email_addresses: String,
    pub phone_numbers: String,
}

impl TableRow {
    pub const HEADERS: [&'static str; 5] = ["Name", "Surname", "Sex", "Email addresses", "Phone numbers"];

    pub fn cells(&self) -> [&str; 5] {
        [
            &self.name,
            &self.surname,
            &self.sex,
            &self.email_addresses,
            &self.phone_numbers,
        ]
    }
}

/// The three regions a handler may touch.
pub trait View {
    /// Replace the whole table body.
    fn replace_table(&mut self, rows: Vec<TableRow>);

    /// Replace the whole filter-results region, one paragraph per entry.
    fn replace_list(&mut self, paragraphs: Vec<String>);

    /// Show a message the user has to acknowledge.
    fn notify(&mut self, message: &str);
}

/// `View` that just records what it was given.
#[derive(Debug, Default, Clone)]
pub struct MemoryView {
    pub table: Vec<TableRow>,
    pub list: Vec<String>,
    pub notifications: Vec<String>,
}

impl View for MemoryView {
    fn replace_table(&mut self, rows: Vec<TableRow>) {
        self.table = rows;
    }

    fn replace_list(&mut self, paragraphs: Vec<String>) {
        self.list = paragraphs;
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}
