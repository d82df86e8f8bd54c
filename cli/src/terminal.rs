use std::io::Write;

use person_core::{TableRow, View};

/// Prints every view region to a writer, stdout in the binary.
pub struct TerminalView<W: Write> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            log::error!("failed to write output: {e}");
        }
    }
}

impl<W: Write> View for TerminalView<W> {
    fn replace_table(&mut self, rows: Vec<TableRow>) {
        let table = format_table(&rows);
        self.emit(&table);
    }

    fn replace_list(&mut self, paragraphs: Vec<String>) {
        for paragraph in paragraphs {
            self.emit(&paragraph);
        }
    }

    fn notify(&mut self, message: &str) {
        self.emit(message);
    }
}

/// Left-aligned columns separated by two spaces, header first.
pub fn format_table(rows: &[TableRow]) -> String {
    let mut widths = TableRow::HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_line(&TableRow::HEADERS, &widths));
    let rules = widths.map(|w| "-".repeat(w));
    lines.push(format_line(&rules.each_ref().map(String::as_str), &widths));
    for row in rows {
        lines.push(format_line(&row.cells(), &widths));
    }
    lines.join("\n")
}

fn format_line(cells: &[&str; 5], widths: &[usize; 5]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width - cell.chars().count();
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, emails: &str) -> TableRow {
        TableRow {
            name: name.to_string(),
            surname: "Horvat".to_string(),
            sex: "F".to_string(),
            email_addresses: emails.to_string(),
            phone_numbers: String::new(),
        }
    }

    #[test]
    fn columns_line_up() {
        let table = format_table(&[row("Ana", "ana@x.hr, a@y.hr"), row("Đurđa", "")]);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Name   Surname  Sex  Email addresses   Phone numbers");
        assert_eq!(lines[2], "Ana    Horvat   F    ana@x.hr, a@y.hr");
        assert_eq!(lines[3], "Đurđa  Horvat   F");
    }

    #[test]
    fn empty_table_is_just_headers() {
        let table = format_table(&[]);
        assert_eq!(table.lines().count(), 2);
    }

    #[test]
    fn view_writes_regions_in_order() {
        let mut view = TerminalView::new(Vec::new());
        view.replace_list(vec!["{\"name\":\"Ana\"}".to_string()]);
        view.notify("Error creating person: PIN is required");
        let out = String::from_utf8(view.into_inner()).unwrap();
        assert_eq!(out, "{\"name\":\"Ana\"}\nError creating person: PIN is required\n");
    }
}
