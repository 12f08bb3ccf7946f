//! Read the active worksheet of an uploaded spreadsheet as text rows
//!
//! The container format is detected from the bytes (xlsx, xlsm, xlsb, xls,
//! ods). For xlsx-family files the tab marked active in `xl/workbook.xml`
//! is read; every other format, or a workbook without that marker, uses the
//! first worksheet. Cells are addressed from A1 so that blank leading rows
//! and columns keep their positional meaning for the parser.

use std::io::{Cursor, Read};

use calamine::{open_workbook_auto_from_rs, Data, ExcelDateTime, Reader};
use chrono::Timelike;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::error::{Result, SheetError};
use crate::parser::parse_rows;
use crate::record::Record;

/// Workbook part holding the `<workbookView activeTab="..">` marker
const WORKBOOK_PART: &str = "xl/workbook.xml";

/// Render a date/time cell as ISO text: date only at midnight, else date and time.
///
/// Durations and serials outside chrono's range keep the raw serial number.
fn datetime_text(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        return dt.to_string();
    }

    match dt.as_datetime() {
        Some(value) if value.hour() == 0 && value.minute() == 0 && value.second() == 0 => {
            value.format("%Y-%m-%d").to_string()
        }
        Some(value) => value.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => dt.to_string(),
    }
}

/// Render a cell as the text a user sees in the sheet
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            // Whole numbers are stored as floats; print them without ".0"
            if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(true) => "TRUE".to_string(),
        Data::Bool(false) => "FALSE".to_string(),
        Data::DateTime(dt) => datetime_text(dt),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(_) => String::new(),
    }
}

/// Index of the active tab recorded in an xlsx workbook, if any.
///
/// Returns `None` for non-zip input, a missing workbook part, or a
/// `workbookView` without a readable `activeTab`.
fn active_tab(bytes: &[u8]) -> Option<usize> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).ok()?;
    let mut xml = String::new();
    archive
        .by_name(WORKBOOK_PART)
        .ok()?
        .read_to_string(&mut xml)
        .ok()?;

    let mut reader = quick_xml::Reader::from_str(&xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e))
                if e.local_name().as_ref() == b"workbookView" =>
            {
                let attr = e.try_get_attribute("activeTab").ok()??;
                return std::str::from_utf8(&attr.value).ok()?.parse().ok();
            }
            Ok(Event::Eof) | Err(_) => return None,
            Ok(_) => {}
        }
    }
}

/// Open a spreadsheet held in memory and return its active worksheet as rows of text.
///
/// Trailing empty cells are trimmed from each row, so a short row yields
/// fewer cells rather than padding.
pub fn read_rows(bytes: &[u8]) -> Result<Vec<Vec<String>>> {
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|e| SheetError::open(e.to_string()))?;

    let sheet_count = workbook.sheet_names().len();
    let index = active_tab(bytes)
        .filter(|idx| *idx < sheet_count)
        .unwrap_or(0);

    let range = workbook
        .worksheet_range_at(index)
        .ok_or_else(|| SheetError::parse("workbook has no worksheets"))?
        .map_err(|e| SheetError::parse(e.to_string()))?;

    let Some((end_row, end_col)) = range.end() else {
        return Ok(Vec::new());
    };

    let mut rows = Vec::with_capacity(end_row as usize + 1);
    for row_idx in 0..=end_row {
        let mut row: Vec<String> = (0..=end_col)
            .map(|col_idx| {
                range
                    .get_value((row_idx, col_idx))
                    .map(cell_text)
                    .unwrap_or_default()
            })
            .collect();

        while row.last().is_some_and(|cell| cell.is_empty()) {
            row.pop();
        }
        rows.push(row);
    }

    tracing::debug!(sheet = index, rows = rows.len(), "read worksheet");
    Ok(rows)
}

/// Read a spreadsheet and map every row after the header to a [`Record`].
pub fn import_records(bytes: &[u8]) -> Result<Vec<Record>> {
    let rows = read_rows(bytes)?;
    Ok(parse_rows(&rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::{Format, Workbook};

    fn workbook_bytes(cells: &[(u32, u16, &str)]) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (row, col, text) in cells {
            sheet.write_string(*row, *col, *text).unwrap();
        }
        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn reads_alice_example() {
        let bytes = workbook_bytes(&[
            (0, 0, "Name"),
            (0, 1, "Age"),
            (0, 2, "Sex"),
            (0, 3, "Address"),
            (1, 0, "Alice"),
            (1, 1, "30"),
            (1, 2, "F"),
            (1, 3, "Wonderland"),
        ]);

        let records = import_records(&bytes).unwrap();
        assert_eq!(records, vec![Record::new("Alice", 30, "F", "Wonderland")]);
    }

    #[test]
    fn numeric_cells_render_without_fraction() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Name").unwrap();
        sheet.write_string(1, 0, "Eve").unwrap();
        sheet.write_number(1, 1, 52.0).unwrap();
        sheet.write_number(2, 1, 12.5).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let rows = read_rows(&bytes).unwrap();
        assert_eq!(rows[1], vec!["Eve", "52"]);
        assert_eq!(rows[2], vec!["", "12.5"]);

        let records = parse_rows(&rows);
        assert_eq!(records[0].age, 52);
        // Fractional ages do not coerce
        assert_eq!(records[1].age, 0);
    }

    #[test]
    fn positions_are_absolute() {
        // Nothing in column A or row 1: values must not shift left or up
        let bytes = workbook_bytes(&[(1, 1, "30"), (2, 3, "Somewhere")]);

        let rows = read_rows(&bytes).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_empty());

        let records = parse_rows(&rows);
        assert_eq!(records[0], Record::new("", 30, "", ""));
        assert_eq!(records[1], Record::new("", 0, "", "Somewhere"));
    }

    #[test]
    fn first_worksheet_without_active_marker() {
        let mut workbook = Workbook::new();
        let first = workbook.add_worksheet();
        first.write_string(0, 0, "Name").unwrap();
        first.write_string(1, 0, "First").unwrap();
        let second = workbook.add_worksheet();
        second.write_string(0, 0, "Name").unwrap();
        second.write_string(1, 0, "Second").unwrap();
        second.write_string(2, 0, "Other").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        assert_eq!(active_tab(&bytes), None);

        let records = import_records(&bytes).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "First");
    }

    #[test]
    fn active_worksheet_is_read() {
        let mut workbook = Workbook::new();
        let first = workbook.add_worksheet();
        first.write_string(0, 0, "Name").unwrap();
        first.write_string(1, 0, "First").unwrap();
        let second = workbook.add_worksheet();
        second.write_string(0, 0, "Name").unwrap();
        second.write_string(1, 0, "Second").unwrap();
        second.set_active(true);
        let bytes = workbook.save_to_buffer().unwrap();

        assert_eq!(active_tab(&bytes), Some(1));

        let records = import_records(&bytes).unwrap();
        assert_eq!(records, vec![Record::new("Second", 0, "", "")]);
    }

    #[test]
    fn active_tab_absent_for_non_zip() {
        assert_eq!(active_tab(b"plain text"), None);
    }

    #[test]
    fn date_cells_render_as_iso_text() {
        let date = Format::new().set_num_format("yyyy-mm-dd");
        let stamp = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Name").unwrap();
        sheet.write_string(1, 0, "Dee").unwrap();
        sheet.write_number_with_format(1, 3, 45000.0, &date).unwrap();
        sheet.write_string(2, 0, "Eli").unwrap();
        sheet.write_number_with_format(2, 3, 45000.5, &stamp).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let rows = read_rows(&bytes).unwrap();
        assert_eq!(rows[1], vec!["Dee", "", "", "2023-03-15"]);
        assert_eq!(rows[2], vec!["Eli", "", "", "2023-03-15 12:00:00"]);

        let records = parse_rows(&rows);
        assert_eq!(records[0].address, "2023-03-15");
    }

    #[test]
    fn empty_sheet_has_no_rows() {
        let bytes = workbook_bytes(&[]);
        assert!(read_rows(&bytes).unwrap().is_empty());
        assert!(import_records(&bytes).unwrap().is_empty());
    }

    #[test]
    fn rejects_non_spreadsheet_bytes() {
        let err = read_rows(b"name,age,sex,address\nAlice,30,F,Wonderland\n").unwrap_err();
        assert!(matches!(err, SheetError::Open { .. }));
    }
}
