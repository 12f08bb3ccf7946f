//! Row-to-record mapping
//!
//! The first row is a header and is always dropped without inspection.
//! Every later row becomes exactly one record, in input order, using the
//! fixed column layout `name, age, sex, address`.

use crate::record::Record;

/// Convert spreadsheet rows into records, skipping the header row.
pub fn parse_rows<C: AsRef<str>>(rows: &[Vec<C>]) -> Vec<Record> {
    rows.iter()
        .skip(1)
        .map(|row| Record::from_cells(row.as_slice()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn skips_header() {
        let input = rows(&[
            &["Name", "Age", "Sex", "Address"],
            &["Alice", "30", "F", "Wonderland"],
        ]);
        let records = parse_rows(&input);
        assert_eq!(records, vec![Record::new("Alice", 30, "F", "Wonderland")]);
    }

    #[test]
    fn header_content_is_not_checked() {
        let input = rows(&[&["Alice", "30", "F", "Wonderland"], &["Bob", "25", "M", "Nowhere"]]);
        let records = parse_rows(&input);
        assert_eq!(records, vec![Record::new("Bob", 25, "M", "Nowhere")]);
    }

    #[test]
    fn empty_and_header_only_inputs() {
        assert!(parse_rows::<String>(&[]).is_empty());
        assert!(parse_rows(&rows(&[&["Name", "Age", "Sex", "Address"]])).is_empty());
    }

    #[test]
    fn bad_age_defaults_to_zero() {
        let input = rows(&[&["h"], &["Bob", "notanumber", "M", "Nowhere"]]);
        assert_eq!(parse_rows(&input), vec![Record::new("Bob", 0, "M", "Nowhere")]);
    }

    #[test]
    fn blank_row_becomes_zero_record() {
        let input = rows(&[&["h"], &[], &["Dan", "5"]]);
        assert_eq!(
            parse_rows(&input),
            vec![Record::default(), Record::new("Dan", 5, "", "")]
        );
    }

    #[test]
    fn preserves_row_order() {
        let input = rows(&[
            &["h"],
            &["c", "3"],
            &["a", "1"],
            &["b", "2"],
        ]);
        let names: Vec<_> = parse_rows(&input).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }
}
