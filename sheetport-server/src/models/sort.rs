use std::cmp::Ordering;

use sheetport_core::Record;

/// Field a page of records is ordered by (always ascending)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Age,
    Sex,
    Address,
}

impl SortKey {
    /// Column identifier used in ORDER BY. Fixed strings only.
    pub fn column(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Age => "age",
            SortKey::Sex => "sex",
            SortKey::Address => "address",
        }
    }

    /// Ascending comparison on this field
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Age => a.age.cmp(&b.age),
            SortKey::Sex => a.sex.cmp(&b.sex),
            SortKey::Address => a.address.cmp(&b.address),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_by_selected_field() {
        let young = Record::new("Zed", 20, "M", "A");
        let old = Record::new("Amy", 60, "F", "B");

        assert_eq!(SortKey::Age.compare(&young, &old), Ordering::Less);
        assert_eq!(SortKey::Name.compare(&young, &old), Ordering::Greater);
        assert_eq!(SortKey::Age.to_string(), "age");
    }
}
