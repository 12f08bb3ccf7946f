use serde::{Deserialize, Serialize};

/// A single imported row: the only entity the service stores
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub age: i64,
    pub sex: String,
    pub address: String,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        age: i64,
        sex: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            sex: sex.into(),
            address: address.into(),
        }
    }

    /// Build a record from positional cells: name, age, sex, address.
    ///
    /// Cells past the fourth are ignored, missing cells leave the field at
    /// its zero value.
    pub fn from_cells<C: AsRef<str>>(cells: &[C]) -> Self {
        let mut record = Self::default();
        for (idx, cell) in cells.iter().take(4).enumerate() {
            let cell = cell.as_ref();
            match idx {
                0 => record.name = cell.to_string(),
                1 => record.age = coerce_int(cell),
                2 => record.sex = cell.to_string(),
                _ => record.address = cell.to_string(),
            }
        }
        record
    }
}

/// Lenient integer coercion shared by the parser and the query handlers.
///
/// Accepts an optional sign followed by ASCII digits. Anything else,
/// including surrounding whitespace, empty input and overflow, yields 0.
pub fn coerce_int(text: &str) -> i64 {
    text.parse::<i64>().unwrap_or(0)
}
