//! Page request types for the paged listing

use sheetport_core::coerce_int;

/// Page coordinates as coerced from the query string.
///
/// Values are not validated. Degenerate input maps onto "no offset" or
/// "no limit" instead of failing:
/// - the offset `(current - 1) * size` is applied only when positive
/// - the limit `size` is applied only when non-negative, so `size == 0`
///   yields an empty page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number, 1-indexed
    pub current: i64,
    /// Records per page
    pub size: i64,
}

impl PageRequest {
    pub fn new(current: i64, size: i64) -> Self {
        Self { current, size }
    }

    /// Rows to skip, or `None` when nothing should be skipped.
    pub fn offset(&self) -> Option<i64> {
        let offset = self.current.saturating_sub(1).saturating_mul(self.size);
        (offset > 0).then_some(offset)
    }

    /// Maximum rows to return, or `None` for no limit.
    pub fn limit(&self) -> Option<i64> {
        (self.size >= 0).then_some(self.size)
    }
}

/// Raw query parameters for `GET /getData/page`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageParams {
    pub current: Option<String>,
    pub size: Option<String>,
}

impl PageParams {
    /// Collect parameters from decoded query pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "current" => &mut params.current,
                "size" => &mut params.size,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

impl From<PageParams> for PageRequest {
    fn from(params: PageParams) -> Self {
        let coerce = |value: Option<String>| value.as_deref().map(coerce_int).unwrap_or(0);
        Self::new(coerce(params.current), coerce(params.size))
    }
}
