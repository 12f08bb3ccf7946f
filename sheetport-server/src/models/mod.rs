//! Request and response models

pub mod pagination;
pub mod response;
pub mod sort;

pub use pagination::{PageParams, PageRequest};
pub use response::{DataResponse, MessageResponse};
pub use sort::SortKey;
