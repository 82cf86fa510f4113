pub mod error;
pub mod model;
pub mod dialect;
pub mod records;
pub mod abnamro;

pub use crate::model::{ExtractedFields, StructuredFields, TransactionNarrative};
pub use crate::dialect::{Dialect, detect};
pub use crate::abnamro::AbnAmro;
pub use crate::records::split_transactions;
pub use crate::error::ParseError;
