use std::io::Error as IoError;
use thiserror::Error;

/// Ошибки при разборе данных
///
/// Само извлечение полей из текста проводки ошибок не порождает:
/// любое правило либо срабатывает, либо уступает следующему.
/// Ошибки возможны только при чтении входа и разборе тегов сообщения.
#[derive(Debug, Error)]
pub enum ParseError {
    /// обёртка std::io::Error
    #[error("io error: {0}")]
    Io(#[from] IoError),

    /// очень общая ошибка плохих входных данных
    #[error("bad input: {0}")]
    BadInput(String),

    /// ошибка парсинга тега mt940
    #[error("bad mt940 tag: {0}")]
    Mt940Tag(String),
}
