use serde::Serialize;

/// Две строки одной проводки, как их отдаёт разбор сообщения:
/// строка :61: и свободный текст описания (:86: плюс строки-продолжения).
///
/// Обе строки опциональны: у кривых выписок любая из них может
/// отсутствовать, и это не считается ошибкой.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionNarrative {
    /// строка проводки :61:, как есть
    pub transaction_line: Option<String>,

    /// блок описания; может содержать CR/LF внутри
    pub description_block: Option<String>,
}

impl TransactionNarrative {
    /// Go to [`TransactionNarrative`]
    pub fn new(transaction_line: Option<String>, description_block: Option<String>) -> Self {
        TransactionNarrative {
            transaction_line,
            description_block,
        }
    }
}

/// Результат извлечения полей из свободного текста одной проводки.
///
/// Все поля независимы: отсутствие одного ничего не говорит о других.
/// Описание всегда присутствует (в худшем случае - слегка почищенный
/// исходный текст, либо пустая строка при отсутствии блока описания).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedFields {
    /// номер счёта контрагента
    pub contra_account_number: Option<String>,

    /// имя контрагента
    pub contra_account_name: Option<String>,

    /// текстовое описание проводки
    pub description: String,
}

/// Поля вложенного key-value подформата, размеченного маркером
/// `OMSCHRIJVING: ` (SEPA-инкассо у ABN AMRO).
///
/// Набор ключей закрыт, неизвестный ключ невозможен по построению.
/// Отсутствующее поле означает, что ключа в тексте не было.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredFields {
    /// `NAAM: ` - имя контрагента
    pub account_name: Option<String>,

    /// `IBAN: ` - номер счёта контрагента
    pub account_number: Option<String>,

    /// `OMSCHRIJVING: ` - описание платежа
    pub description: Option<String>,

    /// `SEPA INCASSO ALGEMEEN DOORLOPEND INCASSANT: ` - идентификатор инкассанта
    pub account_incasso: Option<String>,

    /// `MACHTIGING: ` - номер мандата SEPA
    pub machtiging: Option<String>,

    /// `KENMERK: ` - референс мандата
    pub kenmerk: Option<String>,
}
