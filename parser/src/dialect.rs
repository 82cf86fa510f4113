use crate::model::{ExtractedFields, TransactionNarrative};

/// Диалект банка: проверка принадлежности документа и извлечение
/// полей контрагента из свободного текста проводки.
///
/// Все операции - чистые функции от входного текста, без состояния
/// между вызовами; проводки можно обрабатывать в любом порядке и
/// параллельно.
pub trait Dialect: Sync {
    /// Имя диалекта для логов и вывода CLI
    fn name(&self) -> &'static str;

    /// Принадлежит ли документ этому диалекту
    fn accept(&self, raw: &str) -> bool;

    /// Номер счёта контрагента, если его удалось найти
    fn contra_account_number(&self, narrative: &TransactionNarrative) -> Option<String>;

    /// Имя контрагента, если его удалось найти
    fn contra_account_name(&self, narrative: &TransactionNarrative) -> Option<String>;

    /// Описание проводки; всегда строка, в худшем случае пустая
    fn description(&self, narrative: &TransactionNarrative) -> String;

    /// Фасад: все три поля одной проводки за один вызов
    fn extract(&self, narrative: &TransactionNarrative) -> ExtractedFields {
        ExtractedFields {
            contra_account_number: self.contra_account_number(narrative),
            contra_account_name: self.contra_account_name(narrative),
            description: self.description(narrative),
        }
    }
}

/// Известные диалекты; проверяются по порядку
static DIALECTS: &[&dyn Dialect] = &[&crate::abnamro::AbnAmro];

/// Возвращает первый диалект, принявший документ
pub fn detect(raw: &str) -> Option<&'static dyn Dialect> {
    DIALECTS.iter().copied().find(|dialect| dialect.accept(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_routes_abnanl_prefix_to_abnamro() {
        let dialect = detect("ABNANL2A\n940\n:20:REF").expect("ABNANL text should be accepted");
        assert_eq!(dialect.name(), "abnamro");
    }

    #[test]
    fn detect_returns_none_for_other_banks() {
        assert!(detect("INGBNL2A\n940\n:20:REF").is_none());
        assert!(detect("").is_none());
        // префикс короче шести байт недостаточен
        assert!(detect("ABNAN").is_none());
    }

    #[test]
    fn extract_facade_combines_all_three_fields() {
        let dialect = detect("ABNANL2A").unwrap();
        let narrative = TransactionNarrative::new(
            None,
            Some("GIRO123456789 ACME CORP".to_string()),
        );

        let fields = dialect.extract(&narrative);

        assert_eq!(fields.contra_account_number.as_deref(), Some("123456789"));
        assert_eq!(fields.contra_account_name.as_deref(), Some("ACME CORP"));
        assert_eq!(fields.description, "GIRO123456789 ACME CORP");
    }
}
