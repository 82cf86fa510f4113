mod utils;

use crate::dialect::Dialect;
use crate::model::TransactionNarrative;
use utils::*;

/// Диалект ABN AMRO.
///
/// Блок описания у этого банка - наложение нескольких несовместимых
/// соглашений об одном и том же: фиксированные колонки, инлайновые
/// токены вида /IBAN/../, и вложенный key-value подформат
/// `OMSCHRIJVING: ` у SEPA-инкассо. Для каждого поля правила
/// проверяются по порядку, побеждает первое совпавшее.
pub struct AbnAmro;

impl Dialect for AbnAmro {
    fn name(&self) -> &'static str {
        "abnamro"
    }

    /// Документ ABN AMRO начинается с литерала ABNANL
    fn accept(&self, raw: &str) -> bool {
        raw.as_bytes().starts_with(b"ABNANL")
    }

    fn contra_account_number(&self, narrative: &TransactionNarrative) -> Option<String> {
        let block = narrative.description_block.as_deref()?;

        // ведущий номер с точками-разделителями, точки выбрасываем
        if let Some(caps) = NUMBER_RE.captures(block) {
            return Some(caps[1].replace('.', ""));
        }

        if let Some(caps) = GIRO_RE.captures(block) {
            return Some(caps[1].trim().to_string());
        }

        if let Some(caps) = IBAN_TOKEN_RE.captures(block) {
            return Some(caps[1].trim().to_string());
        }

        parse_structured(block).account_number
    }

    /// Имя контрагента.
    ///
    /// Самое хрупкое правило: место имени зависит от того, где в строке
    /// закончился совпавший шаблон номера счёта. Если номер найден,
    /// строка считается форматом с фиксированными колонками: имя занимает
    /// остаток первой 32-символьной колонки, а если тот пуст - вторую
    /// колонку (символы 32..64). Без номера имя берётся только из токена
    /// /NAME/../ или из вложенного подформата.
    fn contra_account_name(&self, narrative: &TransactionNarrative) -> Option<String> {
        let block = narrative.description_block.as_deref()?;
        let line = first_line(block);

        // колонка (в символах), с которой начинается остаток строки
        // после совпавшего шаблона номера
        let mut offset: Option<usize> = None;

        if let Some(caps) = NUMBER_TAIL_RE.captures(line) {
            offset = caps.get(1).map(|tail| char_offset(line, tail.start()));
        }

        // GIRO проверяется вторым и перекрывает смещение цифрового шаблона
        if let Some(caps) = GIRO_TAIL_RE.captures(line) {
            offset = caps.get(1).map(|tail| char_offset(line, tail.start()));
        }

        let Some(offset) = offset else {
            let joined = single_line(block);
            if let Some(caps) = NAME_TOKEN_RE.captures(&joined) {
                // значение токена возвращается как есть, без trim
                return Some(caps[1].to_string());
            }

            // номера нет - без /NAME/ и подформата имени тоже нет
            return parse_structured(block).account_name;
        };

        let name = column_slice(line, offset, 32);
        let name = name.trim();
        if !name.is_empty() {
            return Some(name.to_string());
        }

        let name = column_slice(line, 32, 64);
        let name = name.trim();
        if !name.is_empty() {
            return Some(name.to_string());
        }

        None
    }

    fn description(&self, narrative: &TransactionNarrative) -> String {
        let Some(block) = narrative.description_block.as_deref() else {
            return String::new();
        };

        if let Some(description) = parse_structured(block).description {
            return description;
        }

        // токен /REMI/../ может быть перенесён на следующую строку,
        // поэтому поиск идёт по склеенному в одну строку тексту
        let joined = single_line(block);
        if let Some(caps) = REMI_TOKEN_RE.captures(&joined) {
            let first_segment = caps[1].split('/').next().unwrap_or("");
            return first_segment.to_string();
        }

        // иначе исходный текст, только без маркеров переноса >20..>27
        CONTINUATION_RE.replace_all(block, "").into_owned()
    }
}
