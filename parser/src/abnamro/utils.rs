use crate::model::StructuredFields;
use once_cell::sync::Lazy;
use regex::Regex;

/// Ведущий номер счёта: 11-14 символов из цифр и точек, затем пробел
pub(super) static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9.]{11,14}) ").unwrap());

/// Номер GIRO: литерал GIRO, 9 символов из цифр и пробелов, затем пробел
pub(super) static GIRO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^GIRO([0-9 ]{9}) ").unwrap());

/// Тот же номер счёта, но с захватом остатка строки.
/// Смещение группы нужно логике фиксированных колонок.
pub(super) static NUMBER_TAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9.]{11,14} (.*)$").unwrap());

/// GIRO с захватом остатка строки
pub(super) static GIRO_TAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^GIRO[0-9 ]{9} (.*)$").unwrap());

/// Инлайновый токен /IBAN/../
pub(super) static IBAN_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/IBAN/(\w+)/").unwrap());

/// Инлайновый токен /NAME/../
pub(super) static NAME_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/NAME/([a-zA-Z0-9\s.]+)/").unwrap());

/// Инлайновый токен /REMI/../; захват жадный, до последнего слэша
pub(super) static REMI_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/REMI/([a-zA-Z0-9\s.-].+)/").unwrap());

/// Маркеры переноса строки >20..>27
pub(super) static CONTINUATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r">2[0-7]").unwrap());

/// Маркер вложенного key-value подформата
pub(super) const OMSCHRIJVING_MARKER: &str = "OMSCHRIJVING: ";

/// Первая физическая строка блока (текст до первого CR или LF)
pub(super) fn first_line(text: &str) -> &str {
    text.split(['\r', '\n']).next().unwrap_or(text)
}

/// Склеивает блок в одну строку, убирая CR и LF
pub(super) fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], "")
}

/// Срез строки по колонкам в символах, не в байтах.
/// Выход за край строки безопасен и даёт укороченный результат.
pub(super) fn column_slice(line: &str, start: usize, end: usize) -> String {
    line.chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect()
}

/// Переводит байтовое смещение regex-совпадения в номер колонки (символы)
pub(super) fn char_offset(line: &str, byte_offset: usize) -> usize {
    line[..byte_offset].chars().count()
}

/// Разбирает вложенный подформат, размеченный `OMSCHRIJVING: `.
///
/// Без маркера возвращает пустую структуру. Блок режется на строки,
/// строки - на сегменты по двойному пробелу; каждый непустой сегмент
/// сверяется с известными префиксами. Повторившийся ключ перезаписывает
/// предыдущее значение.
pub(super) fn parse_structured(block: &str) -> StructuredFields {
    let mut fields = StructuredFields::default();

    if !single_line(block).contains(OMSCHRIJVING_MARKER) {
        return fields;
    }

    let cleaned = block.replace(['\r', '\t'], "");
    for line in cleaned.split('\n') {
        for segment in line.split("  ") {
            let token = segment.trim();
            if token.is_empty() {
                continue;
            }
            apply_token(&mut fields, token);
        }
    }

    fields
}

fn apply_token(fields: &mut StructuredFields, token: &str) {
    if let Some(value) = token.strip_prefix("NAAM: ") {
        fields.account_name = Some(value.to_string());
    } else if let Some(value) =
        token.strip_prefix("SEPA INCASSO ALGEMEEN DOORLOPEND INCASSANT: ")
    {
        fields.account_incasso = Some(value.to_string());
    } else if let Some(value) = token.strip_prefix("MACHTIGING: ") {
        fields.machtiging = Some(value.to_string());
    } else if let Some(value) = token.strip_prefix(OMSCHRIJVING_MARKER) {
        // единственное значение, которое дополнительно триммится
        fields.description = Some(value.trim().to_string());
    } else if let Some(value) = token.strip_prefix("IBAN: ") {
        fields.account_number = Some(value.to_string());
    } else if let Some(value) = token.strip_prefix("KENMERK: ") {
        fields.kenmerk = Some(value.to_string());
    }
}
