use crate::error::ParseError;
use crate::model::TransactionNarrative;

/// Разделяет текст mt940-сообщения на проводки: строка :61: плюс весь
/// относящийся к ней текст описания (:86: и строки-продолжения).
///
/// Принимает как документ в SWIFT-обёртке `{4: ... -}`, так и голые
/// строки тегов. Даты, суммы и балансы здесь сознательно не разбираются:
/// слою извлечения полей нужны только две строки на проводку.
pub fn split_transactions(text: &str) -> Result<Vec<TransactionNarrative>, ParseError> {
    let body = message_body(text);

    let mut records: Vec<TransactionNarrative> = Vec::new();
    let mut current: Option<Record> = None;

    for raw_line in body.lines() {
        let line = raw_line.trim_end_matches('\r');
        let line_trimmed = line.trim_start();

        if line_trimmed.is_empty() {
            continue;
        }

        // конец текстового блока
        if line_trimmed == "-" || line_trimmed.starts_with("-}") || line_trimmed.starts_with('}') {
            break;
        }

        if line_trimmed.starts_with(':') {
            let (tag, value) = split_tag_line(line_trimmed)?;

            match tag {
                "61" => {
                    // закрываем предыдущую проводку
                    if let Some(record) = current.take() {
                        records.push(record.finish());
                    }
                    current = Some(Record::new(value));
                }
                "86" => {
                    if let Some(record) = current.as_mut() {
                        record.push_description_line(value);
                    }
                }
                // заголовки и балансы для извлечения полей не нужны
                "20" | "21" | "25" | "28" | "28C" | "60F" | "60M" | "62F" | "62M" | "64"
                | "65" => {}
                other => {
                    eprintln!("skipped unknown tag {other}: {value}");
                }
            }
        } else if let Some(record) = current.as_mut() {
            // строка без ':' - продолжение описания;
            // ведущие пробелы сохраняем, колонкам диалекта они важны
            record.push_description_line(line);
        }
    }

    // не забываем последнюю проводку
    if let Some(record) = current.take() {
        records.push(record.finish());
    }

    if records.is_empty() {
        return Err(ParseError::BadInput(
            "no :61: transaction lines found".into(),
        ));
    }

    Ok(records)
}

/// Текстовый блок сообщения: содержимое после `{4:`, либо весь текст,
/// если SWIFT-обёртки нет
fn message_body(text: &str) -> &str {
    match text.find("{4:") {
        Some(pos) => &text[pos + 3..],
        None => text,
    }
}

/// Разделяет строку с тегом на сам тег и значение после него
fn split_tag_line(line: &str) -> Result<(&str, &str), ParseError> {
    let line = line.trim_start();
    if !line.starts_with(':') {
        return Err(ParseError::Mt940Tag("tag line must start with ':'".into()));
    }

    let rest = &line[1..];
    let tag_end_pos = rest
        .find(':')
        .ok_or_else(|| ParseError::Mt940Tag(format!("bad tag line (unclosed tag): {line}")))?;

    let (tag_raw, value_with_colon) = rest.split_at(tag_end_pos);
    let tag = tag_raw.trim();
    let value = &value_with_colon[1..];

    Ok((tag, value))
}

struct Record {
    transaction_line: String,
    description_lines: Vec<String>,
}

impl Record {
    fn new(value: &str) -> Self {
        Record {
            transaction_line: value.trim().to_string(),
            description_lines: Vec::new(),
        }
    }

    fn push_description_line(&mut self, line: &str) {
        self.description_lines.push(line.to_string());
    }

    fn finish(self) -> TransactionNarrative {
        let description_block = if self.description_lines.is_empty() {
            None
        } else {
            // склейка через CRLF: правила диалектов опираются на границы строк
            Some(self.description_lines.join("\r\n"))
        };

        TransactionNarrative::new(Some(self.transaction_line), description_block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // split_tag_line

    #[test]
    fn split_tag_line_parses_valid_line() {
        let (tag, value) = split_tag_line(":61:1105240524D9,N192NONREF").unwrap();
        assert_eq!(tag, "61");
        assert_eq!(value, "1105240524D9,N192NONREF");
    }

    #[test]
    fn split_tag_line_fails_if_no_leading_colon() {
        let err = split_tag_line("61:ABC").unwrap_err();
        assert!(matches!(err, ParseError::Mt940Tag(_)));
    }

    #[test]
    fn split_tag_line_fails_if_no_second_colon() {
        let err = split_tag_line(":61ABC").unwrap_err();
        assert!(matches!(err, ParseError::Mt940Tag(_)));
    }

    // split_transactions

    const BARE: &str = ":20:REF\n\
                        :25:517852467\n\
                        :60F:C110522EUR3236,28\n\
                        :61:1105240524D9,N192NONREF\n\
                        :86:GIRO   428428 KPN - DIGITENNE    BETALINGSKENM.  000000042188659\n\
                        5314606715                       BETREFT FACTUUR D.D. 20-05-2011\n\
                        :61:1105210524D19,95N422NONREF\n\
                        :86:/TRTP/SEPA OVERBOEKING/IBAN/NL47ABNA0588358752/NAME/GREENCHOICE/\n\
                        :62F:C110524EUR3206,33";

    #[test]
    fn split_transactions_pairs_61_with_86_and_continuations() {
        let records = split_transactions(BARE).unwrap();

        assert_eq!(records.len(), 2);

        assert_eq!(
            records[0].transaction_line.as_deref(),
            Some("1105240524D9,N192NONREF")
        );
        // строки описания склеены через CRLF, граница первой строки сохранена
        let block = records[0].description_block.as_deref().unwrap();
        assert!(block.starts_with("GIRO   428428 KPN - DIGITENNE"));
        assert!(block.contains("\r\n5314606715"));

        assert_eq!(
            records[1].description_block.as_deref(),
            Some("/TRTP/SEPA OVERBOEKING/IBAN/NL47ABNA0588358752/NAME/GREENCHOICE/")
        );
    }

    #[test]
    fn split_transactions_handles_swift_framed_documents() {
        let framed = format!("{{1:F01ABNANL2AXXXX}}{{2:O940}}{{4:\n{BARE}\n-}}\n");
        let framed_records = split_transactions(&framed).unwrap();
        let bare_records = split_transactions(BARE).unwrap();
        assert_eq!(framed_records, bare_records);
    }

    #[test]
    fn split_transactions_errors_without_any_61_line() {
        let err = split_transactions(":20:REF\n:25:517852467").unwrap_err();
        assert!(matches!(err, ParseError::BadInput(_)));
    }

    #[test]
    fn split_transactions_keeps_last_record_without_trailing_tag() {
        let records = split_transactions(":61:1105240524D9,N192NONREF\n:86:text").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description_block.as_deref(), Some("text"));
    }

    #[test]
    fn split_transactions_record_without_86_has_no_description_block() {
        let records = split_transactions(":61:1105240524D9,N192NONREF").unwrap();
        assert_eq!(records[0].description_block, None);
    }
}
