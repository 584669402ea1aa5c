// crates/devicedb-core/src/loader/parse.rs
use crate::error::{MalformedRow, MalformedRowKind, Result};
use crate::model::record::{RawRecord, REQUIRED_COLUMNS};
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::warn;

/// A strict parse reporting more "too many fields" rows than this is
/// redone with [`FieldPolicy::Lenient`].
pub const TOO_MANY_FIELDS_THRESHOLD: usize = 10;

/// Whether a row whose field count differs from the header's is reported.
///
/// Such rows are kept either way: fields map to columns by position, surplus
/// fields are ignored and missing trailing ones are absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPolicy {
    /// Keep the row and report it as malformed.
    Strict,
    /// Keep the row silently.
    Lenient,
}

#[derive(Debug, Default)]
pub struct ParsedCsv {
    pub rows: Vec<RawRecord>,
    pub malformed: Vec<MalformedRow>,
}

impl ParsedCsv {
    pub fn too_many_fields(&self) -> usize {
        self.malformed
            .iter()
            .filter(|row| row.kind.is_too_many_fields())
            .count()
    }
}

/// Parses CSV text with a header row.
///
/// `,` delimited, `"` quoted with `""` as the escape, headers and cells
/// trimmed, empty lines skipped. Only an unreadable header row is an error.
/// Unreadable data rows are dropped and field-count mismatches kept; both
/// end up in [`ParsedCsv::malformed`].
pub fn parse_csv(text: &str, policy: FieldPolicy) -> Result<ParsedCsv> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .quote(b'"')
        .double_quote(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = ColumnMap::new(&headers);
    let expected = headers.len();

    let mut out = ParsedCsv::default();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                out.malformed.push(MalformedRow {
                    line,
                    kind: MalformedRowKind::Unreadable(e.to_string()),
                });
                continue;
            }
        };

        let found = record.len();
        if found != expected && policy == FieldPolicy::Strict {
            let kind = if found > expected {
                MalformedRowKind::TooManyFields { expected, found }
            } else {
                MalformedRowKind::TooFewFields { expected, found }
            };
            out.malformed.push(MalformedRow {
                line: record.position().map(|p| p.line()).unwrap_or_default(),
                kind,
            });
        }

        out.rows.push(columns.raw_record(&record));
    }
    Ok(out)
}

/// Strict parse, falling back to a lenient one when more than `threshold`
/// rows carry too many fields.
pub fn parse_with_fallback(text: &str, threshold: usize) -> Result<ParsedCsv> {
    let strict = parse_csv(text, FieldPolicy::Strict)?;
    let too_many = strict.too_many_fields();
    if too_many <= threshold {
        return Ok(strict);
    }

    warn!(
        too_many_fields = too_many,
        threshold, "many rows have surplus fields, re-parsing with lenient field counts"
    );
    parse_csv(text, FieldPolicy::Lenient)
}

/// Header position of each known column.
struct ColumnMap<'h> {
    positions: Vec<(usize, &'h str)>,
}

impl<'h> ColumnMap<'h> {
    fn new(headers: &'h StringRecord) -> Self {
        let positions = headers
            .iter()
            .enumerate()
            .filter(|(_, name)| REQUIRED_COLUMNS.contains(name))
            .collect();
        Self { positions }
    }

    fn raw_record(&self, record: &StringRecord) -> RawRecord {
        let mut raw = RawRecord::default();
        for &(idx, name) in &self.positions {
            if let (Some(value), Some(slot)) = (record.get(idx), raw.slot_mut(name)) {
                *slot = Some(value.to_string());
            }
        }
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "model,dtype,brand,brand_title,code,code_alias,model_name,ver_name";

    fn with_rows(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn trims_headers_and_cells() {
        let text = " model , brand ,model_name\n  A2849 , apple ,  iPhone 15 Pro Max \n";
        let parsed = parse_csv(text, FieldPolicy::Strict).unwrap();
        assert_eq!(parsed.rows.len(), 1);
        let row = &parsed.rows[0];
        assert_eq!(row.model.as_deref(), Some("A2849"));
        assert_eq!(row.brand.as_deref(), Some("apple"));
        assert_eq!(row.model_name.as_deref(), Some("iPhone 15 Pro Max"));
        assert_eq!(row.code, None);
    }

    #[test]
    fn quoted_fields_keep_commas_and_escaped_quotes() {
        let text = with_rows(&[r#"A2849,mob,apple,Apple,"iPhone16,2",,"iPhone 15 ""Pro"" Max",国行版"#]);
        let parsed = parse_csv(&text, FieldPolicy::Strict).unwrap();
        let row = &parsed.rows[0];
        assert_eq!(row.code.as_deref(), Some("iPhone16,2"));
        assert_eq!(row.model_name.as_deref(), Some(r#"iPhone 15 "Pro" Max"#));
    }

    #[test]
    fn empty_lines_are_skipped() {
        let text = with_rows(&["", "M1,mob,xiaomi,小米,fuxi,,Xiaomi 13,国行版", "", ""]);
        let parsed = parse_csv(&text, FieldPolicy::Strict).unwrap();
        assert_eq!(parsed.rows.len(), 1);
        assert!(parsed.malformed.is_empty());
    }

    #[test]
    fn strict_policy_keeps_and_reports_mismatched_rows() {
        let text = with_rows(&[
            "M1,mob,xiaomi,小米,fuxi,,Xiaomi 13,国行版,extra",
            "M2,mob,xiaomi",
            "M3,mob,xiaomi,小米,fuxi,,Xiaomi 13,国际版",
        ]);
        let parsed = parse_csv(&text, FieldPolicy::Strict).unwrap();
        assert_eq!(parsed.rows.len(), 3);
        assert_eq!(parsed.rows[0].ver_name.as_deref(), Some("国行版"));
        assert_eq!(parsed.rows[1].brand.as_deref(), Some("xiaomi"));
        assert_eq!(parsed.rows[1].model_name, None);
        assert_eq!(parsed.malformed.len(), 2);
        assert_eq!(
            parsed.malformed[0].kind,
            MalformedRowKind::TooManyFields {
                expected: 8,
                found: 9
            }
        );
        assert_eq!(parsed.malformed[0].line, 2);
        assert_eq!(
            parsed.malformed[1].kind,
            MalformedRowKind::TooFewFields {
                expected: 8,
                found: 3
            }
        );
    }

    #[test]
    fn lenient_policy_maps_by_position() {
        let text = with_rows(&["M1,mob,xiaomi,小米,fuxi,,Xiaomi 13,国行版,extra", "M2,mob,xiaomi"]);
        let parsed = parse_csv(&text, FieldPolicy::Lenient).unwrap();
        assert_eq!(parsed.rows.len(), 2);
        assert!(parsed.malformed.is_empty());
        assert_eq!(parsed.rows[0].ver_name.as_deref(), Some("国行版"));
        assert_eq!(parsed.rows[1].brand.as_deref(), Some("xiaomi"));
        assert_eq!(parsed.rows[1].model_name, None);
    }

    #[test]
    fn few_surplus_rows_keep_the_strict_result() {
        let rows: Vec<String> = (0..TOO_MANY_FIELDS_THRESHOLD)
            .map(|i| format!("M{i},mob,xiaomi,小米,c,,Name {i},v,extra"))
            .collect();
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let parsed = parse_with_fallback(&with_rows(&refs), TOO_MANY_FIELDS_THRESHOLD).unwrap();
        assert_eq!(parsed.rows.len(), TOO_MANY_FIELDS_THRESHOLD);
        assert_eq!(parsed.rows[0].ver_name.as_deref(), Some("v"));
        assert_eq!(parsed.too_many_fields(), TOO_MANY_FIELDS_THRESHOLD);
    }

    #[test]
    fn many_surplus_rows_trigger_the_lenient_reparse() {
        let rows: Vec<String> = (0..=TOO_MANY_FIELDS_THRESHOLD)
            .map(|i| format!("M{i},mob,xiaomi,小米,c,,Name {i},v,extra"))
            .collect();
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let parsed = parse_with_fallback(&with_rows(&refs), TOO_MANY_FIELDS_THRESHOLD).unwrap();
        assert_eq!(parsed.rows.len(), TOO_MANY_FIELDS_THRESHOLD + 1);
        assert_eq!(parsed.too_many_fields(), 0);
    }

    #[test]
    fn unknown_columns_are_ignored() {
        let text = "price,model,brand\n999,A1,apple\n";
        let parsed = parse_csv(text, FieldPolicy::Strict).unwrap();
        assert_eq!(parsed.rows[0].model.as_deref(), Some("A1"));
        assert_eq!(parsed.rows[0].dtype, None);
    }
}
