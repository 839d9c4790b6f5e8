use super::attr::{parse_field_decl, parse_marker_args};
use super::{extract_fields, normalize_type, record_type_name};

#[test]
fn test_extract_single_annotated_field() {
    let input = r#"
use crate::domain_types::*;

pub struct TransmissionHeaderRecord {
    #[cwr(start = 3, title = "Sender ID")]
    pub sender_id: String,
}
"#;

    let records = extract_fields(input);
    assert_eq!(records.len(), 1);
    let r = &records[0];
    assert_eq!(r.record_type, "TRANSMISSIONHEADER");
    assert_eq!(r.field, "sender_id");
    assert_eq!(r.start_index, 3);
    assert_eq!(r.data_type, "String");
    assert_eq!(r.cwr_version, "2.0");
}

#[test]
fn test_file_without_record_struct_yields_nothing() {
    let input = r#"
pub struct SomethingElse {
    #[cwr(start = 3)]
    pub field_a: String,
}
"#;
    assert!(extract_fields(input).is_empty());
}

#[test]
fn test_defaults_applied_for_omitted_attributes() {
    let input = r#"
pub struct HdrRecord {
    #[cwr(title = "Always 'HDR'")]
    pub record_type: String,
}
"#;
    let records = extract_fields(input);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].start_index, 0);
    assert_eq!(records[0].cwr_version, "2.0");
}

#[test]
fn test_min_version_attribute() {
    let input = r#"
pub struct VerRecord {
    #[cwr(start = 101, len = 3, min_version = 2.2)]
    pub version: Option<String>,
}
"#;
    let records = extract_fields(input);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].cwr_version, "2.2");
    assert_eq!(records[0].data_type, "String");
}

#[test]
fn test_multiline_marker_equals_single_line() {
    let one_line = r#"
pub struct AgrRecord {
    #[cwr(start = 19, len = 14, title = "Submitter agreement number")]
    pub agreement_number: String,
}
"#;
    let wrapped = r#"
pub struct AgrRecord {
    #[cwr(
        start = 19,
        len = 14,
        title = "Submitter agreement number"
    )]
    pub agreement_number: String,
}
"#;
    assert_eq!(extract_fields(one_line), extract_fields(wrapped));
}

#[test]
fn test_marker_without_declaration_in_window_is_dropped() {
    let input = r#"
pub struct NwrRecord {
    #[cwr(start = 3, title = "orphaned")]
    // a comment
    // another comment
    // and another
    // window exhausted here
    pub too_far: String,
}
"#;
    assert!(extract_fields(input).is_empty());
}

#[test]
fn test_unterminated_marker_extends_to_eof() {
    let input = r#"
pub struct GrhRecord {
    #[cwr(start = 3, title = "never closed"
"#;
    assert!(extract_fields(input).is_empty());
}

#[test]
fn test_duplicate_triple_keeps_first() {
    let input = r#"
pub struct HdrRecord {
    #[cwr(start = 0, title = "first")]
    pub record_type: String,

    #[cwr(start = 0, title = "second")]
    pub record_type: u8,
}
"#;
    let records = extract_fields(input);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].data_type, "String");
}

#[test]
fn test_struct_level_marker_collides_with_first_field_marker() {
    // Struct-level markers (test_data etc.) reach the first field through
    // the lookahead window with start defaulting to 0; the field's own
    // marker then produces the same triple and is suppressed.
    let input = r#"
#[cwr(test_data = "HDR01BMI      BMI MUSIC")]
pub struct HdrRecord {
    #[cwr(title = "Always 'HDR'", start = 0, len = 3)]
    pub record_type: String,
}
"#;
    let records = extract_fields(input);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].field, "record_type");
    assert_eq!(records[0].start_index, 0);
}

#[test]
fn test_first_declaration_in_window_wins() {
    let input = r#"
pub struct TrlRecord {
    #[cwr(start = 3)]
    pub group_count: u32,
    pub transaction_count: u32,
}
"#;
    let records = extract_fields(input);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].field, "group_count");
}

#[test]
fn test_scan_resumes_after_consumed_declaration() {
    let input = r#"
pub struct SpuRecord {
    #[cwr(start = 19)]
    pub sequence_number: u32,
    #[cwr(start = 21)]
    pub publisher_id: String,
}
"#;
    let records = extract_fields(input);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].field, "sequence_number");
    assert_eq!(records[1].field, "publisher_id");
}

#[test]
fn test_extraction_is_idempotent() {
    let input = r#"
pub struct AltRecord {
    #[cwr(start = 19, len = 60, title = "Alternate title")]
    pub alternate_title: String,
}
"#;
    assert_eq!(extract_fields(input), extract_fields(input));
}

#[test]
fn test_record_type_name_resolution() {
    assert_eq!(
        record_type_name("pub struct HdrRecord {"),
        Some("HDR".to_string())
    );
    assert_eq!(
        record_type_name("#[derive(Debug)]\npub struct TransmissionHeaderRecord {"),
        Some("TRANSMISSIONHEADER".to_string())
    );
    assert_eq!(record_type_name("pub struct Plain {"), None);
    assert_eq!(record_type_name("struct HiddenRecord {"), None);
    assert_eq!(record_type_name("pub struct Record {"), None);
}

#[test]
fn test_marker_args_order_independent_and_tolerant() {
    let a = parse_marker_args(r#"#[cwr(start = 3, min_version = 2.1, title = "Sender ID")]"#);
    let b = parse_marker_args(r#"#[cwr(title = "Sender ID", min_version = 2.1, start = 3)]"#);
    assert_eq!(a, b);
    assert_eq!(a.start, Some(3));
    assert_eq!(a.min_version.as_deref(), Some("2.1"));
    assert_eq!(a.title.as_deref(), Some("Sender ID"));

    // Unknown keys and list values are skipped without error.
    let c = parse_marker_args(r#"#[cwr(codes = ["NET", "NCT", "NVT"], start = 5)]"#);
    assert_eq!(c.start, Some(5));
    assert_eq!(c.min_version, None);

    // Garbage after a valid prefix keeps what was already recognized.
    let d = parse_marker_args(r#"#[cwr(start = 7, min_version = "#);
    assert_eq!(d.start, Some(7));
    assert_eq!(d.min_version, None);
}

#[test]
fn test_field_declaration_parsing() {
    assert_eq!(
        parse_field_decl("pub sender_id: String,"),
        Some(("sender_id".to_string(), "String".to_string()))
    );
    assert_eq!(
        parse_field_decl("pub character_set: Option<String>,"),
        Some(("character_set".to_string(), "Option<String>".to_string()))
    );
    assert_eq!(
        parse_field_decl("pub last: u8 }"),
        Some(("last".to_string(), "u8".to_string()))
    );
    assert_eq!(parse_field_decl("pub struct HdrRecord {"), None);
    assert_eq!(parse_field_decl("fn private_thing() {}"), None);
}

#[test]
fn test_type_normalization() {
    assert_eq!(normalize_type("Option<String>"), "String");
    assert_eq!(normalize_type("Vec<u8>"), "u8");
    assert_eq!(normalize_type("String"), "String");
    assert_eq!(normalize_type("Option<Vec<u8>>"), "u8");
    assert_eq!(normalize_type("  Date "), "Date");
    // Only one level of each wrapper is stripped.
    assert_eq!(normalize_type("Vec<Vec<u8>>"), "Vec<u8>");
}
