use serde::Serialize;

/// One extracted field description, the unit of CSV output.
///
/// A record is uniquely identified within its source file by the
/// (RecordType, Field, StartIndex) triple; later duplicates of the same
/// triple are suppressed during extraction. Records are immutable once
/// built and are only concatenated and sorted downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRecord {
    #[serde(rename = "RecordType")]
    pub record_type: String,
    #[serde(rename = "Field")]
    pub field: String,
    #[serde(rename = "StartIndex")]
    pub start_index: u32,
    #[serde(rename = "DataType")]
    pub data_type: String,
    #[serde(rename = "CWR_Version")]
    pub cwr_version: String,
}
