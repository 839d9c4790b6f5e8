use std::io::Write;

use crate::model::FieldRecord;

/// Order records for output: record type ascending, then start index as a
/// number (so offset 100 sorts after offset 20). The sort is stable, which
/// keeps same-offset fields in file-traversal order.
pub fn sort_records(records: &mut [FieldRecord]) {
    records.sort_by(|a, b| {
        a.record_type
            .cmp(&b.record_type)
            .then(a.start_index.cmp(&b.start_index))
    });
}

/// Write records as CSV: a `RecordType,Field,StartIndex,DataType,CWR_Version`
/// header followed by one row per record.
///
/// An empty slice writes nothing at all, not even the header. Downstream
/// consumers of the original tool rely on the fully-empty case producing an
/// empty stream.
pub fn write_csv<W: Write>(records: &[FieldRecord], out: W) -> anyhow::Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    let mut writer = csv::Writer::from_writer(out);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
