use std::path::PathBuf;

use anyhow::Context;

use cwrmap::loader::scan_dir;
use cwrmap::output::csv::{sort_records, write_csv};

pub(crate) fn run(
    dir: PathBuf,
    ext: String,
    exclude: String,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut records = scan_dir(&dir, &ext, &exclude)?;
    sort_records(&mut records);
    tracing::debug!(records = records.len(), dir = %dir.display(), "scan complete");

    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::fs::File::create(&path)
                .with_context(|| format!("creating output file: {}", path.display()))?;
            write_csv(&records, file)?;
        }
        None => {
            let stdout = std::io::stdout();
            write_csv(&records, stdout.lock())?;
        }
    }

    Ok(())
}
