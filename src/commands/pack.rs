use crate::archive::encoder::ArchiveBuilder;
use crate::archive::walker::Walker;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

/// Packs one source tree into one compressed image.
///
/// Skipped-entry warnings go to stderr so scripted callers can still
/// capture the confirmation line alone.
pub fn pack(
    source_dir: &Path,
    output_file: &Path,
    strict: bool,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    let walker = Walker::new(source_dir)?;

    ArchiveBuilder::new(output_file)
        .strict(strict)
        .build(&walker, &mut std::io::stderr())
        .context(format!(
            "Error compressing directory {}",
            source_dir.display()
        ))?;

    writeln!(
        writer,
        "Compression completed. Output file: {}",
        output_file.display()
    )?;

    Ok(())
}
