use crate::symbols;
use std::io::Write;
use std::path::Path;

pub fn sort_symbols(table_path: &Path, writer: &mut dyn Write) -> anyhow::Result<()> {
    let count = symbols::rewrite_table_file(table_path)?;

    writeln!(
        writer,
        "Sorted and demangled {} symbols in {}",
        count,
        table_path.display()
    )?;

    Ok(())
}
