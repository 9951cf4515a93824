//! Post-processing for the linker-generated symbol table shipped with
//! debug builds: rows are sorted by address so the panic handler can
//! binary-search them, and mangled names are replaced with readable ones.

use anyhow::Context;
use derive_new::new;
use std::path::Path;

/// One rewritten `address name` row of the table.
#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct SymbolRow {
    pub address: String,
    pub name: String,
}

/// Demangles one symbol name, treating the algorithm as opaque.
///
/// The hash suffix is dropped via alternate formatting; input that is not
/// a mangled symbol comes back unchanged.
pub fn demangle_symbol(mangled: &str) -> String {
    format!("{:#}", rustc_demangle::demangle(mangled))
}

/// Parses a raw whitespace-delimited `(address, size, mangledName)` table,
/// sorts rows by ascending numeric address and demangles the name column.
///
/// Rows with fewer than three columns are dropped; a row whose address is
/// not valid hex sorts as address zero. The address column is kept
/// verbatim so the table's hex formatting survives the rewrite.
pub fn process_table(raw: &str) -> Vec<SymbolRow> {
    let mut lines: Vec<&str> = raw.lines().collect();
    lines.sort_by_key(|line| parse_address(line));

    lines
        .iter()
        .filter_map(|line| {
            let columns: Vec<&str> = line.split_whitespace().collect();

            match columns.as_slice() {
                [address, _size, mangled, ..] => Some(SymbolRow::new(
                    (*address).to_string(),
                    demangle_symbol(mangled),
                )),
                _ => None,
            }
        })
        .collect()
}

/// Rewrites the table file in place and returns how many rows survived.
pub fn rewrite_table_file(table_path: &Path) -> anyhow::Result<usize> {
    let raw = std::fs::read_to_string(table_path).context(format!(
        "Unable to read symbol table {}",
        table_path.display()
    ))?;

    let rows = process_table(&raw);

    let mut output = String::new();
    for row in &rows {
        output.push_str(&row.address);
        output.push(' ');
        output.push_str(&row.name);
        output.push('\n');
    }

    std::fs::write(table_path, output).context(format!(
        "Unable to rewrite symbol table {}",
        table_path.display()
    ))?;

    Ok(rows.len())
}

fn parse_address(line: &str) -> u64 {
    line.split_whitespace()
        .next()
        .and_then(|address| u64::from_str_radix(address, 16).ok())
        .unwrap_or(0)
}
