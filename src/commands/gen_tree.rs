use crate::treegen::TreeGenerator;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

pub fn gen_tree(
    output_dir: &Path,
    iterations: usize,
    max_depth: usize,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    let created = TreeGenerator::new(max_depth)
        .grow(output_dir, iterations)
        .context(format!(
            "Error generating test trees under {}",
            output_dir.display()
        ))?;

    writeln!(
        writer,
        "Generated {} chains ({} files) under {}",
        iterations,
        created.len(),
        output_dir.display()
    )?;

    Ok(())
}
