use anyhow::Result;
use clap::{Parser, Subcommand};
use initpack::commands;
use std::path::PathBuf;

const DEFAULT_SYMBOL_TABLE: &str = "scripts/symbols.table";

#[derive(Parser)]
#[command(
    name = "initpack",
    version = "0.1.0",
    about = "Initramfs image builder and kernel build helpers",
    long_about = "Build tooling for a hobby kernel: packs a source directory tree \
    into a gzip-compressed initramfs image the kernel unpacks at boot, \
    generates randomized test trees for the packer, and post-processes \
    the debug symbol table.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "pack",
        about = "Pack a directory tree into a compressed initramfs image",
        long_about = "This command walks the source directory and serializes every regular \
        file into one gzip-compressed image. The image is written atomically: a failed \
        build leaves no output file behind."
    )]
    Pack {
        #[arg(index = 1, help = "The source directory to archive")]
        source_dir: PathBuf,
        #[arg(index = 2, help = "The path of the image to produce")]
        output_file: PathBuf,
        #[arg(
            long,
            required = false,
            help = "Fail on non-regular files instead of skipping them with a warning"
        )]
        strict: bool,
    },
    #[command(
        name = "gen-tree",
        about = "Generate randomized directory trees of empty files",
        long_about = "This command grows randomized chains of nested directories with empty \
        files, for stress-testing the packer under varied tree shapes."
    )]
    GenTree {
        #[arg(index = 1, help = "How many directory chains to generate")]
        iterations: usize,
        #[arg(
            index = 2,
            help = "Where to generate them (defaults to the current directory)"
        )]
        output_dir: Option<PathBuf>,
        #[arg(long, default_value_t = 3, help = "Maximum nesting depth of one chain")]
        max_depth: usize,
    },
    #[command(
        name = "sort-symbols",
        about = "Sort and demangle the debug symbol table in place",
        long_about = "This command rewrites a whitespace-delimited (address, size, mangled \
        name) table: rows are sorted by ascending address and each name is demangled."
    )]
    SortSymbols {
        #[arg(index = 1, help = "The symbol table file to rewrite")]
        table: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut writer = std::io::stdout();

    match &cli.command {
        Commands::Pack {
            source_dir,
            output_file,
            strict,
        } => commands::pack::pack(source_dir, output_file, *strict, &mut writer)?,
        Commands::GenTree {
            iterations,
            output_dir,
            max_depth,
        } => {
            let output_dir = output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
            commands::gen_tree::gen_tree(&output_dir, *iterations, *max_depth, &mut writer)?
        }
        Commands::SortSymbols { table } => {
            let table = table
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SYMBOL_TABLE));
            commands::sort_symbols::sort_symbols(&table, &mut writer)?
        }
    }

    Ok(())
}
