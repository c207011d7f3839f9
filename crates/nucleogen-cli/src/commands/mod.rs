pub mod pdb;
pub mod table;

use crate::config::Settings;
use nucleogen::core::geometry::HelixFamily;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// The conventional output file name, embedding family and sequence.
fn default_file_name(family: HelixFamily, sequence: &str, extension: &str) -> String {
    format!("Model_{family}_{sequence}.{extension}")
}

/// The explicit `--output` path, or the conventional name inside the
/// configured output directory.
fn resolve_output_path(
    output: Option<PathBuf>,
    settings: &Settings,
    family: HelixFamily,
    sequence: &str,
    extension: &str,
) -> PathBuf {
    output.unwrap_or_else(|| {
        settings
            .output_dir
            .join(default_file_name(family, sequence, extension))
    })
}

fn write_lines_to_path(path: &Path, lines: &[String]) -> io::Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}

fn print_lines(lines: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for line in lines {
        writeln!(handle, "{line}")?;
    }
    handle.flush()
}
