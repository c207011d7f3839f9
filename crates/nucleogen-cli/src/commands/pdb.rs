use super::{print_lines, resolve_output_path, write_lines_to_path};
use crate::cli::PdbArgs;
use crate::config::Settings;
use crate::error::Result;
use nucleogen::workflows;
use tracing::info;

pub fn run(args: PdbArgs, settings: &Settings) -> Result<()> {
    info!(
        "Generating {} PDB model for sequence '{}'...",
        args.family, args.sequence
    );
    let records = workflows::pdb_records(args.family, &args.sequence)?;
    info!("Generated {} atom records.", records.len());

    if args.stdout {
        print_lines(&records)?;
        return Ok(());
    }

    let path = resolve_output_path(args.output, settings, args.family, &args.sequence, "pdb");
    write_lines_to_path(&path, &records)?;

    info!("PDB model written to {:?}.", path);
    println!(
        "✓ {} model ({} atoms) written to: {}",
        args.family,
        records.len(),
        path.display()
    );

    Ok(())
}
