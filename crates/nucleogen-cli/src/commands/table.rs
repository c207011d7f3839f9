use super::{print_lines, resolve_output_path, write_lines_to_path};
use crate::cli::TableArgs;
use crate::config::Settings;
use crate::error::Result;
use nucleogen::workflows;
use tracing::info;

pub fn run(args: TableArgs, settings: &Settings) -> Result<()> {
    let mut options = settings.table;
    if let Some(scale) = args.scale {
        options.scale = scale;
    }
    if let Some(height_offset) = args.height_offset {
        options.height_offset = height_offset;
    }

    info!(
        "Generating {} coordinate table for sequence '{}' (scale {}, height offset {})...",
        args.family, args.sequence, options.scale, options.height_offset
    );
    let lines = workflows::table_dump(args.family, &args.sequence, &options)?;

    if args.stdout {
        print_lines(&lines)?;
        return Ok(());
    }

    let path = resolve_output_path(args.output, settings, args.family, &args.sequence, "tsv");
    write_lines_to_path(&path, &lines)?;

    info!("Coordinate table written to {:?}.", path);
    println!(
        "✓ {} coordinate table written to: {}",
        args.family,
        path.display()
    );

    Ok(())
}
