use crate::core::models::helix::Helix;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Defines the interface for rendering a helix to an output format.
///
/// This trait provides a common API for the text formats a finished helix
/// can be written to. Implementors handle format-specific layout; the
/// trait supplies the plumbing from a writer to a file path. Rendering is
/// strictly sequential and all-or-nothing: an implementor either writes
/// the whole helix or fails on the first invalid atom.
pub trait HelixFile {
    /// Format-specific rendering options.
    type Options: Default;

    /// The error type for rendering operations.
    type Error: Error + From<io::Error>;

    /// Writes a helix with explicit options to a writer.
    ///
    /// # Arguments
    ///
    /// * `helix` - The helix to render.
    /// * `options` - The format-specific rendering options.
    /// * `writer` - The writer to output to.
    ///
    /// # Return
    ///
    /// Returns `Ok(())` on success.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or I/O operations encounter
    /// issues.
    fn write_to(
        helix: &Helix,
        options: &Self::Options,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Writes a helix to a writer with default options.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or I/O operations encounter
    /// issues.
    fn write_helix_to(helix: &Helix, writer: &mut impl Write) -> Result<(), Self::Error> {
        Self::write_to(helix, &Self::Options::default(), writer)
    }

    /// Writes a helix with explicit options to a file path.
    ///
    /// # Arguments
    ///
    /// * `helix` - The helix to render.
    /// * `options` - The format-specific rendering options.
    /// * `path` - The path to the file to write.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or rendering fails.
    fn write_to_path<P: AsRef<Path>>(
        helix: &Helix,
        options: &Self::Options,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(helix, options, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Writes a helix to a file path with default options.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or rendering fails.
    fn write_helix_to_path<P: AsRef<Path>>(helix: &Helix, path: P) -> Result<(), Self::Error> {
        Self::write_to_path(helix, &Self::Options::default(), path)
    }
}
