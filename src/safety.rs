//! Safety check to prevent the input list from being overwritten.

use crate::error::{Error, Result};
use std::path::Path;

/// Validates that an output path is safe to overwrite.
///
/// The output cannot be the same as any of the source paths, compared
/// literally and, where both exist, after canonicalization (so
/// `./paste.txt` and `paste.txt` collide).
pub fn validate_output_path(output: &Path, source_paths: &[&Path]) -> Result<()> {
    let output_canonical = output.canonicalize().ok();

    for source in source_paths {
        let same_file = output == *source
            || match (&output_canonical, source.canonicalize().ok()) {
                (Some(out), Some(src)) => *out == src,
                _ => false,
            };

        if same_file {
            return Err(Error::UnsafeOutput(format!(
                "output '{}' cannot be the same as source '{}'",
                output.display(),
                source.display()
            )));
        }
    }

    Ok(())
}
