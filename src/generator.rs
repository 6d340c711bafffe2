//! Writes one batch script per grid point into a target directory.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::grid::{GridPoint, ParamGrid};
use crate::template;

/// Write the script for a single grid point, returning its path.
///
/// Create-with-truncate semantics: an existing file of the same name is
/// silently overwritten. The handle is flushed and dropped before returning.
pub fn write_script(dir: &Path, point: &GridPoint) -> io::Result<PathBuf> {
    let path = dir.join(template::script_name(point.alpha, point.lf));
    let mut file = File::create(&path)?;
    file.write_all(template::render(point.alpha, point.lf).as_bytes())?;
    file.flush()?;
    Ok(path)
}

/// Write scripts for every point of `grid`, in grid order, returning the
/// number of files written. The first I/O error aborts the run; files
/// written before it remain on disk.
pub fn write_grid(dir: &Path, grid: &ParamGrid) -> io::Result<usize> {
    let mut written = 0;
    for point in grid.points() {
        write_script(dir, &point)?;
        written += 1;
    }
    Ok(written)
}
