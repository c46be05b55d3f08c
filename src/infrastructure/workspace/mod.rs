//! Output staging - copies the export directory next to the generated page

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Copy the export into a fresh timestamped directory under `output_root`,
/// so the generated page sits next to its media files. Returns the staged
/// directory.
pub fn stage(input: &Path, output_root: &Path) -> io::Result<PathBuf> {
    let run_dir = output_root.join(chrono::Utc::now().timestamp().to_string());
    copy_tree(input, &run_dir)?;
    Ok(run_dir)
}

fn copy_tree(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
