use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::day_key;
use crate::ui::messages;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

use super::{open_store, resolve_date};

/// Copy a day's attendance file to a backup destination, optionally
/// compressed into a .zip next to it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        date,
    } = cmd
    {
        let day = resolve_date(date)?;
        let store = open_store(cfg);
        let src = store.day_file(day);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("No attendance file for {}: {}", day_key(day), src.display()),
            )
            .into());
        }

        let dest = Path::new(file);
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::copy(&src, dest)?;
        messages::success(format!("Backup created: {}", dest.display()));

        if *compress {
            let zipped = compress_backup(dest)?;
            if zipped != *dest {
                if let Err(e) = fs::remove_file(dest) {
                    messages::warning(format!("Failed to remove uncompressed backup: {}", e));
                } else {
                    messages::info(format!("Removed uncompressed backup: {}", dest.display()));
                }
            }
        }
    }

    Ok(())
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(path.file_name().unwrap().to_string_lossy(), options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    messages::success(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
