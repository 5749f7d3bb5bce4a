use crate::config::Config;
use crate::errors::AppResult;
use flate2::Compression;
use flate2::write::GzEncoder;
use rusqlite::Connection;
use std::fs;
use std::io::{Write, stdin, stdout};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database to `dest_file`, optionally compressed
    /// (zip on Windows, tar.gz elsewhere). Returns the final file path, or
    /// `None` when the user declined to overwrite.
    pub fn backup(cfg: &Config, dest_file: &Path, compress: bool) -> AppResult<Option<PathBuf>> {
        let src = Path::new(&cfg.database);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest_file.parent() {
            fs::create_dir_all(parent)?;
        }

        if dest_file.exists() && !confirm_overwrite(dest_file)? {
            println!("❌ Backup cancelled by user.");
            return Ok(None);
        }

        fs::copy(src, dest_file)?;
        println!("✅ Backup created: {}", dest_file.display());

        let final_path = if compress {
            let compressed = if cfg!(windows) {
                compress_zip(dest_file)?
            } else {
                compress_tar_gz(dest_file)?
            };

            match fs::remove_file(dest_file) {
                Ok(_) => println!("🗑️ Removed uncompressed backup: {}", dest_file.display()),
                Err(e) => eprintln!("⚠️ Failed to remove uncompressed backup: {}", e),
            }

            compressed
        } else {
            dest_file.to_path_buf()
        };

        if let Ok(conn) = Connection::open(src) {
            let _ = crate::db::log::ttlog(
                &conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }

        Ok(Some(final_path))
    }
}

fn confirm_overwrite(dest: &Path) -> AppResult<bool> {
    println!(
        "⚠️  The file '{}' already exists.\nDo you want to overwrite it? [y/N]: ",
        dest.display()
    );
    print!("> ");
    stdout().flush().ok();

    let mut answer = String::new();
    stdin().read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "hirebill.sqlite".to_string())
}

fn compress_zip(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name(path), options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    println!("📦 Compressed: {}", zip_path.display());
    Ok(zip_path)
}

fn compress_tar_gz(path: &Path) -> AppResult<PathBuf> {
    let tgz_path = PathBuf::from(format!("{}.tar.gz", path.display()));
    let file = fs::File::create(&tgz_path)?;

    let enc = GzEncoder::new(file, Compression::default());
    let mut tar = tar::Builder::new(enc);
    tar.append_path_with_name(path, entry_name(path))?;
    tar.into_inner()?.finish()?;

    println!("📦 Compressed: {}", tgz_path.display());
    Ok(tgz_path)
}
