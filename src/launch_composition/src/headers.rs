//! Installed header discovery

use crate::error::ResolutionError;
use crate::package::PackageLocator;
use std::path::Path;
use walkdir::WalkDir;

const HEADER_EXTENSIONS: [&str; 2] = ["hpp", "h"];

/// List the headers a package installs under `<prefix>/include/<package>`,
/// as `/`-separated paths relative to `<prefix>/include`.
pub fn package_header_files<L: PackageLocator + ?Sized>(
    locator: &L,
    package: &str,
) -> Result<Vec<String>, ResolutionError> {
    let include_dir = locator.include_directory(package)?;
    let package_dir = include_dir.join(package);

    if !package_dir.is_dir() {
        log::warn!(
            "Package '{}' has no header directory at {}",
            package,
            package_dir.display()
        );
        return Ok(Vec::new());
    }

    let mut headers = Vec::new();
    for entry in WalkDir::new(&package_dir)
        .follow_links(true)
        .sort_by_file_name() {
        let entry = entry.map_err(|source| ResolutionError::Walk {
            package: package.to_string(),
            source,
        })?;
        if !entry.file_type().is_file() || !is_header(entry.path()) {
            continue;
        }
        if let Ok(rel_path) = entry.path().strip_prefix(&include_dir) {
            headers.push(to_include_path(rel_path));
        }
    }

    log::debug!("Found {} headers in package '{}'", headers.len(), package);
    Ok(headers)
}

fn is_header(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| HEADER_EXTENSIONS.contains(&ext))
}

fn to_include_path(rel_path: &Path) -> String {
    rel_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
