//! Launch file resolution and loading

use crate::error::{ParseError, Result};
use crate::package::PackageLocator;
use std::path::{Path, PathBuf};

/// Raw launch file content together with the path it was read from
#[derive(Debug, Clone)]
pub struct LaunchSource {
    path: PathBuf,
    content: String,
}

impl LaunchSource {
    /// Read `<share>/launch/<file>` of an installed package
    pub fn load(locator: &dyn PackageLocator, package: &str, file: &str) -> Result<Self> {
        let path = launch_file_path(locator, package, file)?;
        Self::from_path(&path)
    }

    /// Read a launch file by direct path
    pub fn from_path(path: &Path) -> Result<Self> {
        log::info!("Loading launch file: {}", path.display());

        if !path.is_file() {
            return Err(ParseError::FileNotFound(path.to_path_buf()).into());
        }
        let content = std::fs::read_to_string(path).map_err(ParseError::from)?;

        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the content into an XML tree borrowing from this source
    pub fn document(&self) -> Result<roxmltree::Document<'_>> {
        let doc = roxmltree::Document::parse(&self.content).map_err(ParseError::from)?;
        Ok(doc)
    }
}

/// Resolve the location of a launch file inside a package's launch directory
pub fn launch_file_path(
    locator: &dyn PackageLocator,
    package: &str,
    file: &str,
) -> Result<PathBuf> {
    Ok(locator.launch_directory(package)?.join(file))
}
