//! Installed package lookup

use crate::error::ResolutionError;
use crate::headers;
use std::path::{Path, PathBuf};

/// Relative location of the ament resource marking a package as installed
const PACKAGES_RESOURCE_DIR: &str = "share/ament_index/resource_index/packages";

/// Name -> installation path resolution for ROS 2 packages
pub trait PackageLocator {
    /// Root installation directory of a package
    fn package_prefix(&self, package: &str) -> Result<PathBuf, ResolutionError>;

    /// Installed shared-data directory of a package
    fn package_share_directory(&self, package: &str) -> Result<PathBuf, ResolutionError> {
        Ok(self.package_prefix(package)?.join("share").join(package))
    }

    /// `<prefix>/include`, the root header paths are made relative to
    fn include_directory(&self, package: &str) -> Result<PathBuf, ResolutionError> {
        Ok(self.package_prefix(package)?.join("include"))
    }

    /// `<share>/launch`
    fn launch_directory(&self, package: &str) -> Result<PathBuf, ResolutionError> {
        Ok(self.package_share_directory(package)?.join("launch"))
    }

    /// Headers installed by a package, relative to its include directory
    fn package_header_files(&self, package: &str) -> Result<Vec<String>, ResolutionError> {
        headers::package_header_files(self, package)
    }
}

/// Package lookup backed by the ament resource index
#[derive(Debug, Clone, Default)]
pub struct AmentIndex {
    prefixes: Vec<PathBuf>,
}

impl AmentIndex {
    pub fn new<I, P>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Build the index from `AMENT_PREFIX_PATH`, falling back to the
    /// `/opt/ros/$ROS_DISTRO` install when the workspace is not sourced.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("AMENT_PREFIX_PATH").ok(),
            std::env::var("ROS_DISTRO").ok(),
        )
    }

    /// Build the index from the values of `AMENT_PREFIX_PATH` and `ROS_DISTRO`
    pub fn from_vars(ament_prefix_path: Option<String>, ros_distro: Option<String>) -> Self {
        if let Some(prefix_path) = ament_prefix_path {
            return Self::new(
                prefix_path
                    .split(':')
                    .filter(|prefix| !prefix.is_empty())
                    .map(PathBuf::from),
            );
        }

        match ros_distro {
            Some(distro) => {
                log::debug!("AMENT_PREFIX_PATH is not set, using /opt/ros/{}", distro);
                Self::new([Path::new("/opt/ros").join(distro)])
            }
            None => {
                log::warn!("Neither AMENT_PREFIX_PATH nor ROS_DISTRO is set");
                Self::default()
            }
        }
    }

    pub fn prefixes(&self) -> &[PathBuf] {
        &self.prefixes
    }
}

impl PackageLocator for AmentIndex {
    fn package_prefix(&self, package: &str) -> Result<PathBuf, ResolutionError> {
        self.prefixes
            .iter()
            .find(|prefix| prefix.join(PACKAGES_RESOURCE_DIR).join(package).is_file())
            .cloned()
            .ok_or_else(|| ResolutionError::PackageNotFound(package.to_string()))
    }
}
