//! launch_composition library
//!
//! Turns the `node_container` entries of a ROS 2 XML launch file into C++
//! programs that construct every composable node statically and spin them
//! with the container's executor.

pub mod container;
pub mod emitter;
pub mod error;
pub mod headers;
pub mod loader;
pub mod package;
pub mod xml;

use container::ContainerExtractor;
use emitter::CodeEmitter;
use error::{Error, Result};
use loader::LaunchSource;
use package::PackageLocator;
use std::path::{Path, PathBuf};

pub use container::{ContainerDescription, ExecutorKind, NodeDescriptor};
pub use package::AmentIndex;

/// Where the launch file to compose comes from
#[derive(Debug, Clone)]
pub enum LaunchTarget {
    /// `<share>/launch/<file>` of an installed package
    Package { package: String, file: String },
    /// A launch file path on disk
    Path(PathBuf),
}

impl LaunchTarget {
    pub fn package(package: impl Into<String>, file: impl Into<String>) -> Self {
        Self::Package {
            package: package.into(),
            file: file.into(),
        }
    }

    fn load(&self, locator: &dyn PackageLocator) -> Result<LaunchSource> {
        match self {
            Self::Package { package, file } => LaunchSource::load(locator, package, file),
            Self::Path(path) => LaunchSource::from_path(path),
        }
    }
}

/// Generated program for one node container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    pub container_name: Option<String>,
    pub code: String,
}

/// Load a launch file and generate one program per node container,
/// in document order
pub fn compose(
    target: &LaunchTarget,
    locator: &dyn PackageLocator,
    emitter: &CodeEmitter,
) -> Result<Vec<GeneratedSource>> {
    let source = target.load(locator)?;
    let doc = source.document()?;
    let containers = ContainerExtractor::new(locator).extract(&doc)?;

    containers
        .iter()
        .map(|container| -> Result<GeneratedSource> {
            let code = emitter.render(container)?;
            Ok(GeneratedSource {
                container_name: container.name.clone(),
                code,
            })
        })
        .collect()
}

/// File stem used when the output path has none (e.g. `/` or `..`)
const DEFAULT_OUTPUT_STEM: &str = "composed_node";

/// Output path of the `index`-th generated program: `output` itself for the
/// first container, `<stem>_<index>.<ext>` next to it for the others
pub fn output_path(output: &Path, index: usize) -> PathBuf {
    if index == 0 {
        return output.to_path_buf();
    }

    let Some(stem) = output.file_stem() else {
        return output.join(format!("{}_{}", DEFAULT_OUTPUT_STEM, index));
    };
    let stem = stem.to_string_lossy();
    let file_name = match output.extension() {
        Some(ext) => format!("{}_{}.{}", stem, index, ext.to_string_lossy()),
        None => format!("{}_{}", stem, index),
    };
    output.with_file_name(file_name)
}

/// Write every generated program, overwriting existing files
pub fn write_outputs(sources: &[GeneratedSource], output: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(sources.len());
    for (index, generated) in sources.iter().enumerate() {
        let path = output_path(output, index);
        std::fs::write(&path, &generated.code).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        log::info!("Generated {}", path.display());
        written.push(path);
    }
    Ok(written)
}
