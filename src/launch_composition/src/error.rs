//! Error types for launch_composition

use std::path::PathBuf;
use thiserror::Error;

/// A package or one of its installed directories could not be resolved
#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("Package '{0}' not found. Ensure the package is installed and sourced.")]
    PackageNotFound(String),

    #[error("Failed to list headers of package '{package}': {source}")]
    Walk {
        package: String,
        #[source]
        source: walkdir::Error,
    },
}

/// The launch file is missing, unreadable or not well-formed XML
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Launch file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("XML parsing error: {0}")]
    XmlError(#[from] roxmltree::Error),
}

/// The launch tree does not have the shape of a composition launch file
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Expected root element '<launch>', found '<{0}>'")]
    UnexpectedRoot(String),

    #[error("Unexpected element '<{child}>' in '<{parent}>'")]
    UnexpectedElement { parent: String, child: String },

    #[error("Missing required attribute '{attribute}' on element '<{element}>'")]
    MissingAttribute { element: String, attribute: String },

    #[error("Unsupported container package '{0}', expected 'rclcpp_components'")]
    UnsupportedContainerPackage(String),

    #[error(
        "Unsupported container executable '{0}', expected 'component_container' or 'component_container_mt'"
    )]
    UnsupportedExecutor(String),
}

/// The code template is unavailable or could not be rendered
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Template error: {0}")]
    Render(#[from] minijinja::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
