//! Component container extraction

use crate::error::{Result, ValidationError};
use crate::package::PackageLocator;
use crate::xml::{Entity, XmlEntity};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

const LAUNCH_TAG: &str = "launch";
const CONTAINER_TAG: &str = "node_container";
const COMPOSABLE_NODE_TAG: &str = "composable_node";

/// Package providing the component container executables
pub const CONTAINER_PACKAGE: &str = "rclcpp_components";

/// Executor a generated process spins its nodes with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorKind {
    SingleThreaded,
    MultiThreaded,
}

impl ExecutorKind {
    /// Map a `node_container` `exec` attribute to an executor
    pub fn from_exec(exec: &str) -> std::result::Result<Self, ValidationError> {
        match exec {
            "component_container" => Ok(Self::SingleThreaded),
            "component_container_mt" => Ok(Self::MultiThreaded),
            other => Err(ValidationError::UnsupportedExecutor(other.to_string())),
        }
    }

    /// Fully-qualified rclcpp executor class
    pub fn cpp_type(&self) -> &'static str {
        match self {
            Self::SingleThreaded => "rclcpp::executors::SingleThreadedExecutor",
            Self::MultiThreaded => "rclcpp::executors::MultiThreadedExecutor",
        }
    }
}

impl fmt::Display for ExecutorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cpp_type())
    }
}

/// A composable node instance to be constructed in the generated process
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDescriptor {
    pub name: String,
    pub namespace: Option<String>,
    pub class_name: String,
}

/// Everything needed to generate the program for one `node_container`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerDescription {
    pub name: Option<String>,
    pub executor: ExecutorKind,
    pub nodes: Vec<NodeDescriptor>,
    pub header_files: BTreeSet<String>,
}

/// Composable node entry as written in the launch file
struct ComposableNodeEntry<'a> {
    package: &'a str,
    descriptor: NodeDescriptor,
}

impl<'a> ComposableNodeEntry<'a> {
    fn from_entity(entity: &'a XmlEntity<'a, '_>) -> std::result::Result<Self, ValidationError> {
        entity.expect_type(CONTAINER_TAG, COMPOSABLE_NODE_TAG)?;

        let package = entity.required_attr("pkg")?;
        let name = entity.required_attr("name")?;
        let class_name = entity.required_attr("plugin")?;
        let namespace = entity.attr("namespace");

        Ok(Self {
            package,
            descriptor: NodeDescriptor {
                name: name.to_string(),
                namespace: namespace.map(str::to_string),
                class_name: class_name.to_string(),
            },
        })
    }
}

/// Walks a launch tree and describes each component container in it
pub struct ContainerExtractor<'l> {
    locator: &'l dyn PackageLocator,
}

impl<'l> ContainerExtractor<'l> {
    pub fn new(locator: &'l dyn PackageLocator) -> Self {
        Self { locator }
    }

    /// Describe every `node_container` directly under the `<launch>` root,
    /// in document order
    pub fn extract(&self, doc: &roxmltree::Document) -> Result<Vec<ContainerDescription>> {
        let root = XmlEntity::new(doc.root_element());
        if root.type_name() != LAUNCH_TAG {
            return Err(ValidationError::UnexpectedRoot(root.type_name().to_string()).into());
        }

        let mut containers = Vec::new();
        for child in root.children() {
            if child.type_name() != CONTAINER_TAG {
                log::debug!("Skipping '{}' in launch", child.type_name());
                continue;
            }
            containers.push(self.describe_container(&child)?);
        }

        log::info!("Found {} node containers", containers.len());
        Ok(containers)
    }

    fn describe_container(&self, entity: &XmlEntity) -> Result<ContainerDescription> {
        let name = entity.attr("name").map(str::to_string);
        let executor = container_executor(entity)?;

        let children: Vec<_> = entity.children().collect();
        let entries = children
            .iter()
            .map(|child| ComposableNodeEntry::from_entity(child))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let header_files = self.collect_header_files(entries.iter().map(|e| e.package))?;
        let nodes: Vec<NodeDescriptor> = entries.into_iter().map(|e| e.descriptor).collect();

        log::debug!(
            "Container {}: {} with {} nodes, {} headers",
            name.as_deref().unwrap_or("<unnamed>"),
            executor,
            nodes.len(),
            header_files.len()
        );

        Ok(ContainerDescription {
            name,
            executor,
            nodes,
            header_files,
        })
    }

    /// Union of the headers of every distinct package, deduplicated by path
    fn collect_header_files<'p>(
        &self,
        packages: impl Iterator<Item = &'p str>,
    ) -> Result<BTreeSet<String>> {
        let packages: BTreeSet<&str> = packages.collect();

        let mut header_files = BTreeSet::new();
        for package in packages {
            header_files.extend(self.locator.package_header_files(package)?);
        }
        Ok(header_files)
    }
}

fn container_executor(entity: &XmlEntity) -> std::result::Result<ExecutorKind, ValidationError> {
    let package = entity.required_attr("pkg")?;
    if package != CONTAINER_PACKAGE {
        return Err(ValidationError::UnsupportedContainerPackage(
            package.to_string(),
        ));
    }
    ExecutorKind::from_exec(entity.required_attr("exec")?)
}
