//! C++ source generation from container descriptions

use crate::container::{ContainerDescription, NodeDescriptor};
use crate::error::TemplateError;
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;
use std::path::Path;

/// Name of the template rendered unless another one is selected
pub const DEFAULT_TEMPLATE: &str = "ros2_node_template.jinja";

const BUILTIN_TEMPLATE: &str = include_str!("../templates/ros2_node_template.jinja");

/// Values exposed to the template
#[derive(Debug, Serialize)]
struct TemplateBindings<'a> {
    header_files: Vec<&'a str>,
    executor_type: &'static str,
    node_list: &'a [NodeDescriptor],
}

impl<'a> From<&'a ContainerDescription> for TemplateBindings<'a> {
    fn from(container: &'a ContainerDescription) -> Self {
        Self {
            header_files: container.header_files.iter().map(String::as_str).collect(),
            executor_type: container.executor.cpp_type(),
            node_list: &container.nodes,
        }
    }
}

/// Renders container descriptions through a Jinja template
pub struct CodeEmitter {
    env: Environment<'static>,
    template_name: String,
}

impl CodeEmitter {
    /// Emitter using the template shipped with this crate
    pub fn builtin() -> Result<Self, TemplateError> {
        let mut env = new_environment();
        env.add_template(DEFAULT_TEMPLATE, BUILTIN_TEMPLATE)?;
        Ok(Self {
            env,
            template_name: DEFAULT_TEMPLATE.to_string(),
        })
    }

    /// Emitter loading templates by name from a directory
    pub fn from_dir(dir: &Path) -> Result<Self, TemplateError> {
        if !dir.is_dir() {
            return Err(TemplateError::DirectoryNotFound(dir.to_path_buf()));
        }
        log::debug!("Loading templates from {}", dir.display());

        let mut env = new_environment();
        env.set_loader(minijinja::path_loader(dir));
        Ok(Self {
            env,
            template_name: DEFAULT_TEMPLATE.to_string(),
        })
    }

    /// Select a template other than [`DEFAULT_TEMPLATE`]
    pub fn with_template_name(mut self, name: impl Into<String>) -> Self {
        self.template_name = name.into();
        self
    }

    pub fn template_name(&self) -> &str {
        &self.template_name
    }

    pub fn render(&self, container: &ContainerDescription) -> Result<String, TemplateError> {
        let template = self.env.get_template(&self.template_name)?;
        let code = template.render(TemplateBindings::from(container))?;
        Ok(code)
    }
}

fn new_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    // A template expecting a binding we do not supply must fail loudly
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env
}
