use std::sync::Arc;

use regex::Regex;
use serde_json::Value;

use super::errors::KernelError;
use super::model::{KernelArguments, KernelFunction, split_qualified_name};
use super::plugin::Plugin;

const NAME_PATTERN: &str = r"^[0-9A-Za-z_]+$";

struct RegisteredPlugin {
    name: String,
    plugin: Arc<dyn Plugin>,
}

/// Registry of plugins and dispatcher for model-requested function calls.
///
/// Plugins are registered during startup; afterwards the kernel is shared
/// read-only behind an `Arc`.
pub struct Kernel {
    plugins: Vec<RegisteredPlugin>,
}

fn is_valid_name(name: &str) -> bool {
    Regex::new(NAME_PATTERN)
        .map(|re| re.is_match(name))
        .unwrap_or(false)
}

impl Default for Kernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel {
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    pub fn add_plugin(
        &mut self,
        name: impl Into<String>,
        plugin: Arc<dyn Plugin>,
    ) -> Result<(), KernelError> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(KernelError::InvalidName(name));
        }
        if self.plugins.iter().any(|p| p.name == name) {
            return Err(KernelError::DuplicatePlugin(name));
        }
        if let Some(bad) = plugin
            .functions()
            .into_iter()
            .find(|f| !is_valid_name(&f.name))
        {
            return Err(KernelError::InvalidName(bad.name));
        }

        self.plugins.push(RegisteredPlugin { name, plugin });
        Ok(())
    }

    /// Every registered function, in registration order.
    pub fn functions(&self) -> Vec<KernelFunction> {
        self.plugins
            .iter()
            .flat_map(|p| {
                p.plugin.functions().into_iter().map(|metadata| KernelFunction {
                    plugin_name: p.name.clone(),
                    metadata,
                })
            })
            .collect()
    }

    /// Resolves `<plugin>-<function>`, validates the arguments against the
    /// function metadata and invokes it.
    pub async fn invoke(
        &self,
        qualified_name: &str,
        arguments: KernelArguments,
    ) -> Result<Value, KernelError> {
        let not_found = || KernelError::FunctionNotFound(qualified_name.to_string());

        let (plugin_name, function_name) =
            split_qualified_name(qualified_name).ok_or_else(not_found)?;
        let registered = self
            .plugins
            .iter()
            .find(|p| p.name == plugin_name)
            .ok_or_else(not_found)?;
        let metadata = registered
            .plugin
            .functions()
            .into_iter()
            .find(|f| f.name == function_name)
            .ok_or_else(not_found)?;

        let mut arguments = arguments;
        for parameter in &metadata.parameters {
            match arguments.get(&parameter.name) {
                Some(Value::Null) | None => {
                    if let Some(default) = &parameter.default {
                        arguments.insert(parameter.name.clone(), default.clone());
                    } else if parameter.required {
                        return Err(KernelError::MissingArgument {
                            function: qualified_name.to_string(),
                            parameter: parameter.name.clone(),
                        });
                    }
                }
                Some(value) if !parameter.kind.accepts(value) => {
                    return Err(KernelError::InvalidArgument {
                        function: qualified_name.to_string(),
                        parameter: parameter.name.clone(),
                        expected: parameter.kind.to_string(),
                    });
                }
                Some(_) => {}
            }
        }

        registered.plugin.invoke(function_name, &arguments).await
    }
}
