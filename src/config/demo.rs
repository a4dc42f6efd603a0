//! Demo command configuration

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub output_dir: PathBuf,
    pub indent: bool,
}

impl DemoOptions {
    pub fn builder() -> DemoOptionsBuilder {
        DemoOptionsBuilder::new()
    }

    /// Path of `file_name` inside the output directory
    pub fn output_file(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

#[derive(Default)]
pub struct DemoOptionsBuilder {
    output_dir: Option<PathBuf>,
    indent: Option<bool>,
}

impl DemoOptionsBuilder {
    pub fn new() -> Self {
        Self {
            output_dir: None,
            indent: None,
        }
    }

    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = Some(output_dir);
        self
    }

    pub fn with_indent(mut self, indent: bool) -> Self {
        self.indent = Some(indent);
        self
    }
}

impl crate::common::ConfigBuilder for DemoOptionsBuilder {
    type Config = DemoOptions;

    fn build(self) -> Result<Self::Config, crate::error::GraphmlError> {
        let output_dir = self.output_dir.ok_or_else(|| {
            crate::error::GraphmlError::ConfigurationError {
                message: "Missing required field: output_dir".to_string(),
            }
        })?;
        if output_dir.as_os_str().is_empty() {
            return Err(crate::error::GraphmlError::ConfigurationError {
                message: "Output directory must not be empty".to_string(),
            });
        }

        Ok(DemoOptions {
            output_dir,
            indent: self.indent.unwrap_or(false),
        })
    }
}
