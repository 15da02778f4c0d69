use anyhow::Context;
use minijinja::{Environment, Value, context};
use std::path::Path;

use crate::api::models::SearchPage;
use crate::error::Result;

pub const INDEX_TEMPLATE: &str = "index.html";

/// Marks `value` as already-escaped markup. Wikipedia snippets carry
/// highlight spans that must reach the browser unescaped.
fn html_safe(value: String) -> Value {
    Value::from_safe_string(value)
}

/// Compiled page templates, shared read-only across requests.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Read and compile `index.html` from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = dir.as_ref().join(INDEX_TEMPLATE);
        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read template {}", path.display()))?;
        Self::from_source(source)
            .with_context(|| format!("Failed to parse template {}", path.display()))
    }

    pub fn from_source(source: String) -> std::result::Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_function("html_safe", html_safe);
        env.add_template_owned(INDEX_TEMPLATE, source)?;
        Ok(Self { env })
    }

    pub fn render_index(&self) -> Result<String> {
        let tmpl = self.env.get_template(INDEX_TEMPLATE)?;
        Ok(tmpl.render(context! {})?)
    }

    pub fn render_search(&self, page: &SearchPage) -> Result<String> {
        let tmpl = self.env.get_template(INDEX_TEMPLATE)?;
        Ok(tmpl.render(context! { search => page })?)
    }
}
