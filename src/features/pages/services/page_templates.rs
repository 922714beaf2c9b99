use std::path::Path;

use minijinja::Environment;

use crate::core::error::AppError;

/// Loaded minijinja environment for the server-rendered pages.
///
/// Templates are read once at startup from the templates directory.
pub struct PageTemplates {
    env: Environment<'static>,
}

impl PageTemplates {
    /// Load all .html templates from a directory
    pub fn load(dir: &Path) -> Result<Self, AppError> {
        let mut env = Environment::new();

        let entries = std::fs::read_dir(dir).map_err(|e| {
            AppError::Internal(format!(
                "Failed to read template directory '{}': {}",
                dir.display(),
                e
            ))
        })?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "html") {
                let name = entry.file_name().to_string_lossy().to_string();
                let content = std::fs::read_to_string(&path).map_err(|e| {
                    AppError::Internal(format!("Failed to read template '{}': {}", name, e))
                })?;

                // Templates live for the whole process; leaking gives the
                // 'static lifetimes minijinja wants
                let static_name: &'static str = Box::leak(name.clone().into_boxed_str());
                let static_content: &'static str = Box::leak(content.into_boxed_str());

                if let Err(e) = env.add_template(static_name, static_content) {
                    tracing::warn!("Failed to load template {}: {}", name, e);
                } else {
                    tracing::debug!("Loaded template: {}", name);
                }
            }
        }

        Ok(Self { env })
    }

    /// Render a template with the given context
    pub fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String, AppError> {
        let template = self
            .env
            .get_template(name)
            .map_err(|_| AppError::Internal(format!("Template '{}' not found", name)))?;

        template
            .render(ctx)
            .map_err(|e| AppError::Internal(format!("Failed to render template '{}': {}", name, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn loads_and_renders_the_page_templates() {
        let templates = PageTemplates::load(Path::new("templates")).unwrap();

        let index = templates.render("index.html", context! {}).unwrap();
        assert!(index.contains("<html"));

        let admin = templates.render("admin.html", context! {}).unwrap();
        assert!(admin.contains("<html"));
    }

    #[test]
    fn unknown_template_is_an_internal_error() {
        let templates = PageTemplates::load(Path::new("templates")).unwrap();

        assert!(templates.render("missing.html", context! {}).is_err());
    }
}
