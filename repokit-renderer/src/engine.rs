//! Tera template bank: [`TemplateEngine`].
//!
//! Templates are baked into the binary with `include_str!`. A user template
//! directory may override any of them: a file's path relative to that
//! directory, lower-cased with `/` separators, is its template name.
//!
//! Placeholders are strict. `{{ org }}` with no `org` variable is a
//! [`RenderError::Render`], never an empty string.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::Tera;

use crate::context::VariableSet;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates: baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("readme.md.tera", include_str!("templates/readme.md.tera")),
    ("changelog.md.tera", include_str!("templates/changelog.md.tera")),
    ("support.md.tera", include_str!("templates/support.md.tera")),
    ("security.md.tera", include_str!("templates/security.md.tera")),
    (
        "code_of_conduct.md.tera",
        include_str!("templates/code_of_conduct.md.tera"),
    ),
    (
        "contributing.md.tera",
        include_str!("templates/contributing.md.tera"),
    ),
    ("codeowners.md.tera", include_str!("templates/codeowners.md.tera")),
    (
        "github/issue_template/bug.yml.tera",
        include_str!("templates/github/issue_template/bug.yml.tera"),
    ),
    (
        "github/issue_template/feature_request.yml.tera",
        include_str!("templates/github/issue_template/feature_request.yml.tera"),
    ),
    (
        "github/issue_template/config.yml.tera",
        include_str!("templates/github/issue_template/config.yml.tera"),
    ),
    (
        "github/pull_request_template.md.tera",
        include_str!("templates/github/pull_request_template.md.tera"),
    ),
];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/").to_lowercase()
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_user_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        return Err(io_err(
            dir,
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "template directory does not exist",
            ),
        ));
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    files.sort();
    let mut templates = Vec::new();
    for path in files {
        if path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        tracing::debug!("template override: {} ({})", name, path.display());
        templates.push((name, contents));
    }
    Ok(templates)
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = HashMap::new();
    for (name, content) in TPLS {
        templates.insert(
            normalize_template_name(Path::new(name)),
            (*content).to_string(),
        );
    }
    if let Some(dir) = user_template_dir {
        for (name, content) in load_user_templates(dir)? {
            templates.insert(name, content);
        }
    }

    let mut tera = Tera::default();
    // Output is Markdown/YAML; values go in verbatim.
    tera.autoescape_on(vec![]);
    let items: Vec<(String, String)> = templates.into_iter().collect();
    tera.add_raw_templates(items).map_err(RenderError::Syntax)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine for rendering named templates with optional user overrides.
///
/// Built once per run and read-only afterwards.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Construct a new [`TemplateEngine`], loading embedded templates plus any
    /// overrides found in `user_template_dir`.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(TemplateEngine { tera })
    }

    /// Engine with embedded templates only.
    pub fn embedded() -> Result<Self, RenderError> {
        Self::new(None)
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Names of every loaded template, sorted.
    pub fn template_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .tera
            .get_template_names()
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }

    /// Render `template_name` with `variables`.
    ///
    /// Line endings in the output are normalised to LF.
    pub fn render(
        &self,
        template_name: &str,
        variables: &VariableSet,
    ) -> Result<String, RenderError> {
        if !self.has_template(template_name) {
            return Err(RenderError::TemplateNotFound {
                name: template_name.to_string(),
            });
        }
        let ctx = variables.to_tera_context()?;
        let rendered = self
            .tera
            .render(template_name, &ctx)
            .map_err(|source| RenderError::Render {
                name: template_name.to_string(),
                source,
            })?;
        Ok(rendered.replace("\r\n", "\n"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn acme() -> VariableSet {
        [("org", "acme"), ("repo", "widget"), ("license", "MIT")]
            .into_iter()
            .collect()
    }

    #[test]
    fn embedded_engine_builds() {
        TemplateEngine::embedded().expect("embedded templates should parse");
    }

    #[test]
    fn every_embedded_template_is_loaded() {
        let engine = TemplateEngine::embedded().unwrap();
        for (name, _) in TPLS {
            assert!(engine.has_template(name), "missing embedded template {name}");
        }
        assert_eq!(engine.template_names().len(), TPLS.len());
    }

    #[test]
    fn unknown_template_is_not_found() {
        let engine = TemplateEngine::embedded().unwrap();
        let err = engine.render("nope.md.tera", &acme()).unwrap_err();
        assert!(
            matches!(err, RenderError::TemplateNotFound { ref name } if name == "nope.md.tera"),
            "got: {err}"
        );
    }

    #[test]
    fn missing_variable_is_an_error() {
        let engine = TemplateEngine::embedded().unwrap();
        let err = engine
            .render("codeowners.md.tera", &VariableSet::new())
            .unwrap_err();
        assert!(matches!(err, RenderError::Render { .. }), "got: {err}");
        assert!(err.to_string().contains("codeowners.md.tera"));
    }

    #[test]
    fn values_are_inserted_verbatim() {
        let engine = TemplateEngine::embedded().unwrap();
        let vars: VariableSet = [("org", "a<b>&\"c\"")].into_iter().collect();
        let out = engine.render("codeowners.md.tera", &vars).unwrap();
        assert!(out.contains("* @a<b>&\"c\""), "value was escaped: {out}");
    }

    #[test]
    fn user_template_overrides_embedded() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("codeowners.md.tera"), "owners: {{ org }}\n").unwrap();
        let engine = TemplateEngine::new(Some(dir.path())).unwrap();
        let out = engine.render("codeowners.md.tera", &acme()).unwrap();
        assert_eq!(out, "owners: acme\n");
    }

    #[test]
    fn nested_user_template_names_are_normalised() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("GitHub").join("Issue_Template");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("Bug.yml.tera"), "name: {{ repo }}\n").unwrap();
        fs::write(nested.join("notes.txt"), "ignored").unwrap();

        let engine = TemplateEngine::new(Some(dir.path())).unwrap();
        let out = engine
            .render("github/issue_template/bug.yml.tera", &acme())
            .unwrap();
        assert_eq!(out, "name: widget\n");
        assert!(!engine.template_names().iter().any(|n| n.ends_with("notes.txt")));
    }

    #[test]
    fn malformed_user_template_is_syntax_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("broken.md.tera"), "{{ org ").unwrap();
        let err = TemplateEngine::new(Some(dir.path())).err().expect("should fail");
        assert!(matches!(err, RenderError::Syntax(_)), "got: {err}");
    }

    #[test]
    fn missing_user_template_dir_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = TemplateEngine::new(Some(dir.path().join("absent").as_path()))
            .err()
            .expect("should fail");
        assert!(matches!(err, RenderError::Io { .. }), "got: {err}");
    }

    #[test]
    fn crlf_templates_render_with_lf() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("crlf.md.tera"), "a {{ org }}\r\nb\r\n").unwrap();
        let engine = TemplateEngine::new(Some(dir.path())).unwrap();
        let out = engine.render("crlf.md.tera", &acme()).unwrap();
        assert_eq!(out, "a acme\nb\n");
    }
}
