//! Rendering properties of the embedded template bank against the manifest.

use repokit_core::RepoInputs;
use repokit_renderer::{manifest, RenderError, TemplateEngine, VariableSet};
use rstest::rstest;
use tempfile::TempDir;

fn acme() -> RepoInputs {
    RepoInputs::new("acme", "widget", "MIT")
}

fn render_destination(engine: &TemplateEngine, inputs: &RepoInputs, destination: &str) -> String {
    let entry = manifest::entries()
        .iter()
        .find(|e| e.destination == destination)
        .unwrap_or_else(|| panic!("no manifest entry for {destination}"));
    engine
        .render(entry.template, &entry.variable_set(inputs))
        .unwrap_or_else(|e| panic!("render failed for {destination}: {e}"))
}

#[test]
fn every_manifest_entry_renders_with_its_own_variables() {
    let engine = TemplateEngine::embedded().expect("engine");
    let inputs = acme();
    for entry in manifest::entries() {
        let out = engine
            .render(entry.template, &entry.variable_set(&inputs))
            .unwrap_or_else(|e| panic!("render failed for {}: {e}", entry.template));
        assert!(!out.trim().is_empty(), "{} rendered empty", entry.template);
        assert!(!out.contains("{{"), "unrendered placeholder in {}", entry.template);
        assert!(!out.contains('\r'), "CR in {}", entry.template);
    }
}

#[test]
fn rendering_is_idempotent() {
    let engine = TemplateEngine::embedded().expect("engine");
    let inputs = acme();
    for entry in manifest::entries() {
        let vars = entry.variable_set(&inputs);
        let first = engine.render(entry.template, &vars).expect("first render");
        let second = engine.render(entry.template, &vars).expect("second render");
        assert_eq!(first, second, "{} is not deterministic", entry.template);
    }
}

#[test]
fn codeowners_assigns_everything_to_org() {
    let engine = TemplateEngine::embedded().expect("engine");
    let out = render_destination(&engine, &acme(), "CODEOWNERS.md");
    assert!(out.lines().any(|l| l == "* @acme"), "missing `* @acme` line:\n{out}");
}

#[rstest]
#[case("README.md", "acme")]
#[case("README.md", "widget")]
#[case("README.md", "MIT")]
#[case("SECURITY.md", "acme")]
#[case("SECURITY.md", "github.com/acme/widget")]
#[case("SUPPORT.md", "github.com/acme/widget/issues")]
#[case("CODE_OF_CONDUCT.md", "acme")]
#[case("CONTRIBUTING.md", "MIT")]
#[case("CHANGELOG.md", "widget")]
#[case(".github/ISSUE_TEMPLATE/bug.yml", "acme/widget")]
#[case(".github/ISSUE_TEMPLATE/feature_request.yml", "widget")]
#[case(".github/ISSUE_TEMPLATE/config.yml", "github.com/acme/widget")]
#[case(".github/pull_request_template.md", "widget")]
fn rendered_file_contains_input(#[case] destination: &str, #[case] needle: &str) {
    let engine = TemplateEngine::embedded().expect("engine");
    let out = render_destination(&engine, &acme(), destination);
    assert!(out.contains(needle), "{destination} should contain {needle:?}:\n{out}");
}

#[test]
fn different_inputs_change_output() {
    let engine = TemplateEngine::embedded().expect("engine");
    let a = render_destination(&engine, &acme(), "README.md");
    let globex = RepoInputs::new("globex", "gizmo", "Apache-2.0");
    let b = render_destination(&engine, &globex, "README.md");
    assert_ne!(a, b);
    assert!(!b.contains("acme"));
}

#[test]
fn missing_placeholder_value_fails_strictly() {
    let engine = TemplateEngine::embedded().expect("engine");
    let vars: VariableSet = [("repo", "widget")].into_iter().collect();
    let err = engine.render("readme.md.tera", &vars).unwrap_err();
    assert!(matches!(err, RenderError::Render { .. }), "got: {err}");
}

#[test]
fn user_template_override_wins() {
    let dir = TempDir::new().expect("tempdir");
    let custom_path = dir.path().join("github").join("pull_request_template.md.tera");
    std::fs::create_dir_all(custom_path.parent().expect("parent")).expect("mkdir");
    std::fs::write(&custom_path, "# Custom PR template for {{ repo }}\n").expect("write");

    let engine = TemplateEngine::new(Some(dir.path())).expect("engine");
    let out = render_destination(&engine, &acme(), ".github/pull_request_template.md");

    assert_eq!(out, "# Custom PR template for widget\n");
    // Non-overridden templates still come from the embedded bank.
    let readme = render_destination(&engine, &acme(), "README.md");
    assert!(readme.starts_with("# widget"));
}

#[test]
fn override_only_sees_its_entrys_variables() {
    let dir = TempDir::new().expect("tempdir");
    // CHANGELOG.md is rendered with `repo` only.
    std::fs::write(dir.path().join("changelog.md.tera"), "# {{ org }}/{{ repo }}\n")
        .expect("write");

    let engine = TemplateEngine::new(Some(dir.path())).expect("engine");
    let entry = manifest::entries()
        .iter()
        .find(|e| e.destination == "CHANGELOG.md")
        .expect("changelog entry");
    let err = engine
        .render(entry.template, &entry.variable_set(&acme()))
        .unwrap_err();

    assert!(matches!(err, RenderError::Render { .. }), "got: {err}");
    assert!(err.to_string().contains("org"), "got: {err}");
}
