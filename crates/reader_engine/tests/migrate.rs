use std::fs;

use pretty_assertions::assert_eq;
use reader_engine::{run_migration, ExtractError, ManifestDoc, MigrateError, PageDoc};
use tempfile::TempDir;

const SOURCE: &str = r#"<html>
<head>
<style>
:root { --ink: #111; }
.page { padding: 2rem; }
</style>
</head>
<body>
<script>
        const pageData = {
            1: { title: "Cover", content: `<h1>Cover</h1>` },
            7: { title: "Detours", content: `
                <p>Out of order on purpose.</p>
            ` },
            2: { title: "Contents", content: `<ul><li>Cover</li></ul>` }
        };
</script>
</body>
</html>
"#;

fn write_source(dir: &TempDir, text: &str) -> std::path::PathBuf {
    let path = dir.path().join("reader.html");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn migration_writes_the_full_artifact_tree() {
    let temp = TempDir::new().unwrap();
    let source = write_source(&temp, SOURCE);
    let out_root = temp.path().join("reader");

    let report = run_migration(&source, &out_root).unwrap();
    assert_eq!(report.pages_written, 3);

    // All six directories exist, including the ones nothing writes into.
    for dir in [
        "css/components",
        "css/themes",
        "js/modules",
        "js/utils",
        "data/pages",
        "assets/images",
    ] {
        assert!(out_root.join(dir).is_dir(), "missing {dir}");
    }

    let manifest: ManifestDoc =
        serde_json::from_str(&fs::read_to_string(out_root.join("data/manifest.json")).unwrap())
            .unwrap();
    assert_eq!(manifest.title, "Agentic Reasoning for Large Language Models");
    assert_eq!(manifest.total_pages, 135);
    let pages: Vec<u32> = manifest.pages.iter().map(|entry| entry.page).collect();
    assert_eq!(pages, vec![1, 7, 2]);
    assert!(manifest.pages.iter().all(|entry| entry.has_content));
}

#[test]
fn page_artifacts_are_zero_padded_and_round_trip() {
    let temp = TempDir::new().unwrap();
    let source = write_source(&temp, SOURCE);
    let out_root = temp.path().join("reader");

    run_migration(&source, &out_root).unwrap();

    for name in ["page-001.json", "page-007.json", "page-002.json"] {
        assert!(out_root.join("data/pages").join(name).is_file());
    }

    let detours: PageDoc = serde_json::from_str(
        &fs::read_to_string(out_root.join("data/pages/page-007.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(detours.page, 7);
    assert_eq!(detours.title, "Detours");
    // Trimmed at extraction, then preserved byte for byte.
    assert_eq!(detours.content, "<p>Out of order on purpose.</p>");
}

#[test]
fn stylesheet_split_is_additive() {
    let temp = TempDir::new().unwrap();
    let source = write_source(&temp, SOURCE);
    let out_root = temp.path().join("reader");

    run_migration(&source, &out_root).unwrap();

    let theme = fs::read_to_string(out_root.join("css/themes/variables.css")).unwrap();
    assert_eq!(theme, ":root { --ink: #111; }");

    // The main stylesheet keeps the variables block too.
    let main = fs::read_to_string(out_root.join("css/main.css")).unwrap();
    assert!(main.contains(":root { --ink: #111; }"));
    assert!(main.contains(".page { padding: 2rem; }"));
}

#[test]
fn source_without_variables_writes_empty_theme_file() {
    let temp = TempDir::new().unwrap();
    let source = write_source(
        &temp,
        "<style>.page { color: black; }</style>\nconst pageData = {\n};",
    );
    let out_root = temp.path().join("reader");

    let report = run_migration(&source, &out_root).unwrap();
    assert_eq!(report.pages_written, 0);
    assert_eq!(
        fs::read_to_string(out_root.join("css/themes/variables.css")).unwrap(),
        ""
    );
}

#[test]
fn missing_anchor_aborts_before_any_output() {
    let temp = TempDir::new().unwrap();
    let source = write_source(&temp, "<html><style>.x{}</style><body>no data</body></html>");
    let out_root = temp.path().join("reader");

    let err = run_migration(&source, &out_root).unwrap_err();
    assert!(matches!(
        err,
        MigrateError::Extract(ExtractError::AnchorMissing)
    ));
    assert!(!out_root.exists());
}

#[test]
fn unreadable_source_is_fatal() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.html");
    let out_root = temp.path().join("reader");

    let err = run_migration(&missing, &out_root).unwrap_err();
    assert!(matches!(err, MigrateError::ReadSource { .. }));
    assert!(!out_root.exists());
}

#[test]
fn rerunning_replaces_artifacts_in_place() {
    let temp = TempDir::new().unwrap();
    let source = write_source(&temp, SOURCE);
    let out_root = temp.path().join("reader");

    run_migration(&source, &out_root).unwrap();
    let report = run_migration(&source, &out_root).unwrap();

    assert_eq!(report.pages_written, 3);
    let manifest: ManifestDoc =
        serde_json::from_str(&fs::read_to_string(out_root.join("data/manifest.json")).unwrap())
            .unwrap();
    assert_eq!(manifest.pages.len(), 3);
}
