use std::fs;
use std::path::{Path, PathBuf};

use glux_core::config::TriggerConfig;
use glux_core::model::DeclarationKind;
use glux_parser::markers::find_markers;
use glux_parser::scan_project;

#[test]
fn java_marker_on_class_with_package() {
    let source = r#"
package com.example.app;

import dv.trung.glux.annotations.Font;

@Font(packageName = "com.example.app")
public class App extends Application { }
"#;
    let found = find_markers(Path::new("App.java"), source, "Font").unwrap();
    assert_eq!(found.len(), 1);
    let m = &found[0];
    assert_eq!(m.site.kind, DeclarationKind::Class);
    assert_eq!(m.site.name.as_deref(), Some("App"));
    assert_eq!(m.site.line, 6);
    assert_eq!(m.package_name.as_deref(), Some("com.example.app"));
}

#[test]
fn java_qualified_marker_name() {
    let source = r#"@dv.trung.glux.annotations.Font(packageName = "a.b") class App {}"#;
    let found = find_markers(Path::new("App.java"), source, "Font").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].package_name.as_deref(), Some("a.b"));
}

#[test]
fn java_marker_without_arguments() {
    let source = "@Font public class App {}";
    let found = find_markers(Path::new("App.java"), source, "Font").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].site.kind, DeclarationKind::Class);
    assert!(found[0].package_name.is_none());
}

#[test]
fn java_marker_with_empty_package() {
    let source = r#"@Font(packageName = "") public class App {}"#;
    let found = find_markers(Path::new("App.java"), source, "Font").unwrap();
    assert_eq!(found[0].package_name.as_deref(), Some(""));
}

#[test]
fn java_marker_on_method_and_interface() {
    let source = r#"
@Font(packageName = "a.b")
interface Styled {}

class App {
    @Font(packageName = "a.b")
    void onCreate() {}
}
"#;
    let found = find_markers(Path::new("App.java"), source, "Font").unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].site.kind, DeclarationKind::Interface);
    assert_eq!(found[0].site.name.as_deref(), Some("Styled"));
    assert_eq!(found[1].site.kind, DeclarationKind::Method);
    assert_eq!(found[1].site.name.as_deref(), Some("onCreate"));
}

#[test]
fn java_marker_on_field() {
    let source = r#"class App { @Font(packageName = "a.b") String fonts; }"#;
    let found = find_markers(Path::new("App.java"), source, "Font").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].site.kind, DeclarationKind::Field);
    assert_eq!(found[0].site.name.as_deref(), Some("fonts"));
}

#[test]
fn java_unrelated_annotations_ignored() {
    let source = r#"
@SuppressWarnings("unused")
@FontFamily(packageName = "x.y")
public class App {
    @Override public String toString() { return ""; }
}
"#;
    let found = find_markers(Path::new("App.java"), source, "Font").unwrap();
    assert!(found.is_empty());
}

#[test]
fn java_escaped_package_value_is_decoded() {
    let source = r#"@Font(packageName = "com\"example\tapp") class App {}"#;
    let found = find_markers(Path::new("App.java"), source, "Font").unwrap();
    assert_eq!(found[0].package_name.as_deref(), Some("com\"example\tapp"));
}

#[test]
fn java_non_literal_package_is_absent() {
    let source = "@Font(packageName = BuildConfig.APPLICATION_ID) class App {}";
    let found = find_markers(Path::new("App.java"), source, "Font").unwrap();
    assert_eq!(found.len(), 1);
    assert!(found[0].package_name.is_none());
}

#[test]
fn java_custom_marker_name() {
    let source = r#"@Typefaces(packageName = "a.b") class App {}"#;
    assert!(find_markers(Path::new("App.java"), source, "Font").unwrap().is_empty());
    assert_eq!(
        find_markers(Path::new("App.java"), source, "Typefaces")
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn scan_project_orders_by_file_and_line() {
    let tmp = tempfile::tempdir().unwrap();
    let src = tmp.path().join("src/main/java/com/example");
    fs::create_dir_all(&src).unwrap();
    fs::write(
        src.join("B.java"),
        "@Font(packageName = \"b\") class B {}\n",
    )
    .unwrap();
    fs::write(
        src.join("A.java"),
        "class Other {}\n\n@Font(packageName = \"a\") class A {}\n",
    )
    .unwrap();

    let found = scan_project(tmp.path(), &TriggerConfig::default()).unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(
        found[0].site.file,
        PathBuf::from("src/main/java/com/example/A.java")
    );
    assert_eq!(found[0].site.line, 3);
    assert_eq!(found[1].package_name.as_deref(), Some("b"));
}

#[test]
fn scan_project_without_sources_is_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let found = scan_project(tmp.path(), &TriggerConfig::default()).unwrap();
    assert!(found.is_empty());
}
