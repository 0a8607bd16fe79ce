//! Extract marker annotations from a Java syntax tree.

use crate::treesitter::parse_java;
use glux_core::Result;
use glux_core::model::{DeclarationKind, DeclarationSite, MarkerOccurrence};
use std::path::Path;

/// Attribute carrying the requested package.
pub const PACKAGE_ATTRIBUTE: &str = "packageName";

/// Find every `@<marker>` annotation in a Java source file.
///
/// Both the simple name and fully qualified names ending in `.<marker>` match.
pub fn find_markers(path: &Path, source: &str, marker: &str) -> Result<Vec<MarkerOccurrence>> {
    let tree = parse_java(path, source.as_bytes())?;
    let mut found = Vec::new();
    collect(&tree.root_node(), path, source, marker, &mut found);
    Ok(found)
}

fn collect(
    node: &tree_sitter::Node,
    path: &Path,
    source: &str,
    marker: &str,
    found: &mut Vec<MarkerOccurrence>,
) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "annotation" | "marker_annotation" => {
                if let Some(name_node) = child.child_by_field_name("name")
                    && matches_marker(&source[name_node.byte_range()], marker)
                {
                    found.push(MarkerOccurrence {
                        site: declaration_site(&child, path, source),
                        package_name: package_attribute(&child, source),
                    });
                }
            }
            _ => collect(&child, path, source, marker, found),
        }
    }
}

fn matches_marker(name: &str, marker: &str) -> bool {
    let name: String = name.chars().filter(|c| !c.is_whitespace()).collect();
    name == marker
        || name
            .strip_suffix(marker)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Resolve the declaration an annotation belongs to.
fn declaration_site(annotation: &tree_sitter::Node, path: &Path, source: &str) -> DeclarationSite {
    let line = annotation.start_position().row + 1;
    let owner = annotation.parent().and_then(|parent| {
        if parent.kind() == "modifiers" {
            parent.parent()
        } else {
            Some(parent)
        }
    });

    let (kind, name) = match owner {
        Some(owner) => (
            declaration_kind(owner.kind()),
            declared_name(&owner, source),
        ),
        None => (DeclarationKind::Other, None),
    };

    DeclarationSite {
        file: path.to_path_buf(),
        line,
        kind,
        name,
    }
}

fn declaration_kind(node_kind: &str) -> DeclarationKind {
    match node_kind {
        "class_declaration" => DeclarationKind::Class,
        "interface_declaration" => DeclarationKind::Interface,
        "enum_declaration" => DeclarationKind::Enum,
        "record_declaration" => DeclarationKind::Record,
        "annotation_type_declaration" => DeclarationKind::AnnotationType,
        "method_declaration" | "annotation_type_element_declaration" => DeclarationKind::Method,
        "constructor_declaration" | "compact_constructor_declaration" => {
            DeclarationKind::Constructor
        }
        "field_declaration" | "constant_declaration" => DeclarationKind::Field,
        "formal_parameter" | "spread_parameter" => DeclarationKind::Parameter,
        "local_variable_declaration" => DeclarationKind::LocalVariable,
        "package_declaration" => DeclarationKind::Package,
        _ => DeclarationKind::Other,
    }
}

fn declared_name(owner: &tree_sitter::Node, source: &str) -> Option<String> {
    if let Some(name) = owner.child_by_field_name("name") {
        return Some(source[name.byte_range()].to_string());
    }
    // Fields and locals: first declarator carries the name.
    if let Some(declarator) = owner.child_by_field_name("declarator")
        && let Some(name) = declarator.child_by_field_name("name")
    {
        return Some(source[name.byte_range()].to_string());
    }
    if owner.kind() == "package_declaration" {
        let mut cursor = owner.walk();
        return owner
            .named_children(&mut cursor)
            .find(|c| matches!(c.kind(), "identifier" | "scoped_identifier"))
            .map(|c| source[c.byte_range()].to_string());
    }
    None
}

/// Value of `packageName = "..."`, if present as a string literal.
fn package_attribute(annotation: &tree_sitter::Node, source: &str) -> Option<String> {
    let arguments = annotation.child_by_field_name("arguments")?;
    let mut cursor = arguments.walk();
    for pair in arguments.named_children(&mut cursor) {
        if pair.kind() != "element_value_pair" {
            continue;
        }
        let Some(key) = pair.child_by_field_name("key") else {
            continue;
        };
        if &source[key.byte_range()] != PACKAGE_ATTRIBUTE {
            continue;
        }
        let value = pair.child_by_field_name("value")?;
        if value.kind() != "string_literal" {
            tracing::warn!(
                "{} is not a string literal: {}",
                PACKAGE_ATTRIBUTE,
                &source[value.byte_range()]
            );
            return None;
        }
        return Some(string_literal_value(&value, source));
    }
    None
}

/// Decode a Java string literal node into its runtime value.
fn string_literal_value(literal: &tree_sitter::Node, source: &str) -> String {
    let mut value = String::new();
    let mut cursor = literal.walk();
    for part in literal.named_children(&mut cursor) {
        let text = &source[part.byte_range()];
        match part.kind() {
            "string_fragment" | "multiline_string_fragment" => value.push_str(text),
            "escape_sequence" => value.push_str(&decode_escape(text)),
            _ => {}
        }
    }
    value
}

fn decode_escape(text: &str) -> String {
    let body = text.strip_prefix('\\').unwrap_or(text);
    match body {
        "n" => "\n".to_string(),
        "t" => "\t".to_string(),
        "r" => "\r".to_string(),
        "b" => "\u{8}".to_string(),
        "f" => "\u{c}".to_string(),
        "s" => " ".to_string(),
        "\"" | "'" | "\\" => body.to_string(),
        _ => {
            if let Some(hex) = body.trim_start_matches('u').get(..4)
                && body.starts_with('u')
                && let Ok(code) = u32::from_str_radix(hex, 16)
                && let Some(c) = char::from_u32(code)
            {
                return c.to_string();
            }
            if let Ok(code) = u32::from_str_radix(body, 8)
                && let Some(c) = char::from_u32(code)
            {
                return c.to_string();
            }
            text.to_string()
        }
    }
}
