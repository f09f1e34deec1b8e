//! GitHub-flavored markdown renderer.

use crate::model::*;
use crate::render::Renderer;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Document) -> String {
        match doc {
            Document::Element(meta) => render_element(meta),
            Document::Changelog(releases) => render_changelog(releases),
        }
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn render_element(meta: &ElementMeta) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# {}\n", meta.element_name));

    if !meta.class_name.is_empty() {
        lines.push(format!("Class: `{}`", meta.class_name));
        lines.push(String::new());
    }

    if !meta.events.is_empty() {
        lines.push("## Events\n".to_string());
        for event in &meta.events {
            lines.push(render_event(event));
        }
        lines.push(String::new());
    }

    if !meta.parts.is_empty() {
        lines.push("## Parts\n".to_string());
        for part in &meta.parts {
            if part.description.is_empty() {
                lines.push(format!("* **{}**", part.name));
            } else {
                lines.push(format!("* **{}**: {}", part.name, part.description));
            }
        }
        lines.push(String::new());
    }

    if !meta.properties.is_empty() {
        lines.push("## Properties\n".to_string());
        for property in &meta.properties {
            render_property(&mut lines, property);
        }
    }

    if !meta.methods.is_empty() {
        lines.push("## Methods\n".to_string());
        for method in &meta.methods {
            render_method(&mut lines, method);
        }
    }

    let mut output = lines.join("\n");
    while output.ends_with('\n') {
        output.pop();
    }
    output.push('\n');
    output
}

fn render_event(event: &EventMeta) -> String {
    let mut line = format!("* **{}**", event.name);
    if event.bubbles {
        line.push_str(" (bubbles)");
    }
    if !event.description.is_empty() {
        line.push_str(": ");
        line.push_str(&event.description);
    }
    line
}

fn render_property(lines: &mut Vec<String>, property: &PropertyMeta) {
    lines.push(format!("### {}\n", property.property_name));

    if !property.description.is_empty() {
        lines.push(property.description.clone());
        lines.push(String::new());
    }

    if let Some(ref attribute) = property.attribute_name {
        if !attribute.is_empty() {
            lines.push(format!("* Attribute: `{}`", attribute));
        }
    }
    if let Some(ref type_decl) = property.type_decl {
        lines.push(format!("* Type: {}", render_type(type_decl)));
    }
    if let Some(ref default) = property.default {
        lines.push(format!("* Default: `{}`", default));
    }
    if property.read_only {
        lines.push("* Read-only".to_string());
    }
    lines.push(String::new());
}

fn render_method(lines: &mut Vec<String>, method: &MethodMeta) {
    lines.push(format!("### {}\n", method.name));

    if !method.description.is_empty() {
        lines.push(method.description.clone());
        lines.push(String::new());
    }

    if let Some(ref type_decl) = method.type_decl {
        lines.push(format!("* Type: `{}`", type_decl));
        lines.push(String::new());
    }
}

fn render_type(type_decl: &TypeDecl) -> String {
    match type_decl {
        TypeDecl::Single(name) => format!("`{}`", name),
        TypeDecl::Union(alternatives) => alternatives
            .iter()
            .map(|name| format!("`{}`", name))
            .collect::<Vec<_>>()
            .join(" | "),
    }
}

fn render_changelog(releases: &[Release]) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("# Changelog\n".to_string());

    for release in releases {
        if release.date.is_empty() {
            lines.push(format!("## {}\n", release.version));
        } else {
            lines.push(format!("## {} ({})\n", release.version, release.date));
        }
        for item in &release.items {
            let mut line = String::from("* ");
            for tag in &item.tags {
                line.push_str(&format!("**[{}]** ", tag));
            }
            line.push_str(&item.text);
            lines.push(line);
        }
        lines.push(String::new());
    }

    let mut output = lines.join("\n");
    while output.ends_with('\n') {
        output.pop();
    }
    output.push('\n');
    output
}
