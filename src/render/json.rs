//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the model directly; field names match the annotation
//! vocabulary (camelCase). Single property types serialize as a string,
//! unions as an array of strings.

use crate::model::*;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &Document) -> String {
        match doc {
            Document::Element(meta) => render_element_json(meta),
            Document::Changelog(releases) => render_changelog_json(releases),
        }
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

fn render_element_json(meta: &ElementMeta) -> String {
    let mut out = String::new();
    out.push_str("{\n");
    out.push_str(&format!(
        "  \"elementName\": \"{}\",\n",
        json_escape(&meta.element_name)
    ));
    out.push_str(&format!(
        "  \"className\": \"{}\",\n",
        json_escape(&meta.class_name)
    ));

    write_array(&mut out, "events", &meta.events, true, |event| {
        format!(
            "{{ \"name\": \"{}\", \"bubbles\": {}, \"description\": \"{}\" }}",
            json_escape(&event.name),
            event.bubbles,
            json_escape(&event.description)
        )
    });

    write_array(&mut out, "parts", &meta.parts, true, |part| {
        format!(
            "{{ \"name\": \"{}\", \"description\": \"{}\" }}",
            json_escape(&part.name),
            json_escape(&part.description)
        )
    });

    write_array(&mut out, "properties", &meta.properties, true, |property| {
        format!(
            "{{ \"propertyName\": \"{}\", \"attributeName\": {}, \"type\": {}, \"default\": {}, \"readOnly\": {}, \"description\": \"{}\" }}",
            json_escape(&property.property_name),
            string_or_null(property.attribute_name.as_deref()),
            type_value(property.type_decl.as_ref()),
            string_or_null(property.default.as_deref()),
            property.read_only,
            json_escape(&property.description)
        )
    });

    write_array(&mut out, "methods", &meta.methods, false, |method| {
        format!(
            "{{ \"name\": \"{}\", \"type\": {}, \"description\": \"{}\" }}",
            json_escape(&method.name),
            string_or_null(method.type_decl.as_deref()),
            json_escape(&method.description)
        )
    });

    out.push_str("}\n");
    out
}

fn render_changelog_json(releases: &[Release]) -> String {
    let mut out = String::new();
    out.push_str("{\n");
    out.push_str("  \"releases\": [\n");
    for (i, release) in releases.iter().enumerate() {
        out.push_str("    {\n");
        out.push_str(&format!(
            "      \"version\": \"{}\",\n",
            json_escape(&release.version)
        ));
        out.push_str(&format!(
            "      \"date\": \"{}\",\n",
            json_escape(&release.date)
        ));
        if release.items.is_empty() {
            out.push_str("      \"items\": []\n");
        } else {
            out.push_str("      \"items\": [\n");
            for (j, item) in release.items.iter().enumerate() {
                let tags = item
                    .tags
                    .iter()
                    .map(|tag| format!("\"{}\"", json_escape(tag)))
                    .collect::<Vec<_>>()
                    .join(", ");
                out.push_str(&format!(
                    "        {{ \"tags\": [{}], \"text\": \"{}\" }}{}\n",
                    tags,
                    json_escape(&item.text),
                    if j + 1 < release.items.len() { "," } else { "" }
                ));
            }
            out.push_str("      ]\n");
        }
        out.push_str(&format!(
            "    }}{}\n",
            if i + 1 < releases.len() { "," } else { "" }
        ));
    }
    out.push_str("  ]\n");
    out.push_str("}\n");
    out
}

/// Write a named array field of the top-level object.
fn write_array<T>(
    out: &mut String,
    name: &str,
    items: &[T],
    trailing_comma: bool,
    render_item: impl Fn(&T) -> String,
) {
    let comma = if trailing_comma { "," } else { "" };
    if items.is_empty() {
        out.push_str(&format!("  \"{}\": []{}\n", name, comma));
        return;
    }
    out.push_str(&format!("  \"{}\": [\n", name));
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!(
            "    {}{}\n",
            render_item(item),
            if i + 1 < items.len() { "," } else { "" }
        ));
    }
    out.push_str(&format!("  ]{}\n", comma));
}

fn string_or_null(value: Option<&str>) -> String {
    match value {
        Some(text) => format!("\"{}\"", json_escape(text)),
        None => "null".to_string(),
    }
}

fn type_value(type_decl: Option<&TypeDecl>) -> String {
    match type_decl {
        None => "null".to_string(),
        Some(TypeDecl::Single(name)) => format!("\"{}\"", json_escape(name)),
        Some(TypeDecl::Union(alternatives)) => {
            let parts = alternatives
                .iter()
                .map(|name| format!("\"{}\"", json_escape(name)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("[{}]", parts)
        }
    }
}

fn json_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
