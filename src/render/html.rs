//! HTML renderer — standalone page with the metadata laid out as tables.

use crate::model::*;
use crate::render::Renderer;

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, doc: &Document) -> String {
        let (title, body) = match doc {
            Document::Element(meta) => (meta.element_name.clone(), render_element_body(meta)),
            Document::Changelog(releases) => {
                ("Changelog".to_string(), render_changelog_body(releases))
            }
        };

        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", html_escape(&title)));
        out.push_str("<style>\n");
        out.push_str("body { font-family: system-ui, sans-serif; max-width: 52em; margin: 2em auto; padding: 0 1em; }\n");
        out.push_str("code { background: #f4f4f4; padding: 0.15em 0.3em; border-radius: 3px; }\n");
        out.push_str("table { border-collapse: collapse; width: 100%; margin-bottom: 1.5em; }\n");
        out.push_str("th, td { border: 1px solid #ddd; padding: 0.4em 0.6em; text-align: left; vertical-align: top; }\n");
        out.push_str("th { background: #f4f4f4; }\n");
        out.push_str(".tag { display: inline-block; font-size: 0.75em; padding: 0.1em 0.4em; border-radius: 3px; background: #e8e8e8; margin-right: 0.3em; }\n");
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");
        out.push_str(&body);
        out.push_str("</body>\n</html>\n");
        out
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_element_body(meta: &ElementMeta) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "<h1><code>&lt;{}&gt;</code></h1>\n",
        html_escape(&meta.element_name)
    ));
    if !meta.class_name.is_empty() {
        out.push_str(&format!(
            "<p>Class: <code>{}</code></p>\n",
            html_escape(&meta.class_name)
        ));
    }

    if !meta.events.is_empty() {
        out.push_str("<h2>Events</h2>\n<table>\n");
        out.push_str("  <tr><th>Name</th><th>Bubbles</th><th>Description</th></tr>\n");
        for event in &meta.events {
            out.push_str(&format!(
                "  <tr><td><code>{}</code></td><td>{}</td><td>{}</td></tr>\n",
                html_escape(&event.name),
                if event.bubbles { "yes" } else { "no" },
                html_escape(&event.description)
            ));
        }
        out.push_str("</table>\n");
    }

    if !meta.parts.is_empty() {
        out.push_str("<h2>Parts</h2>\n<table>\n");
        out.push_str("  <tr><th>Name</th><th>Description</th></tr>\n");
        for part in &meta.parts {
            out.push_str(&format!(
                "  <tr><td><code>{}</code></td><td>{}</td></tr>\n",
                html_escape(&part.name),
                html_escape(&part.description)
            ));
        }
        out.push_str("</table>\n");
    }

    if !meta.properties.is_empty() {
        out.push_str("<h2>Properties</h2>\n<table>\n");
        out.push_str("  <tr><th>Property</th><th>Attribute</th><th>Type</th><th>Default</th><th>Access</th><th>Description</th></tr>\n");
        for property in &meta.properties {
            out.push_str(&format!(
                "  <tr><td><code>{}</code></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                html_escape(&property.property_name),
                code_or_dash(property.attribute_name.as_deref()),
                render_type_html(property.type_decl.as_ref()),
                code_or_dash(property.default.as_deref()),
                if property.read_only { "read-only" } else { "read-write" },
                html_escape(&property.description)
            ));
        }
        out.push_str("</table>\n");
    }

    if !meta.methods.is_empty() {
        out.push_str("<h2>Methods</h2>\n<table>\n");
        out.push_str("  <tr><th>Signature</th><th>Type</th><th>Description</th></tr>\n");
        for method in &meta.methods {
            out.push_str(&format!(
                "  <tr><td><code>{}</code></td><td>{}</td><td>{}</td></tr>\n",
                html_escape(&method.name),
                code_or_dash(method.type_decl.as_deref()),
                html_escape(&method.description)
            ));
        }
        out.push_str("</table>\n");
    }

    out
}

fn render_changelog_body(releases: &[Release]) -> String {
    let mut out = String::new();

    out.push_str("<h1>Changelog</h1>\n");
    for release in releases {
        if release.date.is_empty() {
            out.push_str(&format!("<h2>{}</h2>\n", html_escape(&release.version)));
        } else {
            out.push_str(&format!(
                "<h2>{} ({})</h2>\n",
                html_escape(&release.version),
                html_escape(&release.date)
            ));
        }
        if release.items.is_empty() {
            continue;
        }
        out.push_str("<ul>\n");
        for item in &release.items {
            out.push_str("  <li>");
            for tag in &item.tags {
                out.push_str(&format!("<span class=\"tag\">{}</span>", html_escape(tag)));
            }
            out.push_str(&html_escape(&item.text));
            out.push_str("</li>\n");
        }
        out.push_str("</ul>\n");
    }

    out
}

fn render_type_html(type_decl: Option<&TypeDecl>) -> String {
    match type_decl {
        None => "—".to_string(),
        Some(TypeDecl::Single(name)) => format!("<code>{}</code>", html_escape(name)),
        Some(TypeDecl::Union(alternatives)) => alternatives
            .iter()
            .map(|name| format!("<code>{}</code>", html_escape(name)))
            .collect::<Vec<_>>()
            .join(" | "),
    }
}

fn code_or_dash(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => format!("<code>{}</code>", html_escape(text)),
        _ => "—".to_string(),
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_page_has_tables() {
        let meta = ElementMeta {
            element_name: "x-slider".to_string(),
            class_name: "XSliderElement".to_string(),
            events: vec![EventMeta {
                name: "change".to_string(),
                description: "Fired when the value changes.".to_string(),
                bubbles: false,
            }],
            properties: vec![PropertyMeta {
                property_name: "value".to_string(),
                attribute_name: Some("value".to_string()),
                type_decl: Some(TypeDecl::Single("number".to_string())),
                default: Some("0".to_string()),
                read_only: false,
                description: String::new(),
            }],
            ..Default::default()
        };
        let output = HtmlRenderer.render(&Document::Element(meta));
        assert!(output.contains("<!DOCTYPE html>"));
        assert!(output.contains("<title>x-slider</title>"));
        assert!(output.contains("<h1><code>&lt;x-slider&gt;</code></h1>"));
        assert!(output.contains("<h2>Properties</h2>"));
        assert!(output.contains("<td><code>value</code></td>"));
    }

    #[test]
    fn changelog_page_lists_releases() {
        let releases = vec![Release {
            version: "2.0.0".to_string(),
            date: "PENDING".to_string(),
            items: vec![ReleaseItem {
                tags: vec!["Breaking".to_string()],
                text: "New theming engine.".to_string(),
            }],
        }];
        let output = HtmlRenderer.render(&Document::Changelog(releases));
        assert!(output.contains("<h2>2.0.0 (PENDING)</h2>"));
        assert!(output.contains("<span class=\"tag\">Breaking</span>"));
    }

    #[test]
    fn escape_special_characters() {
        assert_eq!(html_escape("a < b & c"), "a &lt; b &amp; c");
    }
}
