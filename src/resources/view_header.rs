//! View template header transform.
//!
//! Served view templates must start with a base-page declaration the
//! template engine expects, optionally typed with the template's declared
//! model. The transform is pure text: detect a `@model <Type>` declaration
//! line, strip it, and prepend `@inherits` plus the fixed convenience
//! imports. Detection never requires the model type to exist; anything that
//! does not look like a type token degrades silently to the untyped header.

use once_cell::sync::Lazy;
use regex::Regex;

/// Base page type every served template inherits from.
const BASE_PAGE_TYPE: &str = "System.Web.Mvc.WebViewPage";

/// Convenience imports prepended after the inherits line.
const IMPORTS: &[&str] = &[
    "System.Web.Mvc",
    "System.Web.WebPages",
    "System.Web.Mvc.Html",
    "System.Web.Optimization",
];

/// A model declaration: everything between the `@model` marker and the end
/// of its line, newline included so stripping removes the whole line.
static MODEL_DECLARATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@model([^\r\n]*)\r?\n")
        .unwrap_or_else(|e| panic!("invalid model declaration pattern: {}", e))
});

/// A plausible type token: dotted identifier with optional generics.
static TYPE_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_.]*(<[A-Za-z0-9_.,\s]+>)?$")
        .unwrap_or_else(|e| panic!("invalid type token pattern: {}", e))
});

/// Prepend the generated view header to template text.
///
/// Pure: the same input always yields the same output. With a well-formed
/// `@model` declaration the declaration line is stripped and the header is
/// typed; otherwise the text is returned unchanged behind the untyped
/// header.
pub fn prepend_view_header(text: &str) -> String {
    match detect_model(text) {
        Some((declaration, model)) => {
            let body = text.replacen(declaration.as_str(), "", 1);
            format!("{}{}", header(Some(&model)), body)
        }
        None => format!("{}{}", header(None), text),
    }
}

/// The generated header: `@inherits` (typed when a model is given) plus the
/// fixed imports, one per line.
pub fn header(model: Option<&str>) -> String {
    let model_suffix = model.map(|m| format!("<{}>", m)).unwrap_or_default();
    let mut out = format!("@inherits {}{}\n", BASE_PAGE_TYPE, model_suffix);
    for import in IMPORTS {
        out.push_str("@using ");
        out.push_str(import);
        out.push('\n');
    }
    out
}

/// Find the first well-formed model declaration. Returns the full matched
/// declaration (marker through newline) and the model type token.
fn detect_model(text: &str) -> Option<(String, String)> {
    let captures = MODEL_DECLARATION_RE.captures(text)?;
    let model = captures.get(1)?.as_str().trim();
    if !TYPE_TOKEN_RE.is_match(model) {
        return None;
    }
    Some((captures.get(0)?.as_str().to_string(), model.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_declaration_is_stripped_and_parameterizes_header() {
        let input = "@model Client1.Page.Models.ShowModel\n<p>hello</p>";
        let output = prepend_view_header(input);

        assert!(output.starts_with(
            "@inherits System.Web.Mvc.WebViewPage<Client1.Page.Models.ShowModel>\n"
        ));
        assert!(output.contains("@using System.Web.Mvc\n"));
        assert!(output.contains("@using System.Web.Optimization\n"));
        assert!(!output.contains("@model"));
        assert!(output.ends_with("<p>hello</p>"));
    }

    #[test]
    fn test_no_declaration_gets_fixed_prefix_plus_unchanged_text() {
        let input = "<p>no model here</p>";
        let output = prepend_view_header(input);
        assert_eq!(output, format!("{}{}", header(None), input));
    }

    #[test]
    fn test_transform_is_pure() {
        let input = "@model Acme.Widget\nbody";
        assert_eq!(prepend_view_header(input), prepend_view_header(input));

        let input = "plain body";
        assert_eq!(prepend_view_header(input), prepend_view_header(input));
    }

    #[test]
    fn test_malformed_model_degrades_silently() {
        // Not a type token: kept in the body, header untyped.
        let input = "@model 123 not a type\n<p>x</p>";
        let output = prepend_view_header(input);
        assert!(output.starts_with("@inherits System.Web.Mvc.WebViewPage\n"));
        assert!(output.contains("@model 123 not a type"));
    }

    #[test]
    fn test_generic_model_type() {
        let input = "@model System.Collections.Generic.List<Acme.Item>\nbody";
        let output = prepend_view_header(input);
        assert!(output.starts_with(
            "@inherits System.Web.Mvc.WebViewPage<System.Collections.Generic.List<Acme.Item>>\n"
        ));
        assert!(!output.contains("@model"));
    }

    #[test]
    fn test_crlf_declaration() {
        let input = "@model Acme.Widget\r\n<p>x</p>";
        let output = prepend_view_header(input);
        assert!(output.starts_with("@inherits System.Web.Mvc.WebViewPage<Acme.Widget>\n"));
        assert!(!output.contains("@model"));
    }

    #[test]
    fn test_untyped_header_shape() {
        let h = header(None);
        let lines: Vec<&str> = h.lines().collect();
        assert_eq!(lines.len(), 1 + IMPORTS.len());
        assert_eq!(lines[0], "@inherits System.Web.Mvc.WebViewPage");
        assert!(lines[1..].iter().all(|l| l.starts_with("@using ")));
    }
}
