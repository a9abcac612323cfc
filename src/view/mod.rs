//! HTML rendering. Every user-controlled string goes through [`text`] or [`attr`].

use std::borrow::Cow;

use crate::service::validation::FieldErrors;

pub mod admin;
pub mod forms;
pub mod landing;

const STYLESHEET: &str = "https://cdn.jsdelivr.net/npm/tailwindcss@2/dist/tailwind.min.css";

pub fn text(value: &str) -> Cow<'_, str> {
    html_escape::encode_text(value)
}

pub fn attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

pub fn page(title: &str, body_class: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>",
            "<html lang=\"en\"><head>",
            "<meta charset=\"utf-8\">",
            "<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">",
            "<meta name=\"description\" content=\"Professional networking and showcase platform\">",
            "<title>{title}</title>",
            "<link rel=\"stylesheet\" href=\"{css}\">",
            "</head><body class=\"{class}\">{body}</body></html>"
        ),
        title = text(title),
        css = STYLESHEET,
        class = attr(body_class),
        body = body,
    )
}

/// Centered card used by every form page.
pub fn card(heading: &str, inner: &str) -> String {
    format!(
        concat!(
            "<div class=\"min-h-screen bg-gray-900 text-gray-100 flex flex-col items-center justify-center p-4\">",
            "<div class=\"w-full max-w-2xl bg-gray-800 shadow-2xl rounded-xl p-8\">",
            "<h1 class=\"text-3xl font-bold text-blue-400 mb-6 text-center\">{heading}</h1>",
            "{inner}",
            "</div></div>"
        ),
        heading = text(heading),
        inner = inner,
    )
}

pub fn banner(message: Option<&str>, tone: &str) -> String {
    match message {
        Some(message) if !message.is_empty() => format!(
            "<div class=\"bg-{tone}-900 text-{tone}-300 p-4 rounded-lg mb-6 text-center\">{}</div>",
            text(message)
        ),
        _ => String::new(),
    }
}

fn border(errors: &FieldErrors, field: &str) -> &'static str {
    if errors.get(field).is_some() {
        "border-red-500"
    } else {
        "border-gray-600"
    }
}

fn field_error(errors: &FieldErrors, field: &str) -> String {
    errors
        .get(field)
        .map(|message| format!("<p class=\"text-red-400 text-sm mt-1\">{}</p>", text(message)))
        .unwrap_or_default()
}

pub struct Input<'a> {
    pub name: &'a str,
    pub label: &'a str,
    pub kind: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub required: bool,
}

pub fn input(field: &Input<'_>, errors: &FieldErrors) -> String {
    format!(
        concat!(
            "<div><label for=\"{name}\" class=\"block text-gray-300 mb-2\">{label}</label>",
            "<input type=\"{kind}\" id=\"{name}\" name=\"{name}\" value=\"{value}\" placeholder=\"{placeholder}\"",
            " class=\"w-full px-3 py-2 bg-gray-700 border {border} text-gray-100 rounded-lg\"{required}>",
            "{error}</div>"
        ),
        name = attr(field.name),
        label = text(field.label),
        kind = field.kind,
        value = attr(field.value),
        placeholder = attr(field.placeholder),
        border = border(errors, field.name),
        required = if field.required { " required" } else { "" },
        error = field_error(errors, field.name),
    )
}

pub fn textarea(name: &str, label: &str, value: &str, rows: u8, errors: &FieldErrors) -> String {
    format!(
        concat!(
            "<div><label for=\"{name}\" class=\"block text-gray-300 mb-2\">{label}</label>",
            "<textarea id=\"{name}\" name=\"{name}\" rows=\"{rows}\" required",
            " class=\"w-full px-3 py-2 bg-gray-700 border {border} text-gray-100 rounded-lg\">{value}</textarea>",
            "{error}</div>"
        ),
        name = attr(name),
        label = text(label),
        rows = rows,
        border = border(errors, name),
        value = text(value),
        error = field_error(errors, name),
    )
}

/// `(value, label)` pairs; the option equal to `selected` is preselected.
pub fn select(
    name: &str,
    label: &str,
    options: &[(&str, &str)],
    selected: &str,
    errors: &FieldErrors,
) -> String {
    let options: String = options
        .iter()
        .map(|(value, label)| {
            format!(
                "<option value=\"{}\"{}>{}</option>",
                attr(value),
                if *value == selected { " selected" } else { "" },
                text(label)
            )
        })
        .collect();
    format!(
        concat!(
            "<div><label for=\"{name}\" class=\"block text-gray-300 mb-2\">{label}</label>",
            "<select id=\"{name}\" name=\"{name}\" class=\"w-full px-3 py-2 bg-gray-700 border {border} text-gray-100 rounded-lg\">",
            "{options}</select>{error}</div>"
        ),
        name = attr(name),
        label = text(label),
        border = border(errors, name),
        options = options,
        error = field_error(errors, name),
    )
}

pub fn submit(label: &str, color: &str) -> String {
    format!(
        "<button type=\"submit\" class=\"w-full bg-{color}-600 text-white py-3 rounded-lg hover:bg-{color}-700 transition duration-300\">{}</button>",
        text(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_in_values() {
        let html = input(
            &Input {
                name: "title",
                label: "Title",
                kind: "text",
                value: "\"><script>alert(1)</script>",
                placeholder: "",
                required: true,
            },
            &FieldErrors::new(),
        );
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;") || html.contains("&quot;>&lt;script>"));
    }

    #[test]
    fn field_errors_are_rendered_next_to_inputs() {
        let errors = FieldErrors::single("title", "Title must be at least 3 characters long");
        let html = textarea("title", "Title", "ab", 3, &errors);
        assert!(html.contains("border-red-500"));
        assert!(html.contains("Title must be at least 3 characters long"));
    }

    #[test]
    fn select_marks_current_option() {
        let html = select(
            "colorScheme",
            "Scheme",
            &[("dark", "Dark"), ("ocean", "Ocean")],
            "ocean",
            &FieldErrors::new(),
        );
        assert!(html.contains("<option value=\"ocean\" selected>"));
        assert!(html.contains("<option value=\"dark\">"));
        assert!(html.contains("border-gray-600"));
    }

    #[test]
    fn select_shows_its_field_error() {
        let errors = FieldErrors::single("status", "Unknown status.");
        let html = select("status", "Status", &[("", "None"), ("idle", "Idle")], "bogus", &errors);
        assert!(html.contains("border-red-500"));
        assert!(html.contains("</select><p class=\"text-red-400 text-sm mt-1\">Unknown status.</p>"));
    }
}
