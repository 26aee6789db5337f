use std::fmt::Write;

use super::escape;

pub fn errors(messages: &[String]) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let mut html = String::from(r#"<ul class="errors">"#);
    for message in messages {
        let _ = write!(html, "<li>{}</li>", escape(message));
    }
    html.push_str("</ul>");
    html
}

pub fn text_input(name: &str, label: &str, value: &str) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
<input type="text" id="{name}" name="{name}" value="{value}">
"#,
        label = escape(label),
        value = escape(value),
    )
}

pub fn optional_input(name: &str, label: &str, value: Option<&str>) -> String {
    text_input(name, label, value.unwrap_or_default())
}

pub fn select(name: &str, label: &str, choices: &[&str], selected: &str) -> String {
    let mut html = format!(
        r#"<label for="{name}">{label}</label>
<select id="{name}" name="{name}">
"#,
        label = escape(label)
    );
    for choice in choices {
        let marker = if *choice == selected { " selected" } else { "" };
        let _ = writeln!(
            html,
            r#"<option value="{value}"{marker}>{value}</option>"#,
            value = escape(choice)
        );
    }
    html.push_str("</select>\n");
    html
}

pub fn multi_select(name: &str, label: &str, choices: &[&str], selected: &[String]) -> String {
    let mut html = format!(
        r#"<label for="{name}">{label}</label>
<select id="{name}" name="{name}" multiple>
"#,
        label = escape(label)
    );
    for choice in choices {
        let marker = if selected.iter().any(|genre| genre == choice) {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(
            html,
            r#"<option value="{value}"{marker}>{value}</option>"#,
            value = escape(choice)
        );
    }
    html.push_str("</select>\n");
    html
}

pub fn checkbox(name: &str, label: &str, checked: bool) -> String {
    let marker = if checked { " checked" } else { "" };
    format!(
        r#"<label><input type="checkbox" name="{name}" value="y"{marker}> {label}</label>
"#,
        label = escape(label)
    )
}
