//! cURL command generation.

use super::RenderInput;

/// Escapes text for a double-quoted shell argument.
fn shell_double_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escapes text for a single-quoted shell argument.
fn shell_single_quoted(s: &str) -> String {
    s.replace('\'', "'\\''")
}

pub fn render(input: &RenderInput) -> String {
    let mut command = format!(
        "curl -X {} \"{}\"",
        input.method,
        shell_double_quoted(input.url)
    );

    for (name, value) in &input.headers {
        command.push_str(&format!(
            " \\\n  -H \"{}: {}\"",
            shell_double_quoted(name),
            shell_double_quoted(value)
        ));
    }

    if let Some(body) = input.body {
        command.push_str(&format!(" \\\n  -d '{}'", shell_single_quoted(body)));
    }

    command
}
