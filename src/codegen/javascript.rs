//! Browser JavaScript generation: `fetch()` and `XMLHttpRequest`.

use super::{quoted, RenderInput};

/// Escapes text for a JavaScript template literal.
fn template_literal(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${");
    format!("`{}`", escaped)
}

/// Body expression for `fetch`: JSON bodies are embedded as object literals.
fn fetch_body(input: &RenderInput) -> Option<String> {
    let body = input.body?;
    Some(match input.json_body() {
        Some(_) => format!("JSON.stringify({})", body.trim()),
        None => template_literal(body),
    })
}

pub fn render_fetch(input: &RenderInput) -> String {
    let mut code = format!("fetch({}, {{\n", quoted(input.url));
    code.push_str(&format!("  method: \"{}\",\n", input.method));

    if !input.headers.is_empty() {
        let entries: Vec<String> = input
            .headers
            .iter()
            .map(|(name, value)| format!("    {}: {}", quoted(name), quoted(value)))
            .collect();
        code.push_str("  headers: {\n");
        code.push_str(&entries.join(",\n"));
        code.push_str("\n  },\n");
    }

    if let Some(body) = fetch_body(input) {
        code.push_str(&format!("  body: {},\n", body));
    }

    code.push_str("})\n");
    code.push_str("  .then(response => response.json())\n");
    code.push_str("  .then(data => console.log(data))\n");
    code.push_str("  .catch(error => console.error('Error:', error));");
    code
}

pub fn render_xhr(input: &RenderInput) -> String {
    let mut code = String::from("const xhr = new XMLHttpRequest();\n");
    code.push_str(&format!(
        "xhr.open(\"{}\", {});\n\n",
        input.method,
        quoted(input.url)
    ));

    for (name, value) in &input.headers {
        code.push_str(&format!(
            "xhr.setRequestHeader({}, {});\n",
            quoted(name),
            quoted(value)
        ));
    }

    code.push_str("\nxhr.onreadystatechange = function() {\n");
    code.push_str("  if (xhr.readyState === 4) {\n");
    code.push_str("    console.log(xhr.responseText);\n");
    code.push_str("  }\n");
    code.push_str("};\n\n");

    match input.body {
        Some(body) => code.push_str(&format!("xhr.send({});", quoted(body))),
        None => code.push_str("xhr.send();"),
    }

    code
}
