//! Python generation using the `requests` library.

use super::{quoted, RenderInput};
use serde_json::Value;

/// Renders a JSON value as an equivalent Python literal.
fn python_literal(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quoted(s),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(python_literal).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", quoted(k), python_literal(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
    }
}

/// Triple-quoted Python string for non-JSON bodies.
///
/// Every `"` is escaped so a quote at the end of the body cannot merge
/// with the closing delimiter.
fn triple_quoted(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"\"\"{}\"\"\"", escaped)
}

pub fn render(input: &RenderInput) -> String {
    let mut code = String::from("import requests\n\n");
    code.push_str(&format!("url = {}\n", quoted(input.url)));

    let mut args = vec!["url".to_string()];

    if !input.headers.is_empty() {
        let entries: Vec<String> = input
            .headers
            .iter()
            .map(|(name, value)| format!("    {}: {}", quoted(name), quoted(value)))
            .collect();
        code.push_str("headers = {\n");
        code.push_str(&entries.join(",\n"));
        code.push_str("\n}\n\n");
        args.push("headers=headers".to_string());
    }

    if let Some(body) = input.body {
        match input.json_body() {
            Some(json) => {
                code.push_str(&format!("data = {}\n\n", python_literal(&json)));
                args.push("json=data".to_string());
            }
            None => {
                code.push_str(&format!("data = {}\n\n", triple_quoted(body)));
                args.push("data=data".to_string());
            }
        }
    }

    code.push_str(&format!(
        "response = requests.{}({})\n\n",
        input.method.as_str().to_lowercase(),
        args.join(", ")
    ));
    code.push_str("print(response.text)");
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Header, HttpMethod};
    use serde_json::json;

    #[test]
    fn test_python_literal() {
        let value = json!({"a": true, "b": null, "c": [1, 2.5, "x"], "d": false});
        assert_eq!(
            python_literal(&value),
            r#"{"a": True, "b": None, "c": [1, 2.5, "x"], "d": False}"#
        );
    }

    #[test]
    fn test_simple_get() {
        let input = RenderInput::new(HttpMethod::GET, "https://a.com/data", "", &[]);
        assert_eq!(
            render(&input),
            "import requests\n\nurl = \"https://a.com/data\"\nresponse = requests.get(url)\n\nprint(response.text)"
        );
    }

    #[test]
    fn test_post_json_with_headers() {
        let headers = vec![Header::new("Authorization", "Bearer t")];
        let input = RenderInput::new(HttpMethod::POST, "https://a.com", r#"{"ok":true}"#, &headers);
        let code = render(&input);

        assert!(code.contains("headers = {\n    \"Authorization\": \"Bearer t\"\n}\n\n"));
        assert!(code.contains("data = {\"ok\": True}\n\n"));
        assert!(code.contains("response = requests.post(url, headers=headers, json=data)"));
    }

    #[test]
    fn test_text_body_uses_data_argument() {
        let input = RenderInput::new(HttpMethod::PATCH, "https://a.com", "a=1&b=2", &[]);
        let code = render(&input);
        assert!(code.contains("data = \"\"\"a=1&b=2\"\"\"\n\n"));
        assert!(code.contains("response = requests.patch(url, data=data)"));
    }

    #[test]
    fn test_triple_quoted_escapes_quotes() {
        assert_eq!(triple_quoted(r#"say "hi""#), r#""""say \"hi\"""""#);
        assert_eq!(triple_quoted(r#"a""b"#), r#""""a\"\"b""""#);
        assert_eq!(triple_quoted(r#"x"""y"#), r#""""x\"\"\"y""""#);
        assert_eq!(triple_quoted(r"c:\dir"), r#""""c:\\dir""""#);
    }

    #[test]
    fn test_text_body_ending_in_quote() {
        let input = RenderInput::new(HttpMethod::POST, "https://a.com", r#"say "hi""#, &[]);
        let code = render(&input);
        assert!(code.contains("data = \"\"\"say \\\"hi\\\"\"\"\"\n\n"));
        assert!(!code.contains(r#""hi"""""#));
    }
}
