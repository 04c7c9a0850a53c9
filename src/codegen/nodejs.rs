//! Node.js generation using the built-in `http`/`https` modules.

use super::{quoted, single_quoted, RenderInput};
use url::Url;

struct Target {
    secure: bool,
    hostname: String,
    port: Option<u16>,
    path: String,
}

/// Splits the URL into request options; unparseable input is used as the
/// hostname verbatim.
fn target(raw: &str) -> Target {
    match Url::parse(raw) {
        Ok(url) => {
            let mut path = url.path().to_string();
            if let Some(query) = url.query().filter(|q| !q.is_empty()) {
                path.push('?');
                path.push_str(query);
            }
            Target {
                secure: url.scheme() == "https",
                hostname: url.host_str().unwrap_or_default().to_string(),
                port: url.port(),
                path,
            }
        }
        Err(_) => Target {
            secure: raw.starts_with("https:"),
            hostname: raw.to_string(),
            port: None,
            path: "/".to_string(),
        },
    }
}

pub fn render(input: &RenderInput) -> String {
    let target = target(input.url);
    let module = if target.secure { "https" } else { "http" };

    let mut code = format!("const {} = require('{}');\n\n", module, module);

    code.push_str("const options = {\n");
    code.push_str(&format!("  hostname: {},\n", single_quoted(&target.hostname)));
    if let Some(port) = target.port {
        code.push_str(&format!("  port: {},\n", port));
    }
    code.push_str(&format!("  path: {},\n", single_quoted(&target.path)));
    code.push_str(&format!("  method: '{}',\n", input.method));

    if !input.headers.is_empty() {
        let entries: Vec<String> = input
            .headers
            .iter()
            .map(|(name, value)| format!("    {}: {}", single_quoted(name), single_quoted(value)))
            .collect();
        code.push_str("  headers: {\n");
        code.push_str(&entries.join(",\n"));
        code.push_str("\n  }\n");
    }

    code.push_str("};\n\n");

    code.push_str(&format!("const req = {}.request(options, (res) => {{\n", module));
    code.push_str("  let data = '';\n\n");
    code.push_str("  res.on('data', (chunk) => {\n");
    code.push_str("    data += chunk;\n");
    code.push_str("  });\n\n");
    code.push_str("  res.on('end', () => {\n");
    code.push_str("    console.log(data);\n");
    code.push_str("  });\n");
    code.push_str("});\n\n");

    code.push_str("req.on('error', (error) => {\n");
    code.push_str("  console.error('Error:', error);\n");
    code.push_str("});\n\n");

    if let Some(body) = input.body {
        code.push_str(&format!("req.write({});\n", quoted(body)));
    }

    code.push_str("req.end();");
    code
}
