//! Go generation using `net/http`.

use super::{quoted, RenderInput};

/// Go raw string literal; backticks cannot appear inside one, so they are
/// spliced in as interpreted strings. Raw strings drop `\r`, so bodies
/// containing one use an interpreted literal instead.
fn raw_string(s: &str) -> String {
    if s.contains('\r') {
        return quoted(s);
    }
    format!("`{}`", s.replace('`', "` + \"`\" + `"))
}

pub fn render(input: &RenderInput) -> String {
    let mut code = String::from("package main\n\n");
    code.push_str("import (\n");
    if input.body.is_some() {
        code.push_str("    \"bytes\"\n");
    }
    code.push_str("    \"fmt\"\n");
    code.push_str("    \"io\"\n");
    code.push_str("    \"net/http\"\n");
    code.push_str(")\n\n");

    code.push_str("func main() {\n");
    code.push_str(&format!("    url := {}\n\n", quoted(input.url)));

    match input.body {
        Some(body) => {
            code.push_str(&format!("    var jsonStr = []byte({})\n", raw_string(body)));
            code.push_str(&format!(
                "    req, err := http.NewRequest(\"{}\", url, bytes.NewBuffer(jsonStr))\n",
                input.method
            ));
        }
        None => code.push_str(&format!(
            "    req, err := http.NewRequest(\"{}\", url, nil)\n",
            input.method
        )),
    }

    code.push_str("    if err != nil {\n");
    code.push_str("        panic(err)\n");
    code.push_str("    }\n\n");

    for (name, value) in &input.headers {
        code.push_str(&format!(
            "    req.Header.Set({}, {})\n",
            quoted(name),
            quoted(value)
        ));
    }

    code.push_str("\n    client := &http.Client{}\n");
    code.push_str("    resp, err := client.Do(req)\n");
    code.push_str("    if err != nil {\n");
    code.push_str("        panic(err)\n");
    code.push_str("    }\n");
    code.push_str("    defer resp.Body.Close()\n\n");
    code.push_str("    body, _ := io.ReadAll(resp.Body)\n");
    code.push_str("    fmt.Println(string(body))\n");
    code.push('}');
    code
}
