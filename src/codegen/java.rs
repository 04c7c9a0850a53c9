//! Java generation using `HttpURLConnection`.

use super::{quoted, RenderInput};

pub fn render(input: &RenderInput) -> String {
    let mut code = String::new();
    code.push_str("import java.net.HttpURLConnection;\n");
    code.push_str("import java.net.URL;\n");
    code.push_str("import java.io.OutputStream;\n");
    code.push_str("import java.io.BufferedReader;\n");
    code.push_str("import java.io.InputStreamReader;\n\n");

    code.push_str("public class Main {\n");
    code.push_str("    public static void main(String[] args) throws Exception {\n");
    code.push_str(&format!("        URL url = new URL({});\n", quoted(input.url)));
    code.push_str("        HttpURLConnection con = (HttpURLConnection) url.openConnection();\n");
    code.push_str(&format!("        con.setRequestMethod(\"{}\");\n\n", input.method));

    for (name, value) in &input.headers {
        code.push_str(&format!(
            "        con.setRequestProperty({}, {});\n",
            quoted(name),
            quoted(value)
        ));
    }

    if let Some(body) = input.body {
        code.push_str("        con.setDoOutput(true);\n");
        code.push_str(&format!("        String jsonInputString = {};\n\n", quoted(body)));
        code.push_str("        try(OutputStream os = con.getOutputStream()) {\n");
        code.push_str("            byte[] input = jsonInputString.getBytes(\"utf-8\");\n");
        code.push_str("            os.write(input, 0, input.length);\n");
        code.push_str("        }\n\n");
    }

    code.push_str("        int status = con.getResponseCode();\n\n");
    code.push_str("        BufferedReader in = new BufferedReader(new InputStreamReader(con.getInputStream()));\n");
    code.push_str("        String inputLine;\n");
    code.push_str("        StringBuffer content = new StringBuffer();\n");
    code.push_str("        while ((inputLine = in.readLine()) != null) {\n");
    code.push_str("            content.append(inputLine);\n");
    code.push_str("        }\n");
    code.push_str("        in.close();\n\n");
    code.push_str("        System.out.println(content.toString());\n");
    code.push_str("        con.disconnect();\n");
    code.push_str("    }\n");
    code.push('}');
    code
}
