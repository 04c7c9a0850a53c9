//! C# generation using `HttpWebRequest`.

use super::{quoted, RenderInput};

pub fn render(input: &RenderInput) -> String {
    let mut code = String::new();
    code.push_str("using System;\n");
    code.push_str("using System.Net;\n");
    code.push_str("using System.IO;\n");
    code.push_str("using System.Text;\n\n");

    code.push_str("class Program\n{\n");
    code.push_str("    static void Main()\n    {\n");
    code.push_str(&format!(
        "        HttpWebRequest request = (HttpWebRequest)WebRequest.Create({});\n",
        quoted(input.url)
    ));
    code.push_str(&format!("        request.Method = \"{}\";\n\n", input.method));

    for (name, value) in &input.headers {
        code.push_str(&format!(
            "        request.Headers[{}] = {};\n",
            quoted(name),
            quoted(value)
        ));
    }

    if let Some(body) = input.body {
        code.push_str(&format!("        string json = {};\n", quoted(body)));
        code.push_str("        byte[] byteArray = Encoding.UTF8.GetBytes(json);\n");
        code.push_str("        request.ContentLength = byteArray.Length;\n\n");
        code.push_str("        using (Stream dataStream = request.GetRequestStream())\n");
        code.push_str("        {\n");
        code.push_str("            dataStream.Write(byteArray, 0, byteArray.Length);\n");
        code.push_str("        }\n\n");
    }

    // Both branches print the body; the catch covers non-2xx responses.
    for (opening, source) in [
        ("        try\n        {\n            WebResponse response = request.GetResponse();\n", "response"),
        ("        catch (WebException ex)\n        {\n            WebResponse errorResponse = ex.Response;\n", "errorResponse"),
    ] {
        code.push_str(opening);
        code.push_str(&format!(
            "            using (Stream responseStream = {}.GetResponseStream())\n",
            source
        ));
        code.push_str("            {\n");
        code.push_str("                StreamReader reader = new StreamReader(responseStream, Encoding.UTF8);\n");
        code.push_str("                Console.WriteLine(reader.ReadToEnd());\n");
        code.push_str("            }\n");
        code.push_str("        }\n");
    }

    code.push_str("    }\n}");
    code
}
