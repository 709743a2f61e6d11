//! Upload form page

use tera::{Context, Tera};

const FORM_TEMPLATE_NAME: &str = "form.html";

const FORM_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Spreadsheet to CSV</title>
  <style>
    body { font-family: system-ui, sans-serif; margin: 0; min-height: 100vh;
           display: flex; align-items: center; justify-content: center; background: #eef2f7; }
    main { background: #fff; padding: 28px 24px; border-radius: 12px; width: 100%; max-width: 420px;
           box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12); }
    h1 { font-size: 20px; margin: 0 0 4px; }
    p.lead { margin: 0 0 18px; color: #5b6472; font-size: 13px; }
    label { display: block; font-size: 13px; margin-bottom: 6px; }
    input[type=file] { width: 100%; padding: 10px; border: 1px dashed #9aa3af; border-radius: 8px; }
    button { margin-top: 16px; padding: 9px 18px; border: 0; border-radius: 999px;
             background: #1f6feb; color: #fff; font-weight: 600; cursor: pointer; }
    .error { margin-top: 12px; padding: 8px 10px; border-radius: 6px;
             background: #fde8e8; color: #a61b1b; font-size: 13px; }
  </style>
</head>
<body>
  <main>
    <h1>Spreadsheet to CSV</h1>
    <p class="lead">Upload a workbook and download its first sheet as CSV.</p>
    <form method="post" enctype="multipart/form-data">
      <label for="file">Excel file (.xlsx or .xls)</label>
      <input id="file" type="file" name="file" accept=".xlsx,.xls" required>
      {% if error %}
      <div class="error">{{ error }}</div>
      {% endif %}
      <button type="submit">Convert and download</button>
    </form>
  </main>
</body>
</html>
"#;

/// The upload form, compiled once and rendered per request
#[derive(Debug, Clone)]
pub struct FormPage {
    tera: Tera,
}

impl FormPage {
    pub fn new() -> tera::Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);
        tera.add_raw_template(FORM_TEMPLATE_NAME, FORM_TEMPLATE)?;
        Ok(Self { tera })
    }

    /// Render the form, optionally with an inline error message
    pub fn render(&self, error: Option<&str>) -> tera::Result<String> {
        let mut context = Context::new();
        context.insert("error", error.unwrap_or_default());
        self.tera.render(FORM_TEMPLATE_NAME, &context)
    }
}
