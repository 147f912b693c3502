//! Template engine for the host page.

use minijinja::{context, Environment};

use crate::config::PageConfig;

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the host page template.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("host.html".to_string(), HOST_TEMPLATE.to_string())
            .expect("Failed to add host template");

        Self { env }
    }

    /// Render the host page with `content` inside the `mount_id` element.
    pub fn render_host(
        &self,
        page: &PageConfig,
        mount_id: &str,
        content: &str,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("host.html")?;

        tmpl.render(context! {
            title => &page.title,
            lang => &page.lang,
            mount_id => mount_id,
            styles => &page.styles,
            scripts => &page.scripts,
            content => content,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const HOST_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ lang }}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  {% for style in styles %}<link rel="stylesheet" href="{{ style }}">
  {% endfor %}
</head>
<body>
  <div id="{{ mount_id }}">{{ content | safe }}</div>
  {% for script in scripts %}<script src="{{ script }}"></script>
  {% endfor %}
</body>
</html>"##;
