//! Host page rendering and output.

use std::fs;
use std::path::Path;

use om_dom::{render, Container, Node, RenderError};

use crate::config::{OmConfig, PageConfig};
use crate::templates::TemplateEngine;

/// An HTML page hosting a mounted container.
pub struct HostPage {
    config: PageConfig,
    templates: TemplateEngine,
}

impl HostPage {
    /// Create a new host page.
    pub fn new(config: PageConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Render the page with the container's markup inside the element
    /// named by `mount_id`.
    pub fn render(&self, container: &Container) -> Result<String, PageError> {
        let mount_id = &self.config.mount_id;

        if !container.is_mounted() {
            tracing::warn!("Rendering page for empty container '{}'", container.id());
        }
        if container.id() != mount_id.as_str() {
            tracing::warn!(
                "Container '{}' rendered into mount point '{}'",
                container.id(),
                mount_id
            );
        }

        self.templates
            .render_host(&self.config, mount_id, &container.to_html())
            .map_err(|e| PageError::Template(e.to_string()))
    }

    /// Render the page and write it to `path`, creating parent directories.
    pub fn write(&self, container: &Container, path: &Path) -> Result<(), PageError> {
        let html = self.render(container)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| PageError::Write(e.to_string()))?;
        }
        fs::write(path, html).map_err(|e| PageError::Write(e.to_string()))?;

        tracing::info!("Wrote {}", path.display());
        Ok(())
    }
}

/// Mount `node` into a fresh container configured by `config` and render
/// its host page.
pub fn render_page(node: Node, config: &OmConfig) -> Result<String, PageError> {
    let mut container = Container::with_config(&config.page.mount_id, config.render.clone());
    render(node, &mut container)?;

    HostPage::new(config.page.clone()).render(&container)
}

/// Errors that can occur while producing a page.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Failed to render template: {0}")]
    Template(String),

    #[error("Failed to write output: {0}")]
    Write(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use om_dom::{dom, Event, Props, RenderConfig};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn signup() -> Node {
        dom::form(
            Props::new().attr("className", "signup"),
            (
                dom::input(Props::new().attr("name", "email").value(""), ()),
                dom::button(Props::new(), "Join"),
            ),
        )
    }

    #[test]
    fn renders_tree_inside_mount_point() {
        let html = render_page(signup(), &OmConfig::default()).unwrap();

        assert!(html.contains(
            r#"<div id="app"><form class="signup"><input name="email" value=""><button>Join</button></form></div>"#
        ));
    }

    #[test]
    fn reflects_local_edits_of_mounted_container() {
        let mut container = Container::new("app");
        render(signup(), &mut container).unwrap();
        container
            .dispatch(&[0], &Event::change("me@example.com"))
            .unwrap();

        let html = HostPage::new(PageConfig::default())
            .render(&container)
            .unwrap();

        assert!(html.contains(r#"<div id="app">"#));
        assert!(html.contains(r#"value="me@example.com""#));
    }

    #[test]
    fn mount_point_comes_from_page_config() {
        let mut container = Container::new("app");
        render(dom::p(Props::new(), "Hi"), &mut container).unwrap();

        let page = HostPage::new(PageConfig {
            mount_id: "root".to_string(),
            ..Default::default()
        });
        let html = page.render(&container).unwrap();

        assert!(html.contains(r#"<div id="root"><p>Hi</p></div>"#));
        assert!(!html.contains(r#"id="app""#));
        assert_eq!(page.config().mount_id, "root");
    }

    #[test]
    fn strict_config_surfaces_render_errors() {
        let config = OmConfig {
            render: RenderConfig::strict(),
            ..Default::default()
        };
        let bad = dom::div(Props::new().on("click", |_| {}), ());

        let result = render_page(bad, &config);

        assert!(matches!(result, Err(PageError::Render(_))));
    }

    #[test]
    fn writes_page_to_nested_path() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist").join("index.html");

        let mut container = Container::new("app");
        render(dom::h1(Props::new(), "Hello"), &mut container).unwrap();

        let page = HostPage::new(PageConfig {
            title: "Greeting".to_string(),
            ..Default::default()
        });
        page.write(&container, &out).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert!(written.contains("<title>Greeting</title>"));
        assert!(written.contains("<h1>Hello</h1>"));
        assert_eq!(page.config().title, "Greeting");
    }
}
