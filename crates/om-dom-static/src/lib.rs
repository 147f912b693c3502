//! Static host-page output for om-dom trees.
//!
//! Renders a mounted [`om_dom::Container`] inside the mount point of an
//! HTML page and writes it to disk.

pub mod config;
pub mod page;
pub mod templates;

pub use config::{load_config, ConfigError, OmConfig, PageConfig};
pub use page::{render_page, HostPage, PageError};
