//! Project configuration files.

mod app_config;
mod app_entry;
mod package_json;
mod page_config;
mod project_config;
mod tsconfig;

pub use app_config::AppConfig;
pub use app_entry::AppEntry;
pub use package_json::{PackageJson, TARO_VERSION};
pub use page_config::PageConfig;
pub use project_config::{DEFAULT_APP_ID, ProjectConfig};
pub use tsconfig::TsConfig;
