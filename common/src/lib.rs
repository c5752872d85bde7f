//! Portfolio Common Library
//!
//! CLIとWeb(WASM)で共有される型とギャラリーの状態機械

pub mod catalog;
pub mod config;
pub mod error;
pub mod gallery;
pub mod types;
pub mod viewer;

pub use catalog::{Catalog, ALL_CATEGORY};
pub use config::{ContactConfig, SiteConfig};
pub use error::{Error, Result};
pub use gallery::{GalleryState, EMPTY_CATALOG_MESSAGE, EMPTY_FILTER_MESSAGE};
pub use types::{Achievement, ContactMessage, Profile, Project, Skill, SocialLink};
pub use viewer::{ViewerState, PLACEHOLDER_IMAGE};
