//! # Domain Models
//!
//! Pure data types shared by the registry builder crates: registry items, the asset bundles
//! derived from them, lazy component references and the build layout.
//! Keep it lean: no file system access here, just data and path arithmetic.

pub mod config;
pub mod constants;
pub mod item;

pub use crate::config::BuildConfig;
pub use crate::item::{AssetBundle, ComponentRef, FileAsset, RegistryItem};
