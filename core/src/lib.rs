#![deny(missing_docs)]

//! # Specpack Core
//!
//! Core library for the contract packaging toolchain: renders NuGet package
//! descriptors (manifest + build-integration targets) for API contract and
//! client packages and materializes the package source-tree layout.

/// Shared error types.
pub mod error;

/// Identifier and `key=value` string utilities.
pub mod naming;

/// Document templates and rendering.
pub mod template;

/// File-system abstraction and implementations.
pub mod fsio;

/// Package option and result types.
pub mod options;

/// The descriptor generator.
pub mod generator;

pub use error::{AppError, AppResult};
pub use fsio::{FileSystem, MemoryFileSystem, OsFileSystem};
pub use generator::{
    PackageGenerator, CLIENT_GENERATOR_PACKAGE_ID, CLIENT_GENERATOR_PACKAGE_VERSION,
    GENERATOR_OPTION_PREFIX, SPEC_ITEM_NAME,
};
pub use naming::{normalize_prefix, parse_key_value, parse_key_value_pairs, sanitize_class_name};
pub use options::{ClientPackageOptions, ContractPackageOptions, GenerationResult};
pub use template::{StaticTemplates, TemplateEngine};
