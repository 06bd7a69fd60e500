#![deny(missing_docs)]

//! # Package Descriptor Generator
//!
//! Orchestrates descriptor generation: given validated options for a
//! contract or client package, computes the derived identifiers, renders
//! the manifest and build-integration documents through the injected
//! [`TemplateEngine`], and materializes the package source tree through the
//! injected [`FileSystem`].
//!
//! Validation and rendering complete before any file is written, so a
//! failure never leaves a half-written descriptor behind (directories are
//! created last and are idempotent anyway). Given identical options, output
//! is byte-identical: no timestamps, no randomness, and metadata entries
//! keep their caller-supplied order.

use crate::error::{AppError, AppResult};
use crate::fsio::FileSystem;
use crate::naming::{normalize_prefix, sanitize_class_name};
use crate::options::{ClientPackageOptions, ContractPackageOptions, GenerationResult};
use crate::template::TemplateEngine;
use std::path::Path;

/// MSBuild item name the build-integration document exposes the embedded
/// spec under. External wire contract: downstream tooling discovers
/// contracts by this name. Never change it.
pub const SPEC_ITEM_NAME: &str = "ApiContract";

/// Prefix every generator-option key must carry so the downstream client
/// generator recognizes it.
pub const GENERATOR_OPTION_PREFIX: &str = "NSwag";

/// Package id of the client-code-generation toolchain every client package
/// depends on. External wire contract, not user-configurable.
pub const CLIENT_GENERATOR_PACKAGE_ID: &str = "NSwag.ApiDescription.Client";

/// Toolchain package version the client manifest references.
pub const CLIENT_GENERATOR_PACKAGE_VERSION: &str = "14.1.0";

/// Renders and writes package descriptors.
///
/// Collaborators are injected at construction; the generator itself holds
/// no other state, so every call is independent.
pub struct PackageGenerator<T: TemplateEngine, F: FileSystem> {
    templates: T,
    fs: F,
}

impl<T: TemplateEngine, F: FileSystem> PackageGenerator<T, F> {
    /// Creates a generator from its template and file-system collaborators.
    pub fn new(templates: T, fs: F) -> Self {
        Self { templates, fs }
    }

    /// Generates the descriptor documents and source tree for a contract
    /// package, returning the rendered texts.
    ///
    /// Layout written under `output_directory`:
    /// - `{package_id}.nuspec` and `{package_id}.targets` at the root,
    /// - the spec under `{kind}/` (build input) and under
    ///   `contentFiles/any/any/` (IDE-visible content file).
    pub fn generate_contract_package(
        &self,
        options: &ContractPackageOptions,
    ) -> AppResult<GenerationResult> {
        require("package_id", &options.package_id)?;
        require("version", &options.version)?;
        require("spec_file_name", &options.spec_file_name)?;
        require("kind", &options.kind)?;
        require_path("output_directory", &options.output_directory)?;

        if options.spec_file_name.contains(['/', '\\']) {
            return Err(AppError::Config(format!(
                "spec_file_name must be a bare file name, not a path: '{}'",
                options.spec_file_name
            )));
        }

        let kind_folder = options.kind.to_lowercase();
        let nuspec_name = format!("{}.nuspec", options.package_id);
        let targets_name = format!("{}.targets", options.package_id);

        let nuspec = self.templates.render(
            &format!("{}/contract.nuspec", kind_folder),
            &[
                ("package_id", options.package_id.clone()),
                ("version", options.version.clone()),
                ("authors", options.authors.clone()),
                ("description", options.description.clone()),
                ("properties", metadata_block(&options.package_properties, 4)),
                ("kind_folder", kind_folder.clone()),
                ("spec_file", options.spec_file_name.clone()),
            ],
        )?;

        let targets = self.templates.render(
            &format!("{}/contract.targets", kind_folder),
            &[
                ("spec_item", SPEC_ITEM_NAME.to_string()),
                ("kind_folder", kind_folder.clone()),
                ("spec_file", options.spec_file_name.clone()),
                ("package_id", options.package_id.clone()),
            ],
        )?;

        // All rendering succeeded; only now touch the file system.
        let out = &options.output_directory;
        let kind_dir = out.join(&kind_folder);
        let content_dir = out.join("contentFiles").join("any").join("any");

        self.fs.create_dir_all(out)?;
        self.fs.create_dir_all(&kind_dir)?;
        self.fs.create_dir_all(&content_dir)?;
        self.fs
            .copy_file(&options.spec_path, &kind_dir.join(&options.spec_file_name))?;
        self.fs.copy_file(
            &options.spec_path,
            &content_dir.join(&options.spec_file_name),
        )?;
        self.fs.write_text(&out.join(&nuspec_name), &nuspec)?;
        self.fs.write_text(&out.join(&targets_name), &targets)?;

        Ok(GenerationResult { nuspec, targets })
    }

    /// Generates the descriptor documents and source tree for a client
    /// package, returning the rendered texts.
    ///
    /// The manifest marks the package as a development-only dependency,
    /// pins a dependency on the contract package at exactly
    /// `contract_version`, and references the client-generator toolchain
    /// package. The targets document carries one generator directive per
    /// normalized option plus the class-name and output-path settings.
    /// Client packages embed no spec of their own.
    pub fn generate_client_package(
        &self,
        options: &ClientPackageOptions,
    ) -> AppResult<GenerationResult> {
        require("client_package_id", &options.client_package_id)?;
        require("contract_package_id", &options.contract_package_id)?;
        require("contract_version", &options.contract_version)?;
        require("version", &options.version)?;
        require("kind", &options.kind)?;
        require_path("output_directory", &options.output_directory)?;

        let class_name = match &options.client_class_name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => sanitize_class_name(&options.client_package_id)?,
        };

        let normalized: Vec<(String, String)> = options
            .generator_options
            .iter()
            .map(|(key, value)| (normalize_prefix(GENERATOR_OPTION_PREFIX, key), value.clone()))
            .collect();

        let kind_folder = options.kind.to_lowercase();
        let nuspec_name = format!("{}.nuspec", options.client_package_id);
        let targets_name = format!("{}.targets", options.client_package_id);

        let nuspec = self.templates.render(
            &format!("{}/client.nuspec", kind_folder),
            &[
                ("package_id", options.client_package_id.clone()),
                ("version", options.version.clone()),
                ("authors", options.authors.clone()),
                ("description", options.description.clone()),
                ("properties", metadata_block(&options.package_properties, 4)),
                ("contract_package_id", options.contract_package_id.clone()),
                ("contract_version", options.contract_version.clone()),
                ("generator_package_id", CLIENT_GENERATOR_PACKAGE_ID.to_string()),
                (
                    "generator_package_version",
                    CLIENT_GENERATOR_PACKAGE_VERSION.to_string(),
                ),
            ],
        )?;

        let targets = self.templates.render(
            &format!("{}/client.targets", kind_folder),
            &[
                ("spec_item", SPEC_ITEM_NAME.to_string()),
                ("class_name", class_name),
                ("output_path", options.client_output_path.clone()),
                ("options", metadata_block(&normalized, 6)),
            ],
        )?;

        let out = &options.output_directory;
        self.fs.create_dir_all(out)?;
        self.fs.write_text(&out.join(&nuspec_name), &nuspec)?;
        self.fs.write_text(&out.join(&targets_name), &targets)?;

        Ok(GenerationResult { nuspec, targets })
    }
}

fn require(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        Err(AppError::Config(format!("{} must not be empty", field)))
    } else {
        Ok(())
    }
}

fn require_path(field: &str, value: &Path) -> AppResult<()> {
    if value.as_os_str().is_empty() {
        Err(AppError::Config(format!("{} must not be empty", field)))
    } else {
        Ok(())
    }
}

/// Renders ordered `(key, value)` pairs as one XML element per line.
///
/// Duplicate keys are rendered as-is: manifests are human-diffed and the
/// caller-supplied order and multiplicity are observable output.
fn metadata_block(pairs: &[(String, String)], indent: usize) -> String {
    let pad = " ".repeat(indent);
    let mut block = String::new();
    for (key, value) in pairs {
        block.push_str(&format!("{}<{}>{}</{}>\n", pad, key, value, key));
    }
    block
}
