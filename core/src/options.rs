#![deny(missing_docs)]

//! # Package Options
//!
//! Input and output values of the descriptor generator. Options are built
//! once per invocation by the caller, passed by reference, and never
//! mutated; the generator holds no state across calls.
//!
//! Metadata properties and generator options are ordered `(key, value)`
//! sequences, never maps: insertion order is observable in the rendered
//! manifests and duplicate keys are legal and rendered twice.

use serde::Deserialize;
use std::path::PathBuf;

/// Describes a contract-only package: a distributable artifact embedding an
/// API specification file for consumption by build tooling.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractPackageOptions {
    /// Dotted package identifier; becomes the manifest identity and the
    /// basis for generated file names.
    pub package_id: String,

    /// Semantic version string. Opaque to this layer.
    pub version: String,

    /// Manifest authors, passed through verbatim.
    pub authors: String,

    /// Manifest description, passed through verbatim.
    pub description: String,

    /// Path the spec file is copied from.
    pub spec_path: PathBuf,

    /// File name the spec is embedded under. A bare name, not a path: it is
    /// placed beneath fixed layout subdirectories.
    pub spec_file_name: String,

    /// Spec kind discriminator ("openapi" or "asyncapi"); selects the
    /// template family and names the layout subfolder.
    pub kind: String,

    /// Root directory the package source tree is written under.
    pub output_directory: PathBuf,

    /// Extra manifest metadata entries, rendered in insertion order.
    #[serde(default)]
    pub package_properties: Vec<(String, String)>,
}

/// Describes a client-code package that depends on a contract package and
/// triggers client generation during a consumer's build.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientPackageOptions {
    /// Dotted identifier of the client package.
    pub client_package_id: String,

    /// Identifier of the contract package this client is generated from.
    pub contract_package_id: String,

    /// Contract package version the manifest pins its dependency at.
    pub contract_version: String,

    /// Client package version.
    pub version: String,

    /// Manifest authors, passed through verbatim.
    pub authors: String,

    /// Manifest description, passed through verbatim.
    pub description: String,

    /// Spec kind discriminator; selects the template family.
    pub kind: String,

    /// Root directory the package source tree is written under.
    pub output_directory: PathBuf,

    /// Class name for the generated client type. When absent, derived from
    /// the client package id with the dots stripped and segments capitalized.
    #[serde(default)]
    pub client_class_name: Option<String>,

    /// Relative path the generated client source lands at once the
    /// downstream generator runs. Rendered verbatim.
    pub client_output_path: String,

    /// Extra manifest metadata entries, rendered in insertion order.
    #[serde(default)]
    pub package_properties: Vec<(String, String)>,

    /// Generator-option knobs; keys are prefix-normalized before rendering.
    #[serde(default)]
    pub generator_options: Vec<(String, String)>,
}

/// The rendered descriptor documents of one generation call.
///
/// Pure values: obtaining them requires no file-system side effect, which
/// is what keeps rendering independently testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// Full text of the package manifest.
    pub nuspec: String,

    /// Full text of the build-integration targets document.
    pub targets: String,
}
