#![deny(missing_docs)]

//! # Generate Command
//!
//! Builds the descriptor documents and on-disk source tree for a contract
//! package and, unless disabled, its companion client package.
//!
//! Inputs come from flags, from a `--config` package definition file, or
//! both (flags win; repeatable flags append after file entries). The
//! contract tree is written to `{output_dir}/{package_id}/` and the client
//! tree to `{output_dir}/{client_package_id}/`.

use crate::config::{self, PackageConfig};
use crate::error::{CliError, CliResult};
use specpack_core::{
    sanitize_class_name, ClientPackageOptions, ContractPackageOptions, FileSystem,
    GenerationResult, MemoryFileSystem, OsFileSystem, PackageGenerator, StaticTemplates,
    TemplateEngine,
};
use std::path::PathBuf;

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Path to a YAML/JSON package definition; flags override its values.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Path to the spec file to embed in the contract package.
    #[clap(long)]
    pub spec_path: Option<PathBuf>,

    /// Contract package identifier (e.g. `Acme.PetStore.Contracts`).
    #[clap(long)]
    pub package_id: Option<String>,

    /// Package version.
    #[clap(long)]
    pub version: Option<String>,

    /// Manifest authors.
    #[clap(long)]
    pub authors: Option<String>,

    /// Manifest description.
    #[clap(long)]
    pub description: Option<String>,

    /// Spec kind: `openapi` or `asyncapi`.
    #[clap(long)]
    pub kind: Option<String>,

    /// Root directory the package source trees are written under.
    #[clap(long)]
    pub output_dir: Option<PathBuf>,

    /// Client package identifier. Defaults to `{package_id}.Client`.
    #[clap(long)]
    pub client_package_id: Option<String>,

    /// Class name for the generated client type. Defaults to the client
    /// package id with the dots stripped and segments capitalized.
    #[clap(long)]
    pub client_class_name: Option<String>,

    /// Path the generated client source lands at during a consumer's build.
    #[clap(long)]
    pub client_output_path: Option<String>,

    /// Extra manifest metadata entry, repeatable: `--property key=value`.
    #[clap(long = "property", value_parser = parse_pair)]
    pub properties: Vec<(String, String)>,

    /// Client generator option, repeatable: `--nswag-option key=value`.
    #[clap(long = "nswag-option", value_parser = parse_pair)]
    pub nswag_options: Vec<(String, String)>,

    /// Generate only the contract package.
    #[clap(long)]
    pub no_client: bool,

    /// Render and print the documents without writing any files.
    #[clap(long)]
    pub dry_run: bool,
}

/// Helper to parse "key=value" arguments.
fn parse_pair(s: &str) -> Result<(String, String), String> {
    specpack_core::parse_key_value(s).map_err(|e| e.to_string())
}

/// Executes the generation flow.
pub fn execute(args: &GenerateArgs) -> CliResult<()> {
    let config = match &args.config {
        Some(path) => config::load(path)?,
        None => PackageConfig::default(),
    };

    let contract = resolve_contract(args, &config)?;

    if !contract.spec_path.exists() {
        return Err(CliError::General(format!(
            "Spec file not found: {:?}",
            contract.spec_path
        )));
    }

    if args.dry_run {
        // Seed the spec into an in-memory tree so the copy step has a
        // source while the real disk stays untouched.
        let fs = MemoryFileSystem::new();
        let spec_content = std::fs::read_to_string(&contract.spec_path)?;
        fs.seed_file(contract.spec_path.clone(), spec_content);
        run(args, &config, &contract, &PackageGenerator::new(StaticTemplates, fs))
    } else {
        run(
            args,
            &config,
            &contract,
            &PackageGenerator::new(StaticTemplates, OsFileSystem),
        )
    }
}

fn run<T: TemplateEngine, F: FileSystem>(
    args: &GenerateArgs,
    config: &PackageConfig,
    contract: &ContractPackageOptions,
    generator: &PackageGenerator<T, F>,
) -> CliResult<()> {
    println!("Generating contract package '{}'...", contract.package_id);
    let contract_result = generator.generate_contract_package(contract)?;
    report(
        &contract.package_id,
        &contract.output_directory,
        &contract_result,
        args.dry_run,
    );

    if args.no_client || config.no_client {
        return Ok(());
    }

    let client = resolve_client(args, config, contract)?;
    println!("Generating client package '{}'...", client.client_package_id);
    let client_result = generator.generate_client_package(&client)?;
    report(
        &client.client_package_id,
        &client.output_directory,
        &client_result,
        args.dry_run,
    );

    Ok(())
}

fn resolve_contract(
    args: &GenerateArgs,
    config: &PackageConfig,
) -> CliResult<ContractPackageOptions> {
    let spec_path = args
        .spec_path
        .clone()
        .or_else(|| config.spec_path.clone())
        .ok_or_else(|| {
            CliError::General("Missing required option: --spec-path (or spec_path in config)".into())
        })?;

    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| config.output_dir.clone())
        .ok_or_else(|| {
            CliError::General("Missing required option: --output-dir (or output_dir in config)".into())
        })?;

    let spec_file_name = spec_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| {
            CliError::General(format!("Cannot derive a spec file name from {:?}", spec_path))
        })?;

    let package_id = pick(&args.package_id, &config.package_id);

    let mut package_properties = config::entries_to_pairs(&config.properties);
    package_properties.extend(args.properties.iter().cloned());

    Ok(ContractPackageOptions {
        output_directory: output_dir.join(&package_id),
        package_id,
        version: pick(&args.version, &config.version),
        authors: pick(&args.authors, &config.authors),
        description: pick(&args.description, &config.description),
        spec_path,
        spec_file_name,
        kind: args
            .kind
            .clone()
            .or_else(|| config.kind.clone())
            .unwrap_or_else(|| "openapi".to_string()),
        package_properties,
    })
}

fn resolve_client(
    args: &GenerateArgs,
    config: &PackageConfig,
    contract: &ContractPackageOptions,
) -> CliResult<ClientPackageOptions> {
    let client_package_id = args
        .client_package_id
        .clone()
        .or_else(|| config.client_package_id.clone())
        .unwrap_or_else(|| format!("{}.Client", contract.package_id));

    let client_class_name = args
        .client_class_name
        .clone()
        .or_else(|| config.client_class_name.clone());

    let client_output_path = match args
        .client_output_path
        .clone()
        .or_else(|| config.client_output_path.clone())
    {
        Some(path) => path,
        None => {
            let class_name = match &client_class_name {
                Some(name) if !name.trim().is_empty() => name.clone(),
                _ => sanitize_class_name(&client_package_id)?,
            };
            format!("Generated/{}.cs", class_name)
        }
    };

    let mut generator_options = config::entries_to_pairs(&config.nswag_options);
    generator_options.extend(args.nswag_options.iter().cloned());

    let mut package_properties = config::entries_to_pairs(&config.properties);
    package_properties.extend(args.properties.iter().cloned());

    Ok(ClientPackageOptions {
        output_directory: contract
            .output_directory
            .parent()
            .map(|parent| parent.join(&client_package_id))
            .unwrap_or_else(|| PathBuf::from(&client_package_id)),
        contract_package_id: contract.package_id.clone(),
        contract_version: contract.version.clone(),
        version: contract.version.clone(),
        authors: contract.authors.clone(),
        description: contract.description.clone(),
        kind: contract.kind.clone(),
        client_package_id,
        client_class_name,
        client_output_path,
        package_properties,
        generator_options,
    })
}

fn pick(flag: &Option<String>, file: &Option<String>) -> String {
    flag.clone().or_else(|| file.clone()).unwrap_or_default()
}

fn report(package_id: &str, output_dir: &std::path::Path, result: &GenerationResult, dry_run: bool) {
    if dry_run {
        println!("--- {}.nuspec ---", package_id);
        print!("{}", result.nuspec);
        println!("--- {}.targets ---", package_id);
        print!("{}", result.targets);
    } else {
        println!(
            "  -> {}",
            output_dir.join(format!("{}.nuspec", package_id)).display()
        );
        println!(
            "  -> {}",
            output_dir.join(format!("{}.targets", package_id)).display()
        );
    }
}
