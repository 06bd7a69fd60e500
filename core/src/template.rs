#![deny(missing_docs)]

//! # Document Templates
//!
//! Renders the package descriptor documents (manifest and build-integration
//! targets) from embedded skeletons. A skeleton is looked up by logical name
//! (`{kind}/{role}.{doc}`, e.g. `openapi/contract.nuspec`) and filled by
//! replacing `{{placeholder}}` tokens from a caller-supplied mapping.
//!
//! A placeholder the template references but the mapping does not supply is
//! a template-authoring error and fails loudly; it is never substituted with
//! a blank. An unknown logical name is a distinct lookup error.

use crate::error::{AppError, AppResult};
use regex::Regex;
use std::sync::OnceLock;

/// Fills a named document template with placeholder values.
///
/// Abstracted so the descriptor generator can be exercised against a
/// recording or failing engine in tests.
pub trait TemplateEngine {
    /// Renders the template registered under `name`, substituting every
    /// `{{placeholder}}` token with its value from `values`.
    fn render(&self, name: &str, values: &[(&str, String)]) -> AppResult<String>;
}

/// The built-in template set, embedded in the binary.
pub struct StaticTemplates;

const CONTRACT_NUSPEC: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<package xmlns="http://schemas.microsoft.com/packaging/2012/06/nuspec.xsd">
  <metadata>
    <id>{{package_id}}</id>
    <version>{{version}}</version>
    <authors>{{authors}}</authors>
    <description>{{description}}</description>
{{properties}}  </metadata>
  <files>
    <file src="{{kind_folder}}/{{spec_file}}" target="{{kind_folder}}" />
    <file src="contentFiles/any/any/{{spec_file}}" target="contentFiles/any/any" />
    <file src="{{package_id}}.targets" target="build" />
  </files>
</package>
"#;

const CONTRACT_TARGETS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <ItemGroup>
    <{{spec_item}} Include="$(MSBuildThisFileDirectory)../{{kind_folder}}/{{spec_file}}">
      <SourcePackage>{{package_id}}</SourcePackage>
      <Visible>false</Visible>
    </{{spec_item}}>
  </ItemGroup>
</Project>
"#;

const CLIENT_NUSPEC: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<package xmlns="http://schemas.microsoft.com/packaging/2012/06/nuspec.xsd">
  <metadata>
    <id>{{package_id}}</id>
    <version>{{version}}</version>
    <authors>{{authors}}</authors>
    <description>{{description}}</description>
    <developmentDependency>true</developmentDependency>
{{properties}}    <dependencies>
      <dependency id="{{contract_package_id}}" version="[{{contract_version}}]" />
      <dependency id="{{generator_package_id}}" version="{{generator_package_version}}" />
    </dependencies>
  </metadata>
  <files>
    <file src="{{package_id}}.targets" target="build" />
  </files>
</package>
"#;

const CLIENT_TARGETS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <ItemGroup>
    <OpenApiReference Include="@({{spec_item}})">
      <ClassName>{{class_name}}</ClassName>
      <OutputPath>{{output_path}}</OutputPath>
{{options}}    </OpenApiReference>
  </ItemGroup>
</Project>
"#;

impl StaticTemplates {
    /// Resolves a logical template name to its embedded source.
    ///
    /// Both spec kinds share skeleton text today (the kind only drives the
    /// layout folder), but each kind keeps its own logical name so a family
    /// can diverge without touching callers.
    fn source(name: &str) -> AppResult<&'static str> {
        match name {
            "openapi/contract.nuspec" | "asyncapi/contract.nuspec" => Ok(CONTRACT_NUSPEC),
            "openapi/contract.targets" | "asyncapi/contract.targets" => Ok(CONTRACT_TARGETS),
            "openapi/client.nuspec" | "asyncapi/client.nuspec" => Ok(CLIENT_NUSPEC),
            "openapi/client.targets" | "asyncapi/client.targets" => Ok(CLIENT_TARGETS),
            _ => Err(AppError::TemplateNotFound(name.to_string())),
        }
    }
}

impl TemplateEngine for StaticTemplates {
    fn render(&self, name: &str, values: &[(&str, String)]) -> AppResult<String> {
        let source = Self::source(name)?;
        fill(name, source, values)
    }
}

fn placeholder_re() -> &'static Regex {
    static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_RE.get_or_init(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("Invalid regex"))
}

/// Substitutes every `{{placeholder}}` token in `source` from `values`.
fn fill(name: &str, source: &str, values: &[(&str, String)]) -> AppResult<String> {
    let re = placeholder_re();

    let mut out = String::with_capacity(source.len());
    let mut token_starts = Vec::new();
    let mut last = 0;

    for token in re.find_iter(source) {
        token_starts.push(token.start());

        // The match is "{{key}}"; strip the braces to get the key.
        let key = &source[token.start() + 2..token.end() - 2];

        let value = values
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
            .ok_or_else(|| AppError::TemplateRender {
                template: name.to_string(),
                detail: format!("no value supplied for placeholder '{}'", key),
            })?;

        out.push_str(&source[last..token.start()]);
        out.push_str(value);
        last = token.end();
    }
    out.push_str(&source[last..]);

    // Any "{{" that did not open a well-formed token is a template defect.
    let mut search = 0;
    while let Some(offset) = source[search..].find("{{") {
        let idx = search + offset;
        if !token_starts.contains(&idx) {
            return Err(AppError::TemplateRender {
                template: name.to_string(),
                detail: format!("malformed placeholder at byte {}", idx),
            });
        }
        search = idx + 2;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(k: &'static str, v: &str) -> (&'static str, String) {
        (k, v.to_string())
    }

    #[test]
    fn test_unknown_template_name() {
        let err = StaticTemplates
            .render("openapi/unknown.doc", &[])
            .unwrap_err();
        match err {
            AppError::TemplateNotFound(name) => assert_eq!(name, "openapi/unknown.doc"),
            other => panic!("expected TemplateNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_placeholder_fails_loudly() {
        let err = StaticTemplates
            .render("openapi/contract.targets", &[pair("package_id", "A.B")])
            .unwrap_err();
        match err {
            AppError::TemplateRender { template, detail } => {
                assert_eq!(template, "openapi/contract.targets");
                assert!(detail.contains("spec_item"));
            }
            other => panic!("expected TemplateRender, got {:?}", other),
        }
    }

    #[test]
    fn test_fill_substitutes_all_occurrences() {
        let out = fill(
            "t",
            "{{a}} and {{a}} plus {{b}}",
            &[pair("a", "x"), pair("b", "y")],
        )
        .unwrap();
        assert_eq!(out, "x and x plus y");
    }

    #[test]
    fn test_fill_rejects_unterminated_token() {
        let err = fill("t", "before {{a} after", &[pair("a", "x")]).unwrap_err();
        match err {
            AppError::TemplateRender { detail, .. } => {
                assert!(detail.contains("malformed placeholder"))
            }
            other => panic!("expected TemplateRender, got {:?}", other),
        }
    }

    #[test]
    fn test_contract_nuspec_renders() {
        let values = [
            pair("package_id", "Acme.Contracts"),
            pair("version", "1.0.0"),
            pair("authors", "Acme"),
            pair("description", "Contracts"),
            pair("properties", "    <projectUrl>https://acme.example</projectUrl>\n"),
            pair("kind_folder", "openapi"),
            pair("spec_file", "api.yaml"),
        ];
        let out = StaticTemplates
            .render("openapi/contract.nuspec", &values)
            .unwrap();

        assert!(out.contains("<id>Acme.Contracts</id>"));
        assert!(out.contains("<version>1.0.0</version>"));
        assert!(out.contains("<projectUrl>https://acme.example</projectUrl>"));
        assert!(out.contains(r#"<file src="openapi/api.yaml" target="openapi" />"#));
        // No tokens survive rendering
        assert!(!out.contains("{{"));
    }
}
