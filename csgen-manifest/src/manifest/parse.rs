//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use csgen_core::IdentifierRules;

use super::{MAX_SPACE_WIDTH, Manifest, TypeSpec, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "csgen.toml")
    }
}

impl Manifest {
    /// Parse a csgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    ctx.validate_name(
        &manifest.namespace,
        "namespace",
        "namespace",
        IdentifierRules::NAMESPACE,
    )?;
    for using in &manifest.usings {
        ctx.validate_name(using, "using", "usings", IdentifierRules::NAMESPACE)?;
    }

    if let Some(width) = manifest.format.width {
        if !(1..=MAX_SPACE_WIDTH).contains(&width) {
            let message = format!("indent width must be between 1 and {MAX_SPACE_WIDTH}");
            let source = ctx.source_context();
            return Err(match ctx.find_key_span("width") {
                Some(span) => source.validation_error_at(message, span),
                None => source.validation_error(message),
            });
        }
    }

    for (i, ty) in manifest.types.iter().enumerate() {
        if let Some(first) = manifest.types[..i].iter().find(|t| t.name == ty.name) {
            let spans = ctx.find_name_spans(&first.name);
            return Err(ctx.source_context().duplicate_type_error(
                &ty.name,
                spans.first().copied(),
                spans.get(1).copied(),
            ));
        }
        validate_type(&ctx, ty)?;
    }

    Ok(())
}

fn validate_type(ctx: &ParseContext<'_>, ty: &TypeSpec) -> Result<()> {
    ctx.validate_name(&ty.name, "type name", "name", IdentifierRules::TYPE_NAME)?;

    let ctx = ctx.push(&ty.name);
    if let Some(base) = &ty.base {
        ctx.validate_name(base, "base type", "base", IdentifierRules::TYPE_NAME)?;
    }
    for interface in &ty.interfaces {
        ctx.validate_name(
            interface,
            "interface name",
            "interfaces",
            IdentifierRules::TYPE_NAME,
        )?;
    }

    // Member identifiers are repaired when lowered; only their presence matters here.
    for field in &ty.fields {
        ctx.require(&field.ty, "field type", "type")?;
        ctx.require(&field.name, "field name", "name")?;
    }
    for property in &ty.properties {
        ctx.require(&property.ty, "property type", "type")?;
        ctx.require(&property.name, "property name", "name")?;
    }
    for ctor in &ty.constructors {
        for param in &ctor.params {
            ctx.require(&param.ty, "parameter type", "type")?;
            ctx.require(&param.name, "parameter name", "name")?;
        }
    }
    for method in &ty.methods {
        ctx.validate_name(&method.name, "method name", "name", IdentifierRules::PLAIN)?;
        for param in &method.params {
            ctx.require(&param.ty, "parameter type", "type")?;
            ctx.require(&param.name, "parameter name", "name")?;
        }
    }
    for indexer in &ty.indexers {
        ctx.require(&indexer.returns, "indexer return type", "returns")?;
        ctx.require(&indexer.get, "indexer getter", "get")?;
        ctx.require(&indexer.index.ty, "parameter type", "type")?;
        ctx.require(&indexer.index.name, "parameter name", "name")?;
    }

    Ok(())
}
