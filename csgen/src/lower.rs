//! Lowering of a parsed manifest into C# definitions.

use csgen_codegen::Indent;
use csgen_csharp::{
    ConstructorDefinition, CsFile, DefinitionError, FieldDefinition, IndexerDefinition,
    MethodDefinition, ParameterDefinition, PropertyDefinition, TypeDefinition,
};
use csgen_manifest::{
    ConstructorSpec, FieldSpec, FormatConfig, IndexerSpec, Manifest, MethodSpec, ParamSpec,
    PropertySpec, TypeSpec,
};
use eyre::{Context, Result};

/// Build the file described by `manifest`.
pub fn lower(manifest: &Manifest) -> Result<CsFile> {
    let mut file = CsFile::new(&manifest.namespace).usings(&manifest.usings);
    for spec in &manifest.types {
        let ty = lower_type(spec).wrap_err_with(|| format!("invalid type '{}'", spec.name))?;
        tracing::debug!(
            name = ty.identifier(),
            fields = ty.fields().len(),
            properties = ty.properties().len(),
            constructors = ty.constructors().len(),
            methods = ty.methods().len(),
            indexers = ty.indexers().len(),
            "lowered type"
        );
        file.add_type(ty);
    }
    Ok(file)
}

/// Indentation to render with: `--spaces` first, then `[format]`, then tabs.
pub fn resolve_indent(spaces: Option<u8>, format: &FormatConfig) -> Indent {
    spaces
        .or_else(|| format.space_width())
        .map_or(Indent::Tab, Indent::Spaces)
}

fn lower_type(spec: &TypeSpec) -> Result<TypeDefinition, DefinitionError> {
    let mut ty = TypeDefinition::new(spec.access, spec.kind, &spec.name)?
        .interfaces(&spec.interfaces)?
        .attributes(&spec.attributes);
    if let Some(base) = &spec.base {
        ty = ty.base_type(base)?;
    }

    ty.add_fields(spec.fields.iter().map(lower_field).collect::<Result<Vec<_>, _>>()?)
        .add_properties(
            spec.properties
                .iter()
                .map(lower_property)
                .collect::<Result<Vec<_>, _>>()?,
        )
        .add_constructors(
            spec.constructors
                .iter()
                .map(lower_constructor)
                .collect::<Result<Vec<_>, _>>()?,
        )
        .add_methods(spec.methods.iter().map(lower_method).collect::<Result<Vec<_>, _>>()?)
        .add_indexers(spec.indexers.iter().map(lower_indexer).collect::<Result<Vec<_>, _>>()?);

    Ok(ty)
}

fn lower_field(spec: &FieldSpec) -> Result<FieldDefinition, DefinitionError> {
    Ok(FieldDefinition::new(spec.access, &spec.ty, &spec.name)?.attributes(&spec.attributes))
}

fn lower_property(spec: &PropertySpec) -> Result<PropertyDefinition, DefinitionError> {
    let mut property = PropertyDefinition::new(spec.access, &spec.ty, &spec.name)?;
    if let Some(field) = &spec.backing_field {
        property = property.backing_field(field);
    }
    if spec.read_only {
        property = property.read_only();
    }
    Ok(property)
}

fn lower_constructor(spec: &ConstructorSpec) -> Result<ConstructorDefinition, DefinitionError> {
    let mut ctor = ConstructorDefinition::new(spec.access)
        .params(lower_params(&spec.params)?)
        .body(spec.body.iter().cloned());
    if let Some(args) = &spec.base {
        ctor = ctor.base_call(args.iter().cloned());
    }
    Ok(ctor)
}

fn lower_method(spec: &MethodSpec) -> Result<MethodDefinition, DefinitionError> {
    let returns = spec.returns.as_deref().unwrap_or_default();
    Ok(MethodDefinition::new(spec.access, spec.kind, returns, &spec.name)?
        .params(lower_params(&spec.params)?)
        .body(spec.body.iter().cloned()))
}

fn lower_indexer(spec: &IndexerSpec) -> Result<IndexerDefinition, DefinitionError> {
    let mut indexer =
        IndexerDefinition::new(spec.access, &spec.returns, lower_param(&spec.index)?, &spec.get)?;
    if let Some(setter) = &spec.set {
        indexer = indexer.setter(setter);
    }
    Ok(indexer)
}

fn lower_params(specs: &[ParamSpec]) -> Result<Vec<ParameterDefinition>, DefinitionError> {
    specs.iter().map(lower_param).collect()
}

fn lower_param(spec: &ParamSpec) -> Result<ParameterDefinition, DefinitionError> {
    ParameterDefinition::new(&spec.ty, &spec.name)
}
