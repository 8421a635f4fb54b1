// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation run.
//!
//! ```text
//! Datamodel ──► drop @DtoIgnoreModel ──► assign output dirs
//!           ──► pagination.ts, when any input file is produced
//!           ──► per type:  create, update, plain, input
//!           ──► per model: connect, create, update, entity, plain, input
//!           ──► per enum:  <name>.enum.ts
//! ```
//!
//! Files are returned in that order; nothing is written to disk.

use crate::{
    annotation::{Marker, classify},
    artifact::{self, ArtifactKind, GeneratedFile, enums, pagination},
    compose::{Composition, Context, connect, filter, mutation, read},
    config::{Config, FileTypes},
    error::{Error, Result},
    imports,
    model::{Datamodel, Model, OutputLocator},
    naming::Naming
};

const TYPE_KINDS: [ArtifactKind; 4] = [
    ArtifactKind::Create,
    ArtifactKind::Update,
    ArtifactKind::Plain,
    ArtifactKind::Input
];

fn locate(model: &Model, config: &Config, naming: &Naming<'_>) -> OutputLocator {
    let same = |dir: String| OutputLocator {
        dto:    dir.clone(),
        input:  dir.clone(),
        entity: dir
    };
    if !config.output_to_nest_js_resource_structure {
        return same(config.output.clone());
    }
    let base = imports::join(&config.output, &naming.file_case(&model.name));
    if config.flat_resource_structure {
        return same(base);
    }
    if model.is_type() {
        return same(imports::join(&base, "dto"));
    }
    OutputLocator {
        dto:    imports::join(&base, "dto"),
        input:  imports::join(&base, "input"),
        entity: imports::join(&base, "entities")
    }
}

fn prepare(datamodel: &Datamodel, config: &Config) -> Datamodel {
    let naming = Naming::new(config);
    let keep = |list: &[Model]| -> Vec<Model> {
        list.iter()
            .filter(|model| {
                let ignored = classify::model_has(model, Marker::IgnoreModel);
                if ignored {
                    tracing::debug!(name = %model.name, "skipping ignored model");
                }
                !ignored
            })
            .cloned()
            .collect()
    };
    let mut prepared = Datamodel::new(
        keep(&datamodel.models),
        keep(&datamodel.types),
        datamodel.enums.clone()
    );
    for model in prepared.models.iter_mut().chain(prepared.types.iter_mut()) {
        model.output = locate(model, config, &naming);
    }
    prepared
}

fn compose(model: &Model, kind: ArtifactKind, ctx: &Context<'_>) -> Result<Composition> {
    match kind {
        ArtifactKind::Connect => Ok(connect::compose(model, ctx)),
        ArtifactKind::Create | ArtifactKind::Update => mutation::compose(model, kind, ctx),
        ArtifactKind::Entity | ArtifactKind::Plain => read::compose(model, kind, ctx),
        ArtifactKind::Input => Ok(filter::compose(model, ctx))
    }
}

fn model_kinds(file_types: FileTypes) -> &'static [ArtifactKind] {
    match file_types {
        FileTypes::All => &[
            ArtifactKind::Connect,
            ArtifactKind::Create,
            ArtifactKind::Update,
            ArtifactKind::Entity,
            ArtifactKind::Plain,
            ArtifactKind::Input
        ],
        FileTypes::Dto => &[
            ArtifactKind::Connect,
            ArtifactKind::Create,
            ArtifactKind::Update,
            ArtifactKind::Plain,
            ArtifactKind::Input
        ],
        FileTypes::Entity => &[ArtifactKind::Entity]
    }
}

fn artifacts(model: &Model, kinds: &[ArtifactKind], ctx: &Context<'_>) -> Result<Vec<GeneratedFile>> {
    kinds
        .iter()
        .map(|&kind| {
            let composition = compose(model, kind, ctx)?;
            let name = format!("{}.ts", ctx.naming.file_stem(kind, &model.name));
            let file = GeneratedFile::new(
                model.output.dir(kind),
                &name,
                artifact::render(&composition, ctx.config)
            );
            tracing::debug!(path = %file.path, "rendered artifact");
            Ok(file)
        })
        .collect()
}

/// Generate every file for `datamodel`.
///
/// # Errors
///
/// - [`Error::EntityOnlyWithTypes`] when only entity files are requested
///   while composite types exist. Nothing is generated in that case.
/// - [`Error::RelatedModelNotFound`] / [`Error::RelatedTypeNotFound`] when
///   a field references an unknown model or type.
pub fn generate(datamodel: &Datamodel, config: &Config) -> Result<Vec<GeneratedFile>> {
    let prepared = prepare(datamodel, config);
    if config.generate_file_types == FileTypes::Entity && !prepared.types.is_empty() {
        return Err(Error::EntityOnlyWithTypes);
    }
    let ctx = Context::new(&prepared, config);
    let kinds = model_kinds(config.generate_file_types);
    let mut files = Vec::new();

    let model_inputs = !prepared.models.is_empty() && kinds.contains(&ArtifactKind::Input);
    if model_inputs || !prepared.types.is_empty() {
        tracing::info!("processing pagination");
        files.push(GeneratedFile::new(
            &config.output,
            &format!("{}.ts", filter::PAGINATION_STEM),
            pagination::render(config)
        ));
    }

    for ty in &prepared.types {
        tracing::info!(name = %ty.name, "processing type");
        files.extend(artifacts(ty, &TYPE_KINDS, &ctx)?);
    }

    for model in &prepared.models {
        tracing::info!(name = %model.name, "processing model");
        files.extend(artifacts(model, kinds, &ctx)?);
    }

    if config.generate_enums {
        for def in &prepared.enums {
            tracing::info!(name = %def.name, "processing enum");
            files.push(GeneratedFile::new(
                &config.output,
                &format!("{}.ts", ctx.naming.enum_stem(&def.name)),
                enums::render(def, config)
            ));
        }
    }

    tracing::info!(files = files.len(), "generation complete");
    Ok(files)
}
