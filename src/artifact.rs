// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Artifact kinds and file assembly.
//!
//! # Artifact Kinds
//!
//! | Kind | Class | Decorator | File |
//! |------|-------|-----------|------|
//! | [`ArtifactKind::Connect`] | `ConnectUserDto` | `@InputType()` | `connect-user.dto.ts` |
//! | [`ArtifactKind::Create`] | `CreateUserDto` | `@InputType()` | `create-user.dto.ts` |
//! | [`ArtifactKind::Update`] | `UpdateUserDto` | `@InputType()` | `update-user.dto.ts` |
//! | [`ArtifactKind::Entity`] | `UserEntity` | `@ObjectType()` | `user.entity.ts` |
//! | [`ArtifactKind::Plain`] | `UserDto` | `@ObjectType()` | `user.dto.ts` |
//! | [`ArtifactKind::Input`] | `UserInput` | `@InputType()` | `user.input.ts` |
//!
//! # File Layout
//!
//! ```text
//! import ...;                        imports::resolve
//!
//! @InputType()                       ─┐ extra classes
//! export class PostABUniqueInputType {│
//!   ...                               │
//! }                                  ─┘
//!
//! @ApiExtraModels(PostABUniqueInputType)
//! @InputType()
//! export class ConnectPostDto {
//!   ...                              emit::render per property
//! }
//! ```

pub mod enums;
pub mod pagination;

use crate::{
    compose::{Composition, FieldView},
    config::Config,
    emit, imports
};

/// One of the six per-model artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Reference to an existing record by id or unique.
    Connect,
    /// Create payload.
    Create,
    /// Update payload.
    Update,
    /// Read model including relations.
    Entity,
    /// Read model without relations.
    Plain,
    /// Paginated filter payload.
    Input
}

impl ArtifactKind {
    /// Create or update.
    #[must_use]
    pub const fn is_mutation(self) -> bool {
        matches!(self, Self::Create | Self::Update)
    }

    /// Accepts client data.
    #[must_use]
    pub const fn validates(self) -> bool {
        matches!(self, Self::Connect | Self::Create | Self::Update | Self::Input)
    }

    /// Required properties may be declared with `!`.
    #[must_use]
    pub const fn allows_definite_assignment(self) -> bool {
        matches!(self, Self::Entity | Self::Plain | Self::Input)
    }

    /// GraphQL class decorator name.
    ///
    /// Filter inputs are query arguments extending `PaginationInput`, so they
    /// are input types like the mutation payloads.
    #[must_use]
    pub const fn class_decorator(self) -> &'static str {
        match self {
            Self::Entity | Self::Plain => "ObjectType",
            Self::Connect | Self::Create | Self::Update | Self::Input => "InputType"
        }
    }
}

/// A generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the working directory, `/`-separated.
    pub path:    String,
    /// TypeScript source.
    pub content: String
}

impl GeneratedFile {
    /// File `name` inside `dir`.
    #[must_use]
    pub fn new(dir: &str, name: &str, content: String) -> Self {
        Self {
            path: imports::join(dir, name),
            content
        }
    }
}

fn class_block(header: &str, fields: &[FieldView], composition: &Composition, config: &Config) -> Vec<String> {
    let mut lines = vec![format!("{header} {{")];
    for (index, view) in fields.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.extend(
            emit::render(view, composition.kind, config)
                .into_iter()
                .map(|line| format!("  {line}"))
        );
    }
    lines.push("}".to_string());
    lines
}

/// Class declarations of `composition`, extra classes first.
#[must_use]
pub fn classes(composition: &Composition, config: &Config) -> Vec<String> {
    let export = if config.export_relation_modifier_classes { "export " } else { "" };
    let mut lines = Vec::new();

    for extra in &composition.extra_classes {
        lines.push("@InputType()".to_string());
        lines.extend(class_block(
            &format!("{export}class {}", extra.name),
            &extra.fields,
            composition,
            config
        ));
        lines.push(String::new());
    }

    if !composition.extra_classes.is_empty() {
        let names: Vec<&str> = composition
            .extra_classes
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        lines.push(format!("@ApiExtraModels({})", names.join(", ")));
    }
    lines.push(format!("@{}()", composition.kind.class_decorator()));

    let extends = composition
        .base
        .as_ref()
        .map(|base| format!(" extends {base}"))
        .unwrap_or_default();
    lines.extend(class_block(
        &format!("export class {}{extends}", composition.class_name),
        &composition.fields,
        composition,
        config
    ));
    lines
}

/// Full file text of `composition`.
#[must_use]
pub fn render(composition: &Composition, config: &Config) -> String {
    let mut lines: Vec<String> = imports::resolve(composition, config)
        .iter()
        .map(imports::ImportStatement::render)
        .collect();
    lines.push(String::new());
    lines.extend(classes(composition, config));
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
