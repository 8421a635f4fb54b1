// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Import statements of a generated file.
//!
//! [`resolve`] collects every import a [`Composition`] needs, grouped by
//! package, and [`zip`] merges statements that share a source:
//!
//! ```text
//! { from: 'x', destruct: [A] }  ─┐
//! { from: 'y', destruct: [C] }   ├─► import { A, B } from 'x';
//! { from: 'x', destruct: [B, A] }┘   import { C } from 'y';
//! ```
//!
//! Group order: Prisma client, swagger, graphql, class-validator,
//! class-transformer, `@DtoCastType` imports, generated artifacts.

use crate::{
    annotation::classify,
    compose::Composition,
    config::Config,
    decorate::validator::ValidatorSource,
    emit,
    model::{Field, FieldKind}
};

/// One `import` statement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportStatement {
    /// Module specifier.
    pub from:     String,
    /// Default import binding.
    pub default:  Option<String>,
    /// Named imports, in order.
    pub destruct: Vec<String>
}

impl ImportStatement {
    /// Named imports from `from`.
    #[must_use]
    pub fn named<S: Into<String>>(from: impl Into<String>, symbols: impl IntoIterator<Item = S>) -> Self {
        Self {
            from:     from.into(),
            default:  None,
            destruct: symbols.into_iter().map(Into::into).collect()
        }
    }

    /// Default import of `binding` from `from`.
    #[must_use]
    pub fn default_import(from: impl Into<String>, binding: impl Into<String>) -> Self {
        Self {
            from:     from.into(),
            default:  Some(binding.into()),
            destruct: Vec::new()
        }
    }

    /// Statement text, e.g. `import { A, B } from 'x';`.
    #[must_use]
    pub fn render(&self) -> String {
        let named = (!self.destruct.is_empty()).then(|| format!("{{ {} }}", self.destruct.join(", ")));
        let bindings = match (&self.default, named) {
            (Some(default), Some(named)) => format!("{default}, {named}"),
            (Some(default), None) => default.clone(),
            (None, Some(named)) => named,
            (None, None) => return format!("import '{}';", self.from)
        };
        format!("import {bindings} from '{}';", self.from)
    }
}

/// Merge statements by source, keeping first-seen order of sources and
/// symbols and dropping duplicate symbols.
#[must_use]
pub fn zip(statements: Vec<ImportStatement>) -> Vec<ImportStatement> {
    let mut merged: Vec<ImportStatement> = Vec::new();
    for statement in statements {
        match merged.iter_mut().find(|m| m.from == statement.from) {
            Some(existing) => {
                if existing.default.is_none() {
                    existing.default = statement.default;
                }
                for symbol in statement.destruct {
                    if !existing.destruct.contains(&symbol) {
                        existing.destruct.push(symbol);
                    }
                }
            }
            None => {
                let mut fresh = ImportStatement {
                    destruct: Vec::new(),
                    ..statement
                };
                for symbol in statement.destruct {
                    if !fresh.destruct.contains(&symbol) {
                        fresh.destruct.push(symbol);
                    }
                }
                merged.push(fresh);
            }
        }
    }
    merged
}

fn segments(dir: &str) -> Vec<&str> {
    dir.split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != ".")
        .collect()
}

/// Relative module specifier of `stem` in `to_dir`, seen from `from_dir`.
///
/// ```text
/// relative("out/user/dto", "out/post/dto", "post.dto") == "../../post/dto/post.dto"
/// relative("out", "out", "pagination")                 == "./pagination"
/// ```
#[must_use]
pub fn relative(from_dir: &str, to_dir: &str, stem: &str) -> String {
    let from = segments(from_dir);
    let to = segments(to_dir);
    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();
    let ups = from.len() - common;

    let mut parts: Vec<&str> = std::iter::repeat_n("..", ups).collect();
    parts.extend_from_slice(&to[common..]);
    parts.push(stem);
    let path = parts.join("/");
    if ups == 0 { format!("./{path}") } else { path }
}

/// File path of `file` inside `dir`.
#[must_use]
pub fn join(dir: &str, file: &str) -> String {
    let mut parts = segments(dir);
    parts.push(file);
    let path = parts.join("/");
    if dir.starts_with('/') { format!("/{path}") } else { path }
}

/// Import requested by `@DtoCastType(T, path[, default])`.
///
/// A third parameter of `default` makes `T` a default import.
#[must_use]
pub fn cast_import(field: &Field) -> Option<ImportStatement> {
    let params = classify::params(field, classify::type_cast(field)?)?;
    let mut parts = params.split(',').map(str::trim);
    let ty = parts.next().filter(|s| !s.is_empty())?;
    let from = parts.next().filter(|s| !s.is_empty())?;
    let from = from.trim_matches(|c| c == '\'' || c == '"');
    Some(match parts.next() {
        Some("default") => ImportStatement::default_import(from, ty),
        _ => ImportStatement::named(from, [ty])
    })
}

fn push_unique(list: &mut Vec<String>, symbol: &str) {
    if !list.iter().any(|s| s == symbol) {
        list.push(symbol.to_string());
    }
}

/// Every import of `composition`, merged.
#[must_use]
pub fn resolve(composition: &Composition, config: &Config) -> Vec<ImportStatement> {
    let fields: Vec<_> = composition.all_fields().collect();
    let has_extras = !composition.extra_classes.is_empty();
    let any_hidden = fields.iter().any(|v| v.decorations.hidden);
    let any_visible = fields.iter().any(|v| !v.decorations.hidden);

    let mut statements = Vec::new();

    let mut prisma = Vec::new();
    for view in &fields {
        if view.field.kind == FieldKind::Enum && classify::type_cast(&view.field).is_none() {
            push_unique(&mut prisma, &view.field.type_name);
        }
    }
    if fields.iter().any(|v| v.ts_type.starts_with("Prisma.")) {
        push_unique(&mut prisma, "Prisma");
    }
    if !prisma.is_empty() {
        statements.push(ImportStatement::named(&config.prisma_client_import_path, prisma));
    }

    let mut swagger = Vec::new();
    if has_extras {
        swagger.push("ApiExtraModels");
    }
    if any_hidden {
        swagger.push("ApiHideProperty");
    }
    if any_visible {
        swagger.push("ApiProperty");
    }
    if !swagger.is_empty() {
        statements.push(ImportStatement::named("@nestjs/swagger", swagger));
    }

    let decorator = composition.kind.class_decorator();
    let gql_names: Vec<String> = fields
        .iter()
        .filter(|v| !v.decorations.hidden)
        .filter_map(|v| emit::gql_expr(v, composition.kind))
        .map(|e| e.name().to_string())
        .collect();
    let graphql: Vec<&str> = [
        ("Field", any_visible),
        ("InputType", decorator == "InputType" || has_extras),
        ("ObjectType", decorator == "ObjectType"),
        ("Int", gql_names.iter().any(|n| n == "Int")),
        ("Float", gql_names.iter().any(|n| n == "Float"))
    ]
    .into_iter()
    .filter_map(|(name, used)| used.then_some(name))
    .collect();
    statements.push(ImportStatement::named("@nestjs/graphql", graphql));

    let mut validators = Vec::new();
    let mut transformers = Vec::new();
    for validator in fields.iter().flat_map(|v| v.decorations.validators.iter()) {
        match validator.source() {
            ValidatorSource::ClassValidator => push_unique(&mut validators, &validator.name),
            ValidatorSource::ClassTransformer => push_unique(&mut transformers, &validator.name)
        }
    }
    if any_hidden {
        push_unique(&mut transformers, "Exclude");
    }
    if !validators.is_empty() {
        statements.push(ImportStatement::named("class-validator", validators));
    }
    if !transformers.is_empty() {
        statements.push(ImportStatement::named("class-transformer", transformers));
    }

    statements.extend(fields.iter().filter_map(|v| cast_import(&v.field)));
    statements.extend(composition.related.iter().cloned());

    zip(statements)
}

#[cfg(test)]
mod tests;
