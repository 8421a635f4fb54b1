// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared `pagination.ts`.
//!
//! `Pagination` describes a page of results; `PaginationInput` is the base
//! class of every filter input. Both are built from required `Int` fields
//! and rendered like any other artifact.

use super::{ArtifactKind, classes};
use crate::{
    compose::{Composition, FieldView, filter::RESERVED},
    config::Config,
    decorate::{self, Include, validator},
    imports::{self, ImportStatement},
    model::Field
};

fn composition(class_name: &str, names: &[&str], kind: ArtifactKind, config: &Config) -> Composition {
    let fields = names
        .iter()
        .map(|name| {
            let field = Field::scalar(*name, "Int").required();
            let mut decorations = decorate::plan(&field, Some(false), Include::default(), kind);
            if config.class_validation && kind.validates() {
                decorations.validators = validator::validators(&field);
            }
            FieldView::new(field, false)
                .typed("number")
                .decorated(decorations)
        })
        .collect();
    Composition {
        kind,
        class_name: class_name.to_string(),
        fields,
        base: None,
        extra_classes: Vec::new(),
        related: Vec::new()
    }
}

/// Source of `pagination.ts`.
#[must_use]
pub fn render(config: &Config) -> String {
    let output = composition("Pagination", &RESERVED, ArtifactKind::Plain, config);
    let input = composition("PaginationInput", &RESERVED[..2], ArtifactKind::Input, config);

    let statements: Vec<ImportStatement> = imports::resolve(&output, config)
        .into_iter()
        .chain(imports::resolve(&input, config))
        .collect();
    let mut lines: Vec<String> = imports::zip(statements)
        .iter()
        .map(ImportStatement::render)
        .collect();
    lines.push(String::new());
    lines.extend(classes(&output, config));
    lines.push(String::new());
    lines.extend(classes(&input, config));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_classes_in_one_file() {
        let text = render(&Config::default());
        assert!(text.starts_with(
            "import { ApiProperty } from '@nestjs/swagger';\n\
             import { Field, ObjectType, Int, InputType } from '@nestjs/graphql';\n"
        ));
        assert!(text.contains("@ObjectType()\nexport class Pagination {\n"));
        assert!(text.contains("@InputType()\nexport class PaginationInput {\n"));
        assert!(text.contains("  totalPages: number;\n}"));
        assert!(!text.contains("extends"));
        assert_eq!(text.matches("@Field(() => Int)").count(), 6);
    }

    #[test]
    fn input_validators() {
        let config = Config {
            class_validation: true,
            ..Config::default()
        };
        let text = render(&config);
        assert!(text.contains("import { IsInt } from 'class-validator';"));
        assert_eq!(text.matches("@IsInt()").count(), 2);
    }
}
