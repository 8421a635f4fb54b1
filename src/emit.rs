// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declaration text for one property.
//!
//! Every [`FieldView`] arrives fully planned; this module only renders.
//! Output order per property:
//!
//! ```text
//! @ApiProperty({          ─┐ or @ApiProperty() / @ApiHideProperty() + @Exclude(...)
//!   type: 'integer',       │
//! })                      ─┘
//! @IsOptional()           ── class validators
//! @Field(() => Int, {     ─┐ omitted for hidden properties
//!   nullable: true,        │
//! })                      ─┘
//! age?: number | null;    ── property line
//! ```
//!
//! Lines are unindented; the assembler indents class bodies.

use crate::{
    artifact::ArtifactKind,
    compose::FieldView,
    config::Config,
    decorate::{ApiKey, GqlKey, PropValue, TypeExpr, scalar}
};

fn object_lines(head: &str, entries: &[(&str, String)]) -> Vec<String> {
    let mut lines = vec![format!("{head}{{")];
    lines.extend(entries.iter().map(|(key, value)| format!("  {key}: {value},")));
    lines.push("})".to_string());
    lines
}

/// Representative type expression of `@Field`.
///
/// Format wins over type, type over enum. Mutations take date-time values
/// as strings. A property whose API type is a generated class references
/// that class in GraphQL too, keeping the list shape.
#[must_use]
pub fn gql_expr(view: &FieldView, kind: ArtifactKind) -> Option<TypeExpr> {
    let gql = &view.decorations.gql;
    let pick = |key: GqlKey| gql.iter().find(|p| p.key == key);
    let entry = pick(GqlKey::Format)
        .or_else(|| pick(GqlKey::Type))
        .or_else(|| pick(GqlKey::Enum))?;
    let PropValue::Thunk(expr) = &entry.value else {
        return None;
    };

    let mut expr = expr.clone();
    if kind.is_mutation()
        && entry.base.as_deref() == Some(scalar::DATE_TIME)
        && expr.name() == "Date"
    {
        expr = expr.renamed("String");
    }
    if let Some(PropValue::Thunk(TypeExpr::Class(class))) = view.decorations.api_type() {
        expr = expr.renamed(class.as_str());
    }
    Some(expr)
}

/// `@ApiProperty` lines, or the hide/exclude pair for hidden properties.
#[must_use]
pub fn api_property(view: &FieldView) -> Vec<String> {
    let d = &view.decorations;
    if d.hidden {
        return vec![
            "@ApiHideProperty()".to_string(),
            "@Exclude({ toPlainOnly: true })".to_string(),
        ];
    }
    let entries: Vec<(&str, String)> = d
        .api
        .iter()
        .filter(|p| p.key != ApiKey::Dummy)
        .map(|p| (p.key.name(), p.value.render()))
        .collect();
    if entries.is_empty() {
        return vec!["@ApiProperty()".to_string()];
    }
    object_lines("@ApiProperty(", &entries)
}

/// `@Field` lines; empty for hidden properties.
#[must_use]
pub fn field_decorator(view: &FieldView, kind: ArtifactKind) -> Vec<String> {
    let d = &view.decorations;
    if d.hidden {
        return Vec::new();
    }
    let options: Vec<(&str, String)> = d
        .gql
        .iter()
        .filter(|p| p.key != GqlKey::Dummy && !p.key.is_type_like())
        .map(|p| (p.key.name(), p.value.render()))
        .collect();
    let expr = gql_expr(view, kind).map(|e| format!("() => {e}"));

    match (expr, options.is_empty()) {
        (None, true) => vec!["@Field()".to_string()],
        (Some(expr), true) => vec![format!("@Field({expr})")],
        (None, false) => object_lines("@Field(", &options),
        (Some(expr), false) => object_lines(&format!("@Field({expr}, "), &options)
    }
}

/// Property declaration, e.g. `tags?: string[] | null;`.
#[must_use]
pub fn property_line(view: &FieldView, kind: ArtifactKind, config: &Config) -> String {
    let field = &view.field;
    let marker = if !field.is_required {
        "?"
    } else if config.definite_assignment_assertion && kind.allows_definite_assignment() {
        "!"
    } else {
        ""
    };
    let list = if field.is_list { "[]" } else { "" };
    let null = if view.is_nullable { " | null" } else { "" };
    format!("{}{marker}: {}{list}{null};", field.name, view.ts_type)
}

/// Full declaration block of one property.
#[must_use]
pub fn render(view: &FieldView, kind: ArtifactKind, config: &Config) -> Vec<String> {
    let mut lines = api_property(view);
    lines.extend(view.decorations.validators.iter().map(|v| v.render()));
    lines.extend(field_decorator(view, kind));
    lines.push(property_line(view, kind, config));
    lines
}
