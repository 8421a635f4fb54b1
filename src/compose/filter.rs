// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Filter input: a paginated search payload.
//!
//! Built from scalar and enum fields only. Every property is optional.
//! Non-date properties get a list twin for "is one of" filters:
//!
//! ```text
//! email String          email?: string | null;
//! role  Role      ──►   role?: Role | null;
//!                       emailList?: string[] | null;
//!                       roleList?: Role[] | null;
//! ```

use super::{Composition, Context, FieldView, types};
use crate::{
    annotation::{Marker, classify},
    artifact::ArtifactKind,
    imports::{self, ImportStatement},
    model::{Field, FieldKind, FieldPatch, Model}
};

/// Names taken by `PaginationInput`.
pub const RESERVED: [&str; 4] = ["page", "size", "totalItems", "totalPages"];

/// Stem of the shared pagination file.
pub const PAGINATION_STEM: &str = "pagination";

/// Base class of every filter input.
pub const PAGINATION_BASE: &str = "PaginationInput";

fn is_filterable(field: &Field) -> bool {
    matches!(field.kind, FieldKind::Scalar | FieldKind::Enum)
        && field.type_name != "Json"
        && !RESERVED.contains(&field.name.as_str())
}

fn candidates(model: &Model) -> Vec<Field> {
    let base: Vec<Field> = model
        .fields
        .iter()
        .filter(|f| is_filterable(f))
        .map(|f| {
            f.derive(FieldPatch {
                is_required: Some(false),
                has_default_value: Some(false),
                ..FieldPatch::default()
            })
        })
        .collect();
    let twins: Vec<Field> = base
        .iter()
        .filter(|f| f.type_name != "DateTime")
        .map(|f| {
            f.derive(FieldPatch {
                name: Some(format!("{}List", f.name)),
                is_list: Some(true),
                ..FieldPatch::default()
            })
        })
        .collect();
    base.into_iter().chain(twins).collect()
}

/// Compose the filter input of a model or composite type.
#[must_use]
pub fn compose(model: &Model, ctx: &Context<'_>) -> Composition {
    let kind = ArtifactKind::Input;
    let mut composition = Composition::new(kind, model, &ctx.naming);

    for field in candidates(model) {
        if classify::is_read_only(&field) || classify::has(&field, Marker::InputHidden) {
            continue;
        }
        let forced_optional = classify::has(&field, Marker::InputOptional);
        if field.is_updated_at && !forced_optional {
            continue;
        }
        let is_required = classify::has(&field, Marker::InputRequired);
        let field = field.derive(FieldPatch {
            is_required: Some(is_required),
            ..FieldPatch::default()
        });
        let field = types::apply_validate_if(field, Marker::InputValidateIf, ctx);
        let view = FieldView::new(field, !is_required);
        composition
            .fields
            .push(types::finish(view, kind, ctx, ctx.include()));
    }

    composition.base = Some(PAGINATION_BASE.to_string());
    composition.related.push(ImportStatement::named(
        imports::relative(model.output.dir(kind), &ctx.config.output, PAGINATION_STEM),
        [PAGINATION_BASE]
    ));
    composition
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, model::Datamodel};

    fn names(c: &Composition) -> Vec<&str> {
        c.fields.iter().map(|v| v.field.name.as_str()).collect()
    }

    fn compose_one(model: Model, config: &Config) -> Composition {
        let dm = Datamodel::new(vec![model], vec![], vec![]);
        let ctx = Context::new(&dm, config);
        compose(&dm.models[0], &ctx)
    }

    #[test]
    fn scalars_and_enums_with_list_twins() {
        let model = Model::new("User", vec![
            Field::scalar("email", "String").required(),
            Field::new("role", "Role", FieldKind::Enum).required(),
            Field::scalar("createdAt", "DateTime").required(),
            Field::scalar("meta", "Json"),
            Field::scalar("page", "Int"),
            Field::new("posts", "Post", FieldKind::Relation).relation("P", &[], &[]),
        ]);
        let c = compose_one(model, &Config::default());
        assert_eq!(c.class_name, "UserInput");
        assert_eq!(c.base.as_deref(), Some("PaginationInput"));
        assert_eq!(names(&c), vec!["email", "role", "createdAt", "emailList", "roleList"]);
        assert!(c.fields.iter().all(|v| !v.field.is_required && v.is_nullable));

        let twin = &c.fields[3];
        assert!(twin.field.is_list);
        assert_eq!(twin.ts_type, "string");
    }

    #[test]
    fn defaults_are_cleared() {
        use crate::model::DefaultValue;

        let model = Model::new("User", vec![
            Field::scalar("active", "Boolean")
                .required()
                .with_default(DefaultValue::Bool(true)),
        ]);
        let c = compose_one(model, &Config::default());
        assert_eq!(names(&c), vec!["active", "activeList"]);
        assert!(c.fields.iter().all(|v| !v.field.has_default_value));
    }

    #[test]
    fn markers_and_updated_at() {
        let model = Model::new("User", vec![
            Field::scalar("updatedAt", "DateTime").updated_at(),
            Field::scalar("touchedAt", "DateTime")
                .updated_at()
                .documented("@DtoInputOptional"),
            Field::scalar("secret", "String").documented("@DtoInputHidden"),
            Field::scalar("tenant", "String").documented("@DtoInputRequired"),
            Field::scalar("authorId", "Int").read_only(),
        ]);
        let c = compose_one(model, &Config::default());
        assert_eq!(names(&c), vec!["touchedAt", "tenant", "tenantList"]);
        assert!(c.fields[1].field.is_required);
        assert!(!c.fields[1].is_nullable);
    }

    #[test]
    fn pagination_import_is_relative() {
        let config = Config {
            output: "src/generated".into(),
            ..Config::default()
        };
        let mut model = Model::new("User", vec![Field::scalar("email", "String")]);
        model.output.input = "src/generated/user/input".into();
        let c = compose_one(model, &config);
        assert_eq!(c.related.len(), 1);
        assert_eq!(c.related[0].from, "../../pagination");
    }
}
