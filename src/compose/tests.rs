// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use super::*;
use crate::model::FieldKind;

#[test]
fn nullable_view_is_never_required() {
    let view = FieldView::new(Field::scalar("name", "String").required(), true);
    assert!(view.is_nullable);
    assert!(!view.field.is_required);

    let view = FieldView::new(Field::scalar("name", "String").required(), false);
    assert!(view.field.is_required);
}

#[test]
fn view_builders() {
    let view = FieldView::new(Field::scalar("id", "Int"), false)
        .typed("number")
        .decorated(Decorations::hidden());
    assert_eq!(view.ts_type, "number");
    assert!(view.decorations.hidden);
}

#[test]
fn all_fields_walks_extra_classes() {
    let config = Config::default();
    let naming = Naming::new(&config);
    let model = Model::new("Post", vec![]);
    let mut c = Composition::new(ArtifactKind::Connect, &model, &naming);
    assert_eq!(c.class_name, "ConnectPostDto");

    c.fields.push(FieldView::new(Field::scalar("id", "Int"), true));
    c.extra_classes.push(ExtraClass {
        name:   "PostABUniqueInputType".into(),
        fields: vec![
            FieldView::new(Field::scalar("a", "String"), false),
            FieldView::new(Field::scalar("b", "Int"), false),
        ]
    });
    let names: Vec<_> = c.all_fields().map(|v| v.field.name.as_str()).collect();
    assert_eq!(names, vec!["id", "a", "b"]);
}

#[test]
fn lookups_distinguish_models_and_types() {
    let user = Model::new("User", vec![]);
    let address = Model::new("Address", vec![]);
    let datamodel = Datamodel::new(vec![user], vec![address], vec![]);
    let config = Config::default();
    let ctx = Context::new(&datamodel, &config);
    let owner = &datamodel.models[0];

    let relation = Field::new("friend", "User", FieldKind::Relation);
    assert_eq!(ctx.related_model(owner, &relation).unwrap().name, "User");

    let embedded = Field::new("home", "Address", FieldKind::Embedded);
    assert!(ctx.related_type(owner, &embedded).unwrap().is_type());
    assert!(matches!(
        ctx.related_model(owner, &embedded),
        Err(Error::RelatedModelNotFound { .. })
    ));
    assert!(matches!(
        ctx.related_type(owner, &relation),
        Err(Error::RelatedTypeNotFound { .. })
    ));
}

#[test]
fn artifact_imports_use_locators() {
    let mut user = Model::new("User", vec![]);
    user.output.entity = "out/user/entities".into();
    let mut post = Model::new("Post", vec![]);
    post.output.entity = "out/post/entities".into();
    let datamodel = Datamodel::new(vec![user, post], vec![], vec![]);
    let config = Config::default();
    let ctx = Context::new(&datamodel, &config);

    let import = ctx.import_artifact(
        &datamodel.models[1].output.entity,
        &datamodel.models[0],
        ArtifactKind::Entity
    );
    assert_eq!(import.from, "../../user/entities/user.entity");
    assert_eq!(import.render(), "import { UserEntity } from '../../user/entities/user.entity';");
}

#[test]
fn include_follows_api_property_type() {
    let datamodel = Datamodel::default();
    let config = Config {
        output_api_property_type: false,
        ..Config::default()
    };
    let ctx = Context::new(&datamodel, &config);
    assert!(!ctx.include().ty);
    assert!(ctx.include().doc);
}
