// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use super::*;
use crate::{
    artifact::ArtifactKind,
    compose::{self, Context},
    model::{Datamodel, Model}
};

fn sources(statements: &[ImportStatement]) -> Vec<&str> {
    statements.iter().map(|s| s.from.as_str()).collect()
}

#[test]
fn render_shapes() {
    assert_eq!(
        ImportStatement::named("x", ["A", "B"]).render(),
        "import { A, B } from 'x';"
    );
    assert_eq!(
        ImportStatement::default_import("decimal.js", "Decimal").render(),
        "import Decimal from 'decimal.js';"
    );
    let both = ImportStatement {
        from:     "y".into(),
        default:  Some("Y".into()),
        destruct: vec!["Z".into()]
    };
    assert_eq!(both.render(), "import Y, { Z } from 'y';");
}

#[test]
fn zip_merges_by_source() {
    let merged = zip(vec![
        ImportStatement::named("x", ["A"]),
        ImportStatement::named("y", ["C"]),
        ImportStatement::named("x", ["B", "A"]),
        ImportStatement::named("y", ["C", "C"]),
    ]);
    assert_eq!(merged, vec![
        ImportStatement::named("x", ["A", "B"]),
        ImportStatement::named("y", ["C"]),
    ]);
}

#[test]
fn relative_paths() {
    assert_eq!(relative("", "", "user.dto"), "./user.dto");
    assert_eq!(relative(".", ".", "pagination"), "./pagination");
    assert_eq!(relative("out", "out/user", "user.dto"), "./user/user.dto");
    assert_eq!(
        relative("out/post/dto", "out/user/entities", "user.entity"),
        "../../user/entities/user.entity"
    );
    assert_eq!(relative("out/user/input", "out", "pagination"), "../../pagination");
}

#[test]
fn joined_file_paths() {
    assert_eq!(join(".", "pagination.ts"), "pagination.ts");
    assert_eq!(join("out/user/", "user.dto.ts"), "out/user/user.dto.ts");
    assert_eq!(join("/abs/out", "role.enum.ts"), "/abs/out/role.enum.ts");
}

#[test]
fn cast_imports() {
    let named = Field::scalar("meta", "Json").documented("@DtoCastType(Settings, ../types/settings)");
    assert_eq!(
        cast_import(&named),
        Some(ImportStatement::named("../types/settings", ["Settings"]))
    );
    let default = Field::scalar("amount", "Decimal").documented("@DtoCastType(Decimal, 'decimal.js', default)");
    assert_eq!(
        cast_import(&default),
        Some(ImportStatement::default_import("decimal.js", "Decimal"))
    );
    assert_eq!(cast_import(&Field::scalar("x", "String").documented("@DtoCastType(Only)")), None);
}

#[test]
fn cast_import_edge_cases() {
    let legacy = Field::scalar("meta", "Json").documented("@DtoOverrideType(Settings, ../types/settings)");
    assert_eq!(
        cast_import(&legacy),
        Some(ImportStatement::named("../types/settings", ["Settings"]))
    );
    for doc in ["@DtoCastType()", "@DtoCastType(, ./x)", "@DtoCastType(Settings, ./x"] {
        assert_eq!(cast_import(&Field::scalar("x", "String").documented(doc)), None, "{doc}");
    }
    let empty_cast = Field::scalar("x", "String").documented("@DtoCastType()\n@DtoOverrideType(Settings, ./x)");
    assert_eq!(
        cast_import(&empty_cast),
        Some(ImportStatement::named("./x", ["Settings"]))
    );
}

#[test]
fn resolve_groups_in_order() {
    let user = Model::new("User", vec![
        Field::scalar("id", "Int").id().required(),
        Field::new("role", "Role", FieldKind::Enum).required(),
        Field::scalar("balance", "Decimal").required(),
        Field::scalar("token", "String").documented("@DtoApiHidden"),
        Field::new("posts", "Post", FieldKind::Relation)
            .relation("PostToUser", &[], &[])
            .list(),
    ]);
    let post = Model::new("Post", vec![Field::scalar("id", "Int").id().required()]);
    let dm = Datamodel::new(vec![user, post], vec![], vec![]);
    let config = Config::default();
    let ctx = Context::new(&dm, &config);
    let c = compose::read::compose(&dm.models[0], ArtifactKind::Entity, &ctx).unwrap();

    let imports = resolve(&c, &config);
    assert_eq!(sources(&imports), vec![
        "@prisma/client",
        "@nestjs/swagger",
        "@nestjs/graphql",
        "class-transformer",
        "./post.entity",
    ]);
    assert_eq!(imports[0].destruct, vec!["Role", "Prisma"]);
    assert_eq!(imports[1].destruct, vec!["ApiHideProperty", "ApiProperty"]);
    assert_eq!(imports[2].destruct, vec!["Field", "ObjectType", "Int", "Float"]);
    assert_eq!(imports[3].destruct, vec!["Exclude"]);
}

#[test]
fn resolve_validators_and_extras() {
    let user = Model::new("User", vec![Field::scalar("id", "Int").id().required()]);
    let post = Model::new("Post", vec![
        Field::scalar("title", "String").required(),
        Field::new("author", "User", FieldKind::Relation)
            .relation("PostToUser", &["authorId"], &["id"])
            .required()
            .documented("@DtoRelationCanConnectOnCreate"),
        Field::scalar("authorId", "Int").required().read_only(),
    ]);
    let dm = Datamodel::new(vec![user, post], vec![], vec![]);
    let config = Config {
        class_validation: true,
        ..Config::default()
    };
    let ctx = Context::new(&dm, &config);
    let c = compose::mutation::compose(&dm.models[1], ArtifactKind::Create, &ctx).unwrap();

    let imports = resolve(&c, &config);
    assert_eq!(sources(&imports), vec![
        "@nestjs/swagger",
        "@nestjs/graphql",
        "class-validator",
        "class-transformer",
        "./connect-user.dto",
    ]);
    assert_eq!(imports[0].destruct, vec!["ApiExtraModels", "ApiProperty"]);
    assert_eq!(imports[1].destruct, vec!["Field", "InputType"]);
    assert_eq!(imports[2].destruct, vec!["IsString", "ValidateNested"]);
    assert_eq!(imports[3].destruct, vec!["Type"]);
    assert_eq!(imports[4].destruct, vec!["ConnectUserDto"]);
}
