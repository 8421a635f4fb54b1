// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Class and file names.
//!
//! | Artifact | Class (defaults) | File stem |
//! |----------|------------------|-----------|
//! | connect | `ConnectUserDto` | `connect-user.dto` |
//! | create | `CreateUserDto` | `create-user.dto` |
//! | update | `UpdateUserDto` | `update-user.dto` |
//! | entity | `UserEntity` | `user.entity` |
//! | plain | `UserDto` | `user.dto` |
//! | input | `UserInput` | `user.input` |
//! | enum | `RoleEnum` | `role.enum` |
//!
//! The model part of a file stem follows [`NamingStyle`]; class names are
//! always PascalCase.

use convert_case::{Case, Casing};

use crate::{
    artifact::ArtifactKind,
    config::{Config, NamingStyle}
};

/// PascalCase form of a model or field name.
#[must_use]
pub fn pascal(name: &str) -> String {
    name.to_case(Case::Pascal)
}

/// camelCase form of a model or field name.
#[must_use]
pub fn camel(name: &str) -> String {
    name.to_case(Case::Camel)
}

/// Name builder bound to one configuration.
#[derive(Debug, Clone, Copy)]
pub struct Naming<'a> {
    config: &'a Config
}

impl<'a> Naming<'a> {
    /// Bind to `config`.
    #[must_use]
    pub const fn new(config: &'a Config) -> Self {
        Self {
            config
        }
    }

    /// Class name of `kind` for `model`.
    #[must_use]
    pub fn class(&self, kind: ArtifactKind, model: &str) -> String {
        let c = self.config;
        let model = pascal(model);
        match kind {
            ArtifactKind::Connect => format!("{}{model}{}", c.connect_dto_prefix, c.dto_suffix),
            ArtifactKind::Create => format!("{}{model}{}", c.create_dto_prefix, c.dto_suffix),
            ArtifactKind::Update => format!("{}{model}{}", c.update_dto_prefix, c.dto_suffix),
            ArtifactKind::Entity => format!("{}{model}{}", c.entity_prefix, c.entity_suffix),
            ArtifactKind::Plain => format!("{model}{}", c.dto_suffix),
            ArtifactKind::Input => format!("{model}Input")
        }
    }

    /// Class of a compound unique input, e.g. `PostSlugAuthorUniqueInputType`.
    #[must_use]
    pub fn unique_input(&self, model: &str, compound: &str) -> String {
        format!("{}{}UniqueInputType", pascal(model), pascal(compound))
    }

    /// Class of a nested relation input, e.g.
    /// `CreatePostAuthorRelationInputDto`.
    #[must_use]
    pub fn relation_input(&self, kind: ArtifactKind, model: &str, field: &str) -> String {
        let prefix = match kind {
            ArtifactKind::Update => &self.config.update_dto_prefix,
            _ => &self.config.create_dto_prefix
        };
        format!(
            "{prefix}{}{}RelationInput{}",
            pascal(model),
            pascal(field),
            self.config.dto_suffix
        )
    }

    /// Model name in the configured file case.
    #[must_use]
    pub fn file_case(&self, name: &str) -> String {
        let case = match self.config.file_naming_style {
            NamingStyle::Camel => Case::Camel,
            NamingStyle::Kebab => Case::Kebab,
            NamingStyle::Pascal => Case::Pascal,
            NamingStyle::Snake => Case::Snake
        };
        name.to_case(case)
    }

    /// File stem (no `.ts`) of `kind` for `model`.
    #[must_use]
    pub fn file_stem(&self, kind: ArtifactKind, model: &str) -> String {
        let name = self.file_case(model);
        match kind {
            ArtifactKind::Connect => format!("connect-{name}.dto"),
            ArtifactKind::Create => format!("create-{name}.dto"),
            ArtifactKind::Update => format!("update-{name}.dto"),
            ArtifactKind::Entity => format!("{name}.entity"),
            ArtifactKind::Plain => format!("{name}.dto"),
            ArtifactKind::Input => format!("{name}.input")
        }
    }

    /// File stem of an enum.
    #[must_use]
    pub fn enum_stem(&self, name: &str) -> String {
        format!("{}.enum", self.file_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_class_names() {
        let config = Config::default();
        let naming = Naming::new(&config);
        assert_eq!(naming.class(ArtifactKind::Connect, "User"), "ConnectUserDto");
        assert_eq!(naming.class(ArtifactKind::Create, "User"), "CreateUserDto");
        assert_eq!(naming.class(ArtifactKind::Update, "User"), "UpdateUserDto");
        assert_eq!(naming.class(ArtifactKind::Entity, "User"), "UserEntity");
        assert_eq!(naming.class(ArtifactKind::Plain, "User"), "UserDto");
        assert_eq!(naming.class(ArtifactKind::Input, "User"), "UserInput");
    }

    #[test]
    fn configured_affixes() {
        let config = Config {
            entity_prefix: "Db".into(),
            entity_suffix: String::new(),
            dto_suffix: "Payload".into(),
            ..Config::default()
        };
        let naming = Naming::new(&config);
        assert_eq!(naming.class(ArtifactKind::Entity, "user"), "DbUser");
        assert_eq!(naming.class(ArtifactKind::Create, "user"), "CreateUserPayload");
        assert_eq!(
            naming.relation_input(ArtifactKind::Update, "Post", "author"),
            "UpdatePostAuthorRelationInputPayload"
        );
    }

    #[test]
    fn helper_class_names() {
        let config = Config::default();
        let naming = Naming::new(&config);
        assert_eq!(
            naming.unique_input("Post", "slug_authorId"),
            "PostSlugAuthorIdUniqueInputType"
        );
        assert_eq!(
            naming.relation_input(ArtifactKind::Create, "Post", "author"),
            "CreatePostAuthorRelationInputDto"
        );
    }

    #[test]
    fn file_stems_follow_style() {
        let camel = Config::default();
        let naming = Naming::new(&camel);
        assert_eq!(naming.file_stem(ArtifactKind::Connect, "BlogPost"), "connect-blogPost.dto");
        assert_eq!(naming.file_stem(ArtifactKind::Entity, "BlogPost"), "blogPost.entity");

        let kebab = Config {
            file_naming_style: NamingStyle::Kebab,
            ..Config::default()
        };
        let naming = Naming::new(&kebab);
        assert_eq!(naming.file_stem(ArtifactKind::Input, "BlogPost"), "blog-post.input");
        assert_eq!(naming.enum_stem("UserRole"), "user-role.enum");

        let snake = Config {
            file_naming_style: NamingStyle::Snake,
            ..Config::default()
        };
        assert_eq!(
            Naming::new(&snake).file_stem(ArtifactKind::Create, "BlogPost"),
            "create-blog_post.dto"
        );
    }

    #[test]
    fn case_helpers() {
        assert_eq!(pascal("createdAt"), "CreatedAt");
        assert_eq!(camel("UserRole"), "userRole");
    }
}
