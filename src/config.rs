// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generator configuration.
//!
//! Every key is optional; missing keys take the defaults below. Keys use
//! camelCase so a generator block can be passed through unchanged.
//!
//! | Key | Default |
//! |-----|---------|
//! | `output` | `"."` |
//! | `connectDtoPrefix` | `Connect` |
//! | `createDtoPrefix` | `Create` |
//! | `updateDtoPrefix` | `Update` |
//! | `dtoSuffix` | `Dto` |
//! | `entityPrefix` | `""` |
//! | `entitySuffix` | `Entity` |
//! | `fileNamingStyle` | `camel` |
//! | `classValidation` | `false` |
//! | `generateEnums` | `true` |
//! | `definiteAssignmentAssertion` | `false` |
//! | `requiredResponseApiProperty` | `true` |
//! | `prismaClientImportPath` | `@prisma/client` |
//! | `outputApiPropertyType` | `true` |
//! | `generateFileTypes` | `all` |
//! | `showDefaultValues` | `false` |
//! | `exportRelationModifierClasses` | `true` |
//! | `outputToNestJsResourceStructure` | `false` |
//! | `flatResourceStructure` | `false` |

use serde::Deserialize;

/// Case applied to the model part of file names, e.g. for `BlogPost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingStyle {
    /// `create-blogPost.dto.ts`
    #[default]
    Camel,

    /// `create-blog-post.dto.ts`
    Kebab,

    /// `create-BlogPost.dto.ts`
    Pascal,

    /// `create-blog_post.dto.ts`
    Snake
}

/// Which artifacts are written per model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileTypes {
    /// Connect, create, update, entity, plain and input.
    #[default]
    All,

    /// Everything except the entity.
    Dto,

    /// Only the entity.
    Entity
}

/// Generator options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Root output directory.
    pub output: String,

    /// Prefix of connect DTO class names.
    pub connect_dto_prefix: String,

    /// Prefix of create DTO class names.
    pub create_dto_prefix: String,

    /// Prefix of update DTO class names.
    pub update_dto_prefix: String,

    /// Suffix of connect, create and update DTO class names.
    pub dto_suffix: String,

    /// Prefix of entity class names.
    pub entity_prefix: String,

    /// Suffix of entity class names.
    pub entity_suffix: String,

    /// Case of generated file names.
    pub file_naming_style: NamingStyle,

    /// Emit class-validator decorators on input classes.
    pub class_validation: bool,

    /// Emit enum files.
    pub generate_enums: bool,

    /// Use `!` instead of nothing on required properties of read classes.
    pub definite_assignment_assertion: bool,

    /// Mark required fields of read classes as required in API docs.
    ///
    /// Only non-nullable properties are affected. Nullable entity and plain
    /// properties are always documented with `required: false`.
    pub required_response_api_property: bool,

    /// Module the Prisma enums and namespace are imported from.
    pub prisma_client_import_path: String,

    /// Emit `type` entries in decorators.
    pub output_api_property_type: bool,

    /// Which artifacts are written per model.
    pub generate_file_types: FileTypes,

    /// Keep required fields with a default as optional input.
    pub show_default_values: bool,

    /// Export helper classes emitted next to an artifact.
    pub export_relation_modifier_classes: bool,

    /// Place each model in its own directory.
    pub output_to_nest_js_resource_structure: bool,

    /// Skip the `dto`/`entities`/`input` subdirectories.
    pub flat_resource_structure: bool
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: ".".to_string(),
            connect_dto_prefix: "Connect".to_string(),
            create_dto_prefix: "Create".to_string(),
            update_dto_prefix: "Update".to_string(),
            dto_suffix: "Dto".to_string(),
            entity_prefix: String::new(),
            entity_suffix: "Entity".to_string(),
            file_naming_style: NamingStyle::Camel,
            class_validation: false,
            generate_enums: true,
            definite_assignment_assertion: false,
            required_response_api_property: true,
            prisma_client_import_path: "@prisma/client".to_string(),
            output_api_property_type: true,
            generate_file_types: FileTypes::All,
            show_default_values: false,
            export_relation_modifier_classes: true,
            output_to_nest_js_resource_structure: false,
            flat_resource_structure: false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn camel_case_keys() {
        let config: Config = serde_json::from_str(
            r#"{
                "classValidation": true,
                "fileNamingStyle": "kebab",
                "generateFileTypes": "dto",
                "outputToNestJsResourceStructure": true,
                "entitySuffix": ""
            }"#
        )
        .unwrap();
        assert!(config.class_validation);
        assert_eq!(config.file_naming_style, NamingStyle::Kebab);
        assert_eq!(config.generate_file_types, FileTypes::Dto);
        assert!(config.output_to_nest_js_resource_structure);
        assert!(config.entity_suffix.is_empty());
        assert_eq!(config.dto_suffix, "Dto");
    }

    #[test]
    fn unknown_style_is_rejected() {
        let result = serde_json::from_str::<Config>(r#"{ "fileNamingStyle": "screaming" }"#);
        assert!(result.is_err());
    }
}
