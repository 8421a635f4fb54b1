// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! # entity-dto-codegen
//!
//! Generates NestJS DTO, entity and GraphQL classes from a Prisma datamodel.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use entity_dto_codegen::{Config, Datamodel, generate};
//!
//! let datamodel = Datamodel::from_json(&dmmf_json)?;
//! let files = generate(&datamodel, &Config::default())?;
//!
//! for file in files {
//!     std::fs::write(file.path, file.content)?;
//! }
//! ```
//!
//! For a model `User` this produces `ConnectUserDto`, `CreateUserDto`,
//! `UpdateUserDto`, `UserEntity`, `UserDto` and `UserInput`, each field
//! decorated with `@ApiProperty(...)` and `@Field(...)`. Enums get one file
//! each, and a shared `pagination.ts` holds the pagination wrappers.
//!
//! ## Pipeline
//!
//! ```text
//! Datamodel ─► compose (per artifact) ─► decorate (per field)
//!           ─► imports ─► emit (per field) ─► artifact (per file)
//! ```
//!
//! Field behavior is steered by markers in the Prisma documentation
//! comments, e.g. `/// @DtoReadOnly` or `/// @DtoCreateOptional`. See
//! [`annotation::Marker`] for the complete list.

pub mod annotation;
pub mod artifact;
pub mod compose;
pub mod config;
pub mod decorate;
pub mod emit;
mod error;
mod generator;
pub mod imports;
pub mod model;
pub mod naming;

pub use artifact::{ArtifactKind, GeneratedFile};
pub use config::{Config, FileTypes, NamingStyle};
pub use error::{Error, Result};
pub use generator::generate;
pub use model::{Datamodel, EnumDef, Field, FieldKind, Model, ModelKind};
