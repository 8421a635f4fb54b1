// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation errors.
//!
//! Every error aborts generation. Recoverable situations (a documentation
//! key that is absent, an unmapped scalar, a default of unknown shape) are
//! handled where they occur and never reach this type.

use thiserror::Error;

/// Errors raised while generating artifacts.
#[derive(Debug, Error)]
pub enum Error {
    /// A relation field points at a model that is not part of the datamodel.
    #[error("related model '{related}' for '{model}.{field}' not found")]
    RelatedModelNotFound {
        /// Model owning the field.
        model:   String,
        /// Field holding the relation.
        field:   String,
        /// Name of the missing model.
        related: String
    },

    /// An embedded field points at a composite type that does not exist.
    #[error("related type '{related}' for '{model}.{field}' not found")]
    RelatedTypeNotFound {
        /// Model or type owning the field.
        model:   String,
        /// Field holding the embedded value.
        field:   String,
        /// Name of the missing type.
        related: String
    },

    /// Only entity files were requested while composite types exist.
    #[error(
        "generating only entity files while having composite types is not possible; \
         set file types to 'all' or 'dto'"
    )]
    EntityOnlyWithTypes,

    /// The datamodel JSON could not be decoded.
    #[error("invalid datamodel: {0}")]
    Datamodel(#[from] serde_json::Error)
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_error_names_model_and_field() {
        let err = Error::RelatedModelNotFound {
            model:   "Post".to_string(),
            field:   "author".to_string(),
            related: "User".to_string()
        };
        assert_eq!(err.to_string(), "related model 'User' for 'Post.author' not found");
    }

    #[test]
    fn type_lookup_error_message() {
        let err = Error::RelatedTypeNotFound {
            model:   "User".to_string(),
            field:   "address".to_string(),
            related: "Address".to_string()
        };
        assert!(err.to_string().starts_with("related type 'Address'"));
    }

    #[test]
    fn json_errors_convert() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Datamodel(_)));
    }
}
