/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Error types for catalog operations.

/// A specialized Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur when updating or configuring a [`Catalog`](crate::Catalog).
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A category with this name is already registered.
    #[error("category `{0}` already exists")]
    CategoryExists(String),

    /// No category with this name is registered.
    #[error("category `{0}` not found")]
    CategoryNotFound(String),

    /// The category already holds a product with this id.
    #[error("product {id} already exists in category `{category}`")]
    DuplicateProduct {
        /// The category the product was registered into.
        category: String,
        /// The conflicting product id.
        id: u64,
    },

    /// The category holds no product with this id.
    #[error("product {id} not found in category `{category}`")]
    ProductNotFound {
        /// The category that was searched.
        category: String,
        /// The requested product id.
        id: u64,
    },

    /// A product price was negative or not a finite number.
    #[error("invalid price {0}: must be a finite, non-negative number")]
    InvalidPrice(f64),

    /// A product rating was outside `0..=5` or not a finite number.
    #[error("invalid rating {0}: must be between 0 and 5")]
    InvalidRating(f64),

    /// The catalog configuration could not be parsed.
    #[error("invalid catalog configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
