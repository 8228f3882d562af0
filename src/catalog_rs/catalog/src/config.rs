/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Catalog configuration.
//!
//! The configuration is read from JSON. Every field is optional and unknown
//! fields are rejected:
//!
//! ```json
//! { "default_sort": "rating", "default_limit": 10 }
//! ```

use recommendation::{RecommendOptions, SortOrder};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Defaults applied by [`Catalog::recommend_products`](crate::Catalog::recommend_products).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Ordering of recommended products. `None` keeps category key order.
    pub default_sort: Option<SortOrder>,
    /// Maximum number of recommended products. `None` means no limit.
    pub default_limit: Option<usize>,
}

impl CatalogConfig {
    /// Parse a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidConfig`](crate::CatalogError::InvalidConfig)
    /// if `json` is malformed, has a field of the wrong type, names an
    /// unknown sort order or contains an unknown field.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The recommendation options these defaults translate to.
    pub const fn recommend_options(&self) -> RecommendOptions {
        RecommendOptions {
            sort: self.default_sort,
            limit: self.default_limit,
        }
    }
}
