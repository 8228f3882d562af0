/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! A product catalog indexed by category name.
//!
//! Categories live in an [`avl_tree::AvlTree`] keyed by name, each holding a
//! list of [`Product`]s. Recommending from a category collects the products
//! of that category and of every category in its subtree, optionally sorted
//! and capped according to the [`CatalogConfig`] defaults.
//!
//! # Example
//!
//! ```
//! use catalog::{Catalog, Product};
//!
//! let mut catalog = Catalog::new();
//! catalog.register_category("Eletronicos", "Aparelhos eletronicos")?;
//! catalog.register_category("Livros", "Livros de todos os generos")?;
//! catalog.register_category("Roupas", "Vestuario em geral")?;
//!
//! catalog.register_product("Livros", Product::new(1, "Duna", 59.9, "Ficcao", 4.9)?)?;
//! catalog.register_product("Roupas", Product::new(2, "Camiseta", 39.9, "Algodao", 4.2)?)?;
//!
//! // "Livros" is the root of the index, so its subtree covers every category.
//! let names: Vec<&str> = catalog
//!     .recommend_products("Livros")
//!     .iter()
//!     .map(|r| r.item.name())
//!     .collect();
//! assert_eq!(names, ["Duna", "Camiseta"]);
//! # Ok::<(), catalog::CatalogError>(())
//! ```

mod catalog;
mod config;
mod error;
pub mod logging;
mod model;

pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use model::{Category, MAX_RATING, Product};
pub use recommendation::{Recommendation, RecommendOptions, SortOrder};
