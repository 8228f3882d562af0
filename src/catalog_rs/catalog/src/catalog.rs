/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use avl_tree::{AvlTree, TreeSnapshot};
use recommendation::{Recommendation, RecommendOptions, recommend_with};
use tracing::{debug, info, warn};

use crate::{CatalogConfig, CatalogError, Category, Product, Result};

/// Product categories indexed by name.
///
/// Categories are stored in an [`AvlTree`] keyed by their name. Recommending
/// from a category returns the products of that category together with the
/// products of every category below it in the tree.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tree: AvlTree<String, Category>,
    config: CatalogConfig,
}

impl Catalog {
    /// Create an empty catalog with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty catalog with the given configuration.
    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            tree: AvlTree::new(),
            config,
        }
    }

    pub const fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub const fn set_config(&mut self, config: CatalogConfig) {
        self.config = config;
    }

    /// The index backing this catalog.
    pub const fn tree(&self) -> &AvlTree<String, Category> {
        &self.tree
    }

    /// Number of registered categories.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        let category = self.tree.find(name);
        debug!(category = name, found = category.is_some(), "category lookup");
        category
    }

    /// Categories in ascending name order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.tree.values()
    }

    /// Register a new, empty category.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CategoryExists`] if a category with this name
    /// is already registered. The existing category is left untouched.
    pub fn register_category(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<()> {
        let name = name.into();
        if self.tree.contains_key(name.as_str()) {
            warn!(category = %name, "category already exists");
            return Err(CatalogError::CategoryExists(name));
        }

        let category = Category::new(name.clone(), description);
        info!(category = %name, "registered category");
        self.tree.insert(name, category);
        Ok(())
    }

    /// Remove a category and all of its products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CategoryNotFound`] if no category has this name.
    pub fn remove_category(&mut self, name: &str) -> Result<Category> {
        match self.tree.delete(name) {
            Some(category) => {
                info!(
                    category = name,
                    products = category.products().len(),
                    "removed category"
                );
                Ok(category)
            }
            None => {
                warn!(category = name, "cannot remove unknown category");
                Err(CatalogError::CategoryNotFound(name.to_owned()))
            }
        }
    }

    /// Add a product to an existing category.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CategoryNotFound`] if the category does not
    /// exist and [`CatalogError::DuplicateProduct`] if it already holds a
    /// product with the same id.
    pub fn register_product(&mut self, category: &str, product: Product) -> Result<()> {
        let Some(target) = self.tree.find_mut(category) else {
            warn!(category, product = product.id(), "cannot add product to unknown category");
            return Err(CatalogError::CategoryNotFound(category.to_owned()));
        };

        let id = product.id();
        if let Err(err) = target.add_product(product) {
            warn!(category, product = id, "product already exists");
            return Err(err);
        }
        info!(category, product = id, "registered product");
        Ok(())
    }

    /// Remove a product from a category.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CategoryNotFound`] if the category does not
    /// exist and [`CatalogError::ProductNotFound`] if it holds no product
    /// with this id.
    pub fn remove_product(&mut self, category: &str, id: u64) -> Result<Product> {
        let Some(target) = self.tree.find_mut(category) else {
            warn!(category, product = id, "cannot remove product from unknown category");
            return Err(CatalogError::CategoryNotFound(category.to_owned()));
        };

        match target.remove_product(id) {
            Some(product) => {
                info!(category, product = id, "removed product");
                Ok(product)
            }
            None => {
                warn!(category, product = id, "cannot remove unknown product");
                Err(CatalogError::ProductNotFound {
                    category: category.to_owned(),
                    id,
                })
            }
        }
    }

    /// Recommend products for a category using the configured defaults.
    ///
    /// See [`recommend_products_with`](Self::recommend_products_with).
    pub fn recommend_products(&self, category: &str) -> Vec<Recommendation<'_, Product>> {
        self.recommend_products_with(category, &self.config.recommend_options())
    }

    /// Recommend products from `category` and every category below it in
    /// the index.
    ///
    /// Returns an empty vector for an unknown category.
    pub fn recommend_products_with(
        &self,
        category: &str,
        opts: &RecommendOptions,
    ) -> Vec<Recommendation<'_, Product>> {
        let recommendations = recommend_with(&self.tree, category, opts);
        debug!(
            category,
            sort = ?opts.sort,
            limit = ?opts.limit,
            results = recommendations.len(),
            "recommended products"
        );
        recommendations
    }

    /// Capture the structure of the index for serialization.
    ///
    /// See [`TreeSnapshot`] for the JSON layout.
    pub fn snapshot(&self) -> TreeSnapshot<'_, String, Category> {
        self.tree.snapshot()
    }
}
