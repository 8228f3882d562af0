/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Products and the categories that group them.

use recommendation::{ItemSource, RankedItem};
use serde::Serialize;

use crate::{CatalogError, Result};

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// A product listed in a [`Category`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: u64,
    name: String,
    price: f64,
    description: String,
    rating: f64,
}

impl Product {
    /// Create a product, validating its price and rating.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidPrice`] if `price` is negative or not
    /// finite, and [`CatalogError::InvalidRating`] if `rating` is not a
    /// finite number within `0..=5`.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
        rating: f64,
    ) -> Result<Self> {
        if !price.is_finite() || price < 0.0 {
            return Err(CatalogError::InvalidPrice(price));
        }
        if !(0.0..=MAX_RATING).contains(&rating) {
            return Err(CatalogError::InvalidRating(rating));
        }
        Ok(Self {
            id,
            name: name.into(),
            price,
            description: description.into(),
            rating,
        })
    }

    pub const fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn price(&self) -> f64 {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn rating(&self) -> f64 {
        self.rating
    }
}

impl RankedItem for Product {
    fn rating(&self) -> f64 {
        self.rating
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A named group of products. Categories are the payloads of the catalog tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    name: String,
    description: String,
    products: Vec<Product>,
}

impl Category {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            products: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Products in registration order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Append a product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateProduct`] if a product with the same
    /// id is already in this category.
    pub fn add_product(&mut self, product: Product) -> Result<()> {
        if self.product(product.id).is_some() {
            return Err(CatalogError::DuplicateProduct {
                category: self.name.clone(),
                id: product.id,
            });
        }
        self.products.push(product);
        Ok(())
    }

    /// Remove the product with the given id, keeping the order of the rest.
    pub fn remove_product(&mut self, id: u64) -> Option<Product> {
        let pos = self.products.iter().position(|product| product.id == id)?;
        Some(self.products.remove(pos))
    }
}

impl ItemSource for Category {
    type Item = Product;

    fn name(&self) -> &str {
        &self.name
    }

    fn items(&self) -> Option<&[Product]> {
        Some(&self.products)
    }
}
