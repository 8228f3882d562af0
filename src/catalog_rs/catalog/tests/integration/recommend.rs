/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for product recommendations through the catalog.

use catalog::{Catalog, CatalogConfig, RecommendOptions, SortOrder};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::helpers::{product_names, sample_catalog};

#[test]
fn test_recommend_from_root_category() {
    let catalog = sample_catalog();

    let recommendations = catalog.recommend_products("Livros");

    assert_eq!(
        product_names(&recommendations),
        ["Cubo", "Fone", "Bola", "Duna", "Neuromancer", "Camiseta"]
    );
}

#[test]
fn test_recommend_includes_category_names() {
    let catalog = sample_catalog();

    let categories: Vec<&str> = catalog
        .recommend_products("Eletronicos")
        .iter()
        .map(|r| r.category)
        .collect();

    assert_eq!(categories, ["Brinquedos", "Eletronicos", "Esportes"]);
}

#[test]
fn test_recommend_leaf_category() {
    let catalog = sample_catalog();
    assert_eq!(product_names(&catalog.recommend_products("Roupas")), ["Camiseta"]);
}

#[test]
fn test_recommend_unknown_category() {
    let catalog = sample_catalog();
    assert!(catalog.recommend_products("Moveis").is_empty());
    assert!(Catalog::new().recommend_products("Livros").is_empty());
}

#[test]
fn test_recommend_category_without_products() {
    let mut catalog = Catalog::new();
    catalog.register_category("Vazia", "").unwrap();
    assert!(catalog.recommend_products("Vazia").is_empty());
}

#[rstest]
// Fone and Bola tie on rating and keep key order.
#[case::rating(SortOrder::RatingDesc, &["Duna", "Fone", "Bola"])]
#[case::price_asc(SortOrder::PriceAsc, &["Cubo", "Camiseta", "Neuromancer"])]
#[case::price_desc(SortOrder::PriceDesc, &["Fone", "Bola", "Duna"])]
#[case::name(SortOrder::NameAsc, &["Bola", "Camiseta", "Cubo"])]
fn test_recommend_with_configured_defaults(#[case] sort: SortOrder, #[case] expected: &[&str]) {
    let config = CatalogConfig {
        default_sort: Some(sort),
        default_limit: Some(3),
    };
    let mut catalog = sample_catalog();
    catalog.set_config(config);

    assert_eq!(product_names(&catalog.recommend_products("Livros")), expected);
}

#[test]
fn test_explicit_options_override_config() {
    let mut catalog = sample_catalog();
    catalog.set_config(CatalogConfig {
        default_sort: Some(SortOrder::PriceAsc),
        default_limit: Some(1),
    });

    let recommendations =
        catalog.recommend_products_with("Eletronicos", &RecommendOptions::default());

    assert_eq!(product_names(&recommendations), ["Cubo", "Fone", "Bola"]);
}

#[test]
fn test_recommend_reflects_removed_products() {
    let mut catalog = sample_catalog();
    catalog.remove_product("Esportes", 5).unwrap();

    assert_eq!(
        product_names(&catalog.recommend_products("Eletronicos")),
        ["Cubo", "Fone"]
    );
}
