/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for parsing the catalog configuration.

use catalog::{Catalog, CatalogConfig, CatalogError, SortOrder};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_parse_full_config() {
    let config =
        CatalogConfig::from_json_str(r#"{ "default_sort": "price_asc", "default_limit": 5 }"#)
            .unwrap();

    assert_eq!(
        config,
        CatalogConfig {
            default_sort: Some(SortOrder::PriceAsc),
            default_limit: Some(5),
        }
    );
}

#[rstest]
#[case::empty_object("{}")]
#[case::explicit_nulls(r#"{ "default_sort": null, "default_limit": null }"#)]
fn test_missing_fields_use_defaults(#[case] json: &str) {
    assert_eq!(
        CatalogConfig::from_json_str(json).unwrap(),
        CatalogConfig::default()
    );
}

#[rstest]
#[case::unknown_field(r#"{ "default_sort": "rating", "max_depth": 3 }"#)]
#[case::unknown_sort(r#"{ "default_sort": "popularity" }"#)]
#[case::negative_limit(r#"{ "default_limit": -1 }"#)]
#[case::not_json("default_sort = rating")]
fn test_invalid_config_is_rejected(#[case] json: &str) {
    let err = CatalogConfig::from_json_str(json).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidConfig(_)));
    assert!(err.to_string().starts_with("invalid catalog configuration: "));
}

#[test]
fn test_catalog_uses_given_config() {
    let config = CatalogConfig {
        default_sort: Some(SortOrder::NameAsc),
        default_limit: None,
    };
    let catalog = Catalog::with_config(config);

    assert_eq!(*catalog.config(), config);
    assert_eq!(*Catalog::new().config(), CatalogConfig::default());
}
