/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Ordering and truncation options for [`recommend_with`](crate::recommend_with).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::RankedItem;

/// Criterion used to order recommended items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortOrder {
    /// Highest rating first.
    #[cfg_attr(feature = "serde", serde(rename = "rating"))]
    RatingDesc,
    /// Cheapest first.
    #[cfg_attr(feature = "serde", serde(rename = "price_asc"))]
    PriceAsc,
    /// Most expensive first.
    #[cfg_attr(feature = "serde", serde(rename = "price_desc"))]
    PriceDesc,
    /// Lexicographic by item name.
    #[cfg_attr(feature = "serde", serde(rename = "name"))]
    NameAsc,
}

impl SortOrder {
    /// Every sort order, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::RatingDesc,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::NameAsc,
    ];

    /// The string this order parses from.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RatingDesc => "rating",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::NameAsc => "name",
        }
    }

    /// Compare two items under this order.
    ///
    /// Ratings and prices are compared with [`f64::total_cmp`], so NaN
    /// values sort deterministically instead of poisoning the sort.
    pub fn compare<I: RankedItem + ?Sized>(self, a: &I, b: &I) -> Ordering {
        match self {
            Self::RatingDesc => b.rating().total_cmp(&a.rating()),
            Self::PriceAsc => a.price().total_cmp(&b.price()),
            Self::PriceDesc => b.price().total_cmp(&a.price()),
            Self::NameAsc => a.name().cmp(b.name()),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`SortOrder`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order `{value}` (expected rating, price_asc, price_desc or name)")]
pub struct ParseSortOrderError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| ParseSortOrderError {
                value: s.to_owned(),
            })
    }
}

/// Options for [`recommend_with`](crate::recommend_with).
///
/// The default keeps traversal order and returns every item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecommendOptions {
    /// Ordering applied to the collected items. `None` keeps key order.
    pub sort: Option<SortOrder>,
    /// Maximum number of items returned. `None` means no limit.
    pub limit: Option<usize>,
}

impl RecommendOptions {
    pub const fn new() -> Self {
        Self {
            sort: None,
            limit: None,
        }
    }

    pub const fn sorted_by(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    pub const fn limited_to(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
