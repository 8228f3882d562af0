/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

/// A tree payload that can contribute items to a recommendation.
pub trait ItemSource {
    /// The kind of item this payload holds.
    type Item;

    /// Display name attached to every item this payload contributes.
    fn name(&self) -> &str;

    /// The items held by this payload.
    ///
    /// `None` means the payload carries no item collection at all. It is
    /// skipped during aggregation, exactly like an empty collection.
    fn items(&self) -> Option<&[Self::Item]>;
}

/// An item that can be ordered by [`SortOrder`](crate::SortOrder).
pub trait RankedItem {
    fn rating(&self) -> f64;

    fn price(&self) -> f64;

    fn name(&self) -> &str;
}
