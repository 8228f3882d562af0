/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for installing the global subscriber.

use catalog::{Catalog, logging};

#[test]
fn test_try_init_installs_subscriber_once() {
    logging::try_init().expect("no subscriber installed yet in this test binary");
    assert!(logging::try_init().is_err());

    // Events from the catalog go through the installed subscriber.
    let mut catalog = Catalog::new();
    catalog.register_category("Livros", "").unwrap();
    assert!(catalog.register_category("Livros", "").is_err());
}
