//
//  neon-api
//  tests/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

#![allow(dead_code)]

use mockito::ServerGuard;
use neon_api::NeonClient;
use tracing_subscriber::EnvFilter;

pub const TEST_KEY: &str = "napi_test_key";

/// Installs a subscriber controlled by `NEON_API_LOG`, e.g.
/// `NEON_API_LOG=neon_api=debug cargo test`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env("NEON_API_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// A client pointed at the mock server's `/api/v2/` root.
pub fn client_for(server: &ServerGuard) -> NeonClient {
    init_logging();
    NeonClient::builder()
        .api_key(TEST_KEY)
        .base_url(format!("{}/api/v2/", server.url()))
        .build()
        .expect("client builds")
}

pub fn bearer() -> String {
    format!("Bearer {}", TEST_KEY)
}
