//
//  neon-api
//  api/v2/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Neon API v2 Resources
//!
//! Typed models and [`NeonClient`](crate::NeonClient) methods for each
//! resource family of the Neon management API. Every method issues exactly
//! one request; mutating calls return the operations the control plane
//! scheduled for them.

pub mod api_keys;
pub mod branches;
pub mod consumption;
pub mod databases;
pub mod endpoints;
pub mod operations;
pub mod permissions;
pub mod projects;
pub mod roles;
pub mod users;

pub use api_keys::*;
pub use branches::*;
pub use consumption::*;
pub use databases::*;
pub use endpoints::*;
pub use operations::*;
pub use permissions::*;
pub use projects::*;
pub use roles::*;
pub use users::*;
