// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod ids;
pub mod model;
pub mod projection;
pub mod reconcile;
pub mod state;
pub mod store;

pub use ids::*;
pub use model::*;
pub use projection::*;
pub use reconcile::*;
pub use state::*;
pub use store::*;
