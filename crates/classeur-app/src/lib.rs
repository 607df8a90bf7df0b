// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod actions;
pub mod ids;
pub mod model;
pub mod runtime;
pub mod screens;

pub use actions::*;
pub use ids::*;
pub use model::*;
pub use runtime::*;
pub use screens::*;
