// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod actions;
pub mod fields;
pub mod filter;
pub mod page;
pub mod select;
pub mod sort;
pub mod state;
pub mod view;

pub use actions::*;
pub use fields::*;
pub use filter::*;
pub use page::*;
pub use select::*;
pub use sort::*;
pub use state::*;
pub use view::*;
