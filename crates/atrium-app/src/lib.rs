// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod analytics;
pub mod filter;
pub mod flags;
pub mod ids;
pub mod layout;
pub mod model;
pub mod nav;
pub mod sort;
pub mod viewport;

pub use analytics::*;
pub use filter::*;
pub use flags::*;
pub use ids::*;
pub use layout::*;
pub use model::*;
pub use nav::*;
pub use sort::*;
pub use viewport::*;
