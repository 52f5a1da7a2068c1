// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

pub const DEFAULT_COMPACT_BELOW: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewportClass {
    Desktop,
    Compact,
}

impl ViewportClass {
    // Classification is recomputed from the live width on every use;
    // nothing caches it across events.
    pub const fn classify(width: u16, compact_below: u16) -> Self {
        if width < compact_below {
            Self::Compact
        } else {
            Self::Desktop
        }
    }

    pub const fn is_compact(self) -> bool {
        matches!(self, Self::Compact)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Compact => "compact",
        }
    }
}
