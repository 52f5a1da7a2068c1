// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortIndicator {
    Neutral,
    Descending,
    Ascending,
}

impl SortIndicator {
    pub const fn advanced(self) -> Self {
        match self {
            Self::Neutral => Self::Descending,
            Self::Descending => Self::Ascending,
            Self::Ascending => Self::Neutral,
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Neutral => "↕",
            Self::Descending => "↓",
            Self::Ascending => "↑",
        }
    }
}

// Visual affordance only; no rows are ever reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortIndicators {
    columns: Vec<SortIndicator>,
    active: Option<usize>,
}

impl SortIndicators {
    pub fn new(columns: usize) -> Self {
        Self {
            columns: vec![SortIndicator::Neutral; columns],
            active: None,
        }
    }

    pub fn activate(&mut self, column: usize) -> Option<SortIndicator> {
        let indicator = self.columns.get_mut(column)?;
        *indicator = indicator.advanced();
        self.active = Some(column);
        Some(*indicator)
    }

    pub fn indicator(&self, column: usize) -> SortIndicator {
        self.columns
            .get(column)
            .copied()
            .unwrap_or(SortIndicator::Neutral)
    }

    pub fn is_active(&self, column: usize) -> bool {
        self.active == Some(column)
    }

    pub fn columns(&self) -> usize {
        self.columns.len()
    }
}
