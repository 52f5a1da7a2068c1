// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeDays {
    Seven,
    Thirty,
    Ninety,
}

impl RangeDays {
    pub const ALL: [Self; 3] = [Self::Seven, Self::Thirty, Self::Ninety];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seven => "7",
            Self::Thirty => "30",
            Self::Ninety => "90",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "7" => Some(Self::Seven),
            "30" => Some(Self::Thirty),
            "90" => Some(Self::Ninety),
            _ => None,
        }
    }

    pub const fn chip_label(self) -> &'static str {
        match self {
            Self::Seven => "Last 7 days",
            Self::Thirty => "Last 30 days",
            Self::Ninety => "Last 90 days",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    Revenue,
    ActiveUsers,
    Churn,
}

impl Metric {
    pub const ALL: [Self; 3] = [Self::Revenue, Self::ActiveUsers, Self::Churn];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::ActiveUsers => "active",
            Self::Churn => "churn",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "revenue" => Some(Self::Revenue),
            "active" => Some(Self::ActiveUsers),
            "churn" => Some(Self::Churn),
            _ => None,
        }
    }

    pub const fn legend_label(self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::ActiveUsers => "Active users",
            Self::Churn => "Churn",
        }
    }
}

pub fn chip_label_for(raw: &str) -> &'static str {
    RangeDays::parse(raw)
        .unwrap_or(RangeDays::Thirty)
        .chip_label()
}

pub fn legend_label_for(raw: &str) -> &'static str {
    Metric::parse(raw).unwrap_or(Metric::Revenue).legend_label()
}
