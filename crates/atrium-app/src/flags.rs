// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    // The header glyph advertises the mode a toggle would switch to.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SidebarMode {
    Expanded,
    Collapsed,
}

impl SidebarMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expanded => "expanded",
            Self::Collapsed => "collapsed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "expanded" => Some(Self::Expanded),
            "collapsed" => Some(Self::Collapsed),
            _ => None,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavDrawer {
    Closed,
    Open,
}

impl NavDrawer {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "closed" => Some(Self::Closed),
            "open" => Some(Self::Open),
            _ => None,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagKey {
    Theme,
    Sidebar,
    Nav,
}

impl FlagKey {
    pub const ALL: [Self; 3] = [Self::Theme, Self::Sidebar, Self::Nav];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Theme => "ui.theme",
            Self::Sidebar => "ui.sidebar",
            Self::Nav => "ui.nav",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ui.theme" => Some(Self::Theme),
            "ui.sidebar" => Some(Self::Sidebar),
            "ui.nav" => Some(Self::Nav),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::Sidebar => "sidebar",
            Self::Nav => "nav drawer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagValue {
    Theme(Theme),
    Sidebar(SidebarMode),
    Nav(NavDrawer),
}

impl FlagValue {
    pub fn parse_for_key(key: FlagKey, raw: &str) -> Option<Self> {
        match key {
            FlagKey::Theme => Theme::parse(raw).map(Self::Theme),
            FlagKey::Sidebar => SidebarMode::parse(raw).map(Self::Sidebar),
            FlagKey::Nav => NavDrawer::parse(raw).map(Self::Nav),
        }
    }

    pub const fn key(self) -> FlagKey {
        match self {
            Self::Theme(_) => FlagKey::Theme,
            Self::Sidebar(_) => FlagKey::Sidebar,
            Self::Nav(_) => FlagKey::Nav,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Theme(theme) => theme.as_str(),
            Self::Sidebar(sidebar) => sidebar.as_str(),
            Self::Nav(nav) => nav.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersistedFlags {
    pub theme: Option<Theme>,
    pub sidebar: Option<SidebarMode>,
    pub nav: Option<NavDrawer>,
}
