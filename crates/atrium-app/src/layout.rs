// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::flags::{NavDrawer, PersistedFlags, SidebarMode, Theme};
use crate::viewport::ViewportClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutState {
    pub theme: Theme,
    pub theme_chosen: bool,
    pub sidebar: SidebarMode,
    pub nav: NavDrawer,
    pub viewport: ViewportClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutCommand {
    ToggleChrome,
    ToggleTheme,
    AmbientThemeChanged(Theme),
    ViewportChanged(ViewportClass),
    CloseNav,
    NavActivated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutEvent {
    ThemeChanged { theme: Theme, persist: bool },
    SidebarChanged { sidebar: SidebarMode, persist: bool },
    NavChanged { nav: NavDrawer, persist: bool },
}

impl LayoutState {
    pub fn init(persisted: PersistedFlags, viewport: ViewportClass, ambient: Theme) -> Self {
        let mut nav = persisted.nav.unwrap_or(NavDrawer::Closed);
        // Compact sessions never resume with an open drawer, whatever was stored.
        if viewport.is_compact() {
            nav = NavDrawer::Closed;
        }

        Self {
            theme: persisted.theme.unwrap_or(ambient),
            theme_chosen: persisted.theme.is_some(),
            sidebar: persisted.sidebar.unwrap_or(SidebarMode::Expanded),
            nav,
            viewport,
        }
    }

    pub fn dispatch(&mut self, command: LayoutCommand) -> Vec<LayoutEvent> {
        match command {
            LayoutCommand::ToggleChrome => {
                if self.viewport.is_compact() {
                    self.set_nav(self.nav.toggled(), true)
                } else {
                    self.set_sidebar(self.sidebar.toggled(), true)
                }
            }
            LayoutCommand::ToggleTheme => {
                self.theme = self.theme.toggled();
                self.theme_chosen = true;
                vec![LayoutEvent::ThemeChanged {
                    theme: self.theme,
                    persist: true,
                }]
            }
            LayoutCommand::AmbientThemeChanged(ambient) => {
                // An explicit choice overrides the ambient hint until cleared.
                if self.theme_chosen || self.theme == ambient {
                    return Vec::new();
                }
                self.theme = ambient;
                vec![LayoutEvent::ThemeChanged {
                    theme: ambient,
                    persist: false,
                }]
            }
            LayoutCommand::ViewportChanged(viewport) => {
                self.viewport = viewport;
                if !viewport.is_compact() {
                    return Vec::new();
                }

                let mut events = self.set_nav(NavDrawer::Closed, true);
                // A collapsed sidebar is desktop-only state; expand the live
                // layout without touching the stored preference.
                if self.sidebar == SidebarMode::Collapsed {
                    self.sidebar = SidebarMode::Expanded;
                    events.push(LayoutEvent::SidebarChanged {
                        sidebar: SidebarMode::Expanded,
                        persist: false,
                    });
                }
                events
            }
            LayoutCommand::CloseNav => self.set_nav(NavDrawer::Closed, true),
            LayoutCommand::NavActivated => {
                if self.viewport.is_compact() {
                    self.set_nav(NavDrawer::Closed, true)
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn set_nav(&mut self, nav: NavDrawer, persist: bool) -> Vec<LayoutEvent> {
        if self.nav == nav {
            return Vec::new();
        }
        self.nav = nav;
        vec![LayoutEvent::NavChanged { nav, persist }]
    }

    fn set_sidebar(&mut self, sidebar: SidebarMode, persist: bool) -> Vec<LayoutEvent> {
        if self.sidebar == sidebar {
            return Vec::new();
        }
        self.sidebar = sidebar;
        vec![LayoutEvent::SidebarChanged { sidebar, persist }]
    }
}
