// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use atrium_app::{FlagValue, InvoiceRow, Theme, UserRow};
use atrium_store::Store;

pub struct StoreRuntime<'a> {
    store: &'a Store,
    ambient: Theme,
}

impl<'a> StoreRuntime<'a> {
    pub fn new(store: &'a Store, ambient: Theme) -> Self {
        Self { store, ambient }
    }
}

impl atrium_tui::AppRuntime for StoreRuntime<'_> {
    fn load_users(&mut self) -> Result<Vec<UserRow>> {
        self.store.list_users()
    }

    fn load_invoices(&mut self) -> Result<Vec<InvoiceRow>> {
        self.store.list_invoices()
    }

    fn ambient_theme(&mut self) -> Theme {
        self.ambient
    }

    fn persist_flag(&mut self, value: FlagValue) -> Result<()> {
        self.store.put_flag(value)
    }
}
