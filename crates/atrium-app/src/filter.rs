// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeMap;

pub const FIELD_WILDCARD: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChoice {
    Any,
    Tag(String),
}

impl FieldChoice {
    pub fn parse(raw: &str) -> Self {
        if raw == FIELD_WILDCARD {
            Self::Any
        } else {
            Self::Tag(raw.to_owned())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Any => FIELD_WILDCARD,
            Self::Tag(tag) => tag,
        }
    }

    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    search_text: String,
    attributes: BTreeMap<String, String>,
}

impl TableRow {
    pub fn new(search_text: &str) -> Self {
        Self {
            search_text: search_text.to_lowercase(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, field: &str, tag: &str) -> Self {
        self.attributes.insert(field.to_owned(), tag.to_owned());
        self
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    // A missing attribute reads as empty, so it never matches a tag filter.
    pub fn attribute(&self, field: &str) -> &str {
        self.attributes
            .get(field)
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub query: String,
    fields: BTreeMap<String, FieldChoice>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: &str) -> Self {
        self.fields.insert(field.to_owned(), FieldChoice::Any);
        self
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_owned();
    }

    pub fn set_field(&mut self, field: &str, choice: FieldChoice) {
        self.fields.insert(field.to_owned(), choice);
    }

    pub fn field(&self, field: &str) -> FieldChoice {
        self.fields
            .get(field)
            .cloned()
            .unwrap_or(FieldChoice::Any)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn is_visible(&self, row: &TableRow) -> bool {
        let query = self.query.trim().to_lowercase();
        if !query.is_empty() && !row.search_text().contains(&query) {
            return false;
        }

        self.fields.iter().all(|(field, choice)| match choice {
            FieldChoice::Any => true,
            FieldChoice::Tag(tag) => row.attribute(field) == tag,
        })
    }

    pub fn visible_indices(&self, rows: &[TableRow]) -> Vec<usize> {
        rows.iter()
            .enumerate()
            .filter(|(_, row)| self.is_visible(row))
            .map(|(index, _)| index)
            .collect()
    }
}
