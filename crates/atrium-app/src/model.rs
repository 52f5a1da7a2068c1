// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;

use crate::filter::TableRow;
use crate::ids::{InvoiceId, UserId};
use crate::nav::NavEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenKind {
    Overview,
    Users,
    Invoices,
    Analytics,
    Settings,
}

impl ScreenKind {
    pub const ALL: [Self; 5] = [
        Self::Overview,
        Self::Users,
        Self::Invoices,
        Self::Analytics,
        Self::Settings,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Users => "users",
            Self::Invoices => "invoices",
            Self::Analytics => "analytics",
            Self::Settings => "settings",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Users => "Users",
            Self::Invoices => "Invoices",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
        }
    }

    pub const fn route(self) -> &'static str {
        match self {
            Self::Overview => "ops/overview",
            Self::Users => "ops/users",
            Self::Invoices => "billing/invoices",
            Self::Analytics => "ops/analytics",
            Self::Settings => "ops/settings",
        }
    }

    pub fn nav_entries() -> Vec<NavEntry> {
        Self::ALL
            .iter()
            .map(|screen| NavEntry::new(screen.title(), screen.route()))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Invited,
    Suspended,
}

impl UserStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Invited, Self::Suspended];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Invited => "invited",
            Self::Suspended => "suspended",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "invited" => Some(Self::Invited),
            "suspended" => Some(Self::Suspended),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanKind {
    Free,
    Pro,
    Enterprise,
}

impl PlanKind {
    pub const ALL: [Self; 3] = [Self::Free, Self::Pro, Self::Enterprise];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "free" => Some(Self::Free),
            "pro" => Some(Self::Pro),
            "enterprise" => Some(Self::Enterprise),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Paid,
    Due,
    Overdue,
}

impl InvoiceStatus {
    pub const ALL: [Self; 3] = [Self::Paid, Self::Due, Self::Overdue];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Due => "due",
            Self::Overdue => "overdue",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "paid" => Some(Self::Paid),
            "due" => Some(Self::Due),
            "overdue" => Some(Self::Overdue),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRow {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub plan: PlanKind,
    pub signed_up: Date,
}

impl UserRow {
    pub fn filter_row(&self) -> TableRow {
        let text = format!(
            "{} {} {} {} {}",
            self.name,
            self.email,
            self.status.as_str(),
            self.plan.as_str(),
            format_date(self.signed_up),
        );
        TableRow::new(&text)
            .with_attribute("status", self.status.as_str())
            .with_attribute("plan", self.plan.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRow {
    pub id: InvoiceId,
    pub number: String,
    pub customer: String,
    pub amount_cents: i64,
    pub issued_on: Date,
    pub status: InvoiceStatus,
}

impl InvoiceRow {
    pub fn filter_row(&self) -> TableRow {
        let text = format!(
            "{} {} {} {} {}",
            self.number,
            self.customer,
            format_cents(self.amount_cents),
            format_date(self.issued_on),
            self.status.as_str(),
        );
        TableRow::new(&text).with_attribute("status", self.status.as_str())
    }
}

pub fn format_cents(cents: i64) -> String {
    let (sign, cents) = normalize_sign(cents);
    let dollars = cents / 100;
    let remainder = cents % 100;
    format!("{sign}${}.{:02}", comma_format(dollars), remainder)
}

pub fn format_date(value: Date) -> String {
    value
        .format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| "1970-01-01".to_owned())
}

fn comma_format(value: i64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let mut chars = digits.chars().collect::<Vec<_>>();
    let mut count = 0usize;
    while let Some(ch) = chars.pop() {
        if count == 3 {
            out.push(',');
            count = 0;
        }
        out.push(ch);
        count += 1;
    }
    out.chars().rev().collect()
}

fn normalize_sign(cents: i64) -> (&'static str, i64) {
    if cents >= 0 {
        return ("", cents);
    }
    if cents == i64::MIN {
        ("-", i64::MAX)
    } else {
        ("-", -cents)
    }
}
