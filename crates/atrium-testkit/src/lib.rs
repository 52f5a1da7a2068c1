// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use atrium_app::{InvoiceStatus, PlanKind, UserStatus};
use std::path::PathBuf;
use time::{Date, Duration, Month};

const FIRST_NAMES: [&str; 16] = [
    "Avery", "Jordan", "Taylor", "Riley", "Morgan", "Casey", "Alex", "Quinn", "Parker", "Drew",
    "Kai", "Elliot", "Robin", "Cameron", "Hayden", "Rowan",
];
const LAST_NAMES: [&str; 18] = [
    "Walker", "Martin", "Hill", "Evans", "Lopez", "Gray", "Ward", "Young", "Diaz", "Reed",
    "Campbell", "Turner", "Flores", "Bennett", "Price", "Morris", "Foster", "Brooks",
];
const EMAIL_DOMAINS: [&str; 5] = [
    "example.com",
    "mailbox.dev",
    "teamhub.io",
    "northmail.net",
    "workspace.org",
];
const COMPANY_STEMS: [&str; 12] = [
    "Nimbus", "Vertex", "Halcyon", "Bluepine", "Orchard", "Quartz", "Lantern", "Summit", "Harbor",
    "Juniper", "Cobalt", "Meridian",
];
const COMPANY_SUFFIXES: [&str; 6] = ["Labs", "Systems", "Partners", "Group", "Works", "Media"];

const REFERENCE_YEAR: i32 = 2026;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub plan: PlanKind,
    pub signed_up: Date,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    pub number: String,
    pub customer: String,
    pub amount_cents: i64,
    pub issued_on: Date,
    pub status: InvoiceStatus,
}

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryFaker {
    rng: DeterministicRng,
    users: u32,
    invoices: u32,
}

impl DirectoryFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            users: 0,
            invoices: 0,
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    pub fn user(&mut self) -> User {
        self.users += 1;
        let first = self.pick(&FIRST_NAMES);
        let last = self.pick(&LAST_NAMES);
        let domain = self.pick(&EMAIL_DOMAINS);
        let status = self.pick(&UserStatus::ALL);
        let plan = self.pick(&PlanKind::ALL);

        User {
            name: format!("{first} {last}"),
            // The counter keeps emails unique across repeated name picks.
            email: format!(
                "{}.{}{}@{domain}",
                first.to_ascii_lowercase(),
                last.to_ascii_lowercase(),
                self.users,
            ),
            status,
            plan,
            signed_up: self.date_in_reference_year(),
        }
    }

    pub fn user_with(&mut self, status: UserStatus, plan: PlanKind) -> User {
        let mut user = self.user();
        user.status = status;
        user.plan = plan;
        user
    }

    pub fn invoice(&mut self) -> Invoice {
        self.invoices += 1;
        let stem = self.pick(&COMPANY_STEMS);
        let suffix = self.pick(&COMPANY_SUFFIXES);
        let status = self.pick(&InvoiceStatus::ALL);

        Invoice {
            number: format!("INV-{:04}", 1000 + self.invoices),
            customer: format!("{stem} {suffix}"),
            amount_cents: (self.int_n(9_500) as i64 + 500) * 100,
            issued_on: self.date_in_reference_year(),
            status,
        }
    }

    pub fn invoice_with(&mut self, status: InvoiceStatus) -> Invoice {
        let mut invoice = self.invoice();
        invoice.status = status;
        invoice
    }

    fn pick<T: Copy>(&mut self, options: &[T]) -> T {
        options[self.rng.int_n(options.len())]
    }

    fn date_in_reference_year(&mut self) -> Date {
        let start = Date::from_calendar_date(REFERENCE_YEAR, Month::January, 1)
            .expect("valid calendar date");
        start + Duration::days(self.rng.int_n(365) as i64)
    }
}

pub fn temp_db_path() -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let db_path = dir.path().join("atrium.db");
    Ok((dir, db_path))
}

pub fn fixture_date() -> &'static str {
    "2026-02-19"
}
