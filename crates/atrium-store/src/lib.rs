// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use atrium_app::{
    FlagKey, FlagValue, InvoiceId, InvoiceRow, InvoiceStatus, PersistedFlags, PlanKind, UserId,
    UserRow, UserStatus, format_date,
};
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

pub const APP_NAME: &str = "atrium";

const REQUIRED_SCHEMA: &[(&str, &[&str])] = &[
    ("flags", &["key", "value", "updated_at"]),
    (
        "users",
        &[
            "id",
            "name",
            "email",
            "status",
            "plan",
            "signed_up",
            "created_at",
            "updated_at",
        ],
    ),
    (
        "invoices",
        &[
            "id",
            "number",
            "customer",
            "amount_cents",
            "issued_on",
            "status",
            "created_at",
            "updated_at",
        ],
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RequiredIndex {
    name: &'static str,
    create_sql: &'static str,
}

const REQUIRED_INDEXES: &[RequiredIndex] = &[
    RequiredIndex {
        name: "idx_users_email",
        create_sql: "CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users (email);",
    },
    RequiredIndex {
        name: "idx_users_status",
        create_sql: "CREATE INDEX IF NOT EXISTS idx_users_status ON users (status);",
    },
    RequiredIndex {
        name: "idx_invoices_number",
        create_sql: "CREATE UNIQUE INDEX IF NOT EXISTS idx_invoices_number ON invoices (number);",
    },
    RequiredIndex {
        name: "idx_invoices_status",
        create_sql: "CREATE INDEX IF NOT EXISTS idx_invoices_status ON invoices (status);",
    },
];

const DEMO_USERS: &[(&str, &str, &str, &str, &str)] = &[
    ("Alice Romero", "alice@nimbuslabs.io", "active", "pro", "2026-03-04"),
    ("Bruno Keller", "bruno@keller.dev", "active", "free", "2026-01-22"),
    ("Carmen Ito", "carmen@ito.co", "invited", "pro", "2026-06-11"),
    ("Dmitri Vance", "dmitri@vancetech.com", "active", "enterprise", "2025-11-08"),
    ("Elena Brandt", "elena@brandt.org", "suspended", "free", "2025-09-30"),
    ("Farid Osei", "farid@oseigroup.com", "active", "pro", "2026-02-17"),
    ("Greta Lindqvist", "greta@lindqvist.se", "invited", "free", "2026-07-01"),
    ("Hugo Marchetti", "hugo@marchetti.it", "active", "enterprise", "2025-12-14"),
    ("Ines Duarte", "ines@duarte.pt", "active", "pro", "2026-04-26"),
    ("Jonas Weber", "jonas@weberhaus.de", "suspended", "pro", "2025-10-05"),
    ("Katya Sorokina", "katya@sorokina.net", "active", "free", "2026-05-19"),
    ("Liam Whitfield", "liam@whitfield.co.uk", "invited", "enterprise", "2026-07-28"),
];

const DEMO_INVOICES: &[(&str, &str, i64, &str, &str)] = &[
    ("INV-1001", "Nimbus Labs", 125_000, "2026-06-17", "paid"),
    ("INV-1002", "Vance Technologies", 480_000, "2026-06-20", "paid"),
    ("INV-1003", "Marchetti SRL", 264_500, "2026-06-28", "due"),
    ("INV-1004", "Keller Consulting", 18_900, "2026-07-02", "paid"),
    ("INV-1005", "Duarte & Filhos", 99_000, "2026-07-05", "overdue"),
    ("INV-1006", "Osei Group", 152_750, "2026-07-09", "due"),
    ("INV-1007", "Lindqvist AB", 310_000, "2026-07-15", "due"),
    ("INV-1008", "Weberhaus GmbH", 47_600, "2026-07-21", "overdue"),
    ("INV-1009", "Sorokina Media", 82_340, "2026-07-26", "paid"),
    ("INV-1010", "Whitfield Partners", 205_000, "2026-08-01", "due"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub plan: PlanKind,
    pub signed_up: Date,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInvoice {
    pub number: String,
    pub customer: String,
    pub amount_cents: i64,
    pub issued_on: Date,
    pub status: InvoiceStatus,
}

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let printable = path.to_string_lossy().to_string();
        validate_db_path(&printable)?;
        let conn = Connection::open(path)
            .with_context(|| format!("open database at {}", path.display()))?;
        configure_connection(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("open in-memory database")?;
        configure_connection(&conn)?;
        Ok(Self { conn })
    }

    pub fn raw_connection(&self) -> &Connection {
        &self.conn
    }

    pub fn bootstrap(&self) -> Result<()> {
        if has_user_tables(&self.conn)? {
            validate_schema(&self.conn)?;
        } else {
            self.conn
                .execute_batch(include_str!("sql/schema.sql"))
                .context("create schema")?;
        }

        ensure_required_indexes(&self.conn)?;
        Ok(())
    }

    pub fn seed_demo_data(&self) -> Result<()> {
        for &(name, email, status, plan, signed_up) in DEMO_USERS {
            let status = UserStatus::parse(status)
                .ok_or_else(|| anyhow!("demo user {email} has unknown status {status:?}"))?;
            let plan = PlanKind::parse(plan)
                .ok_or_else(|| anyhow!("demo user {email} has unknown plan {plan:?}"))?;
            self.insert_user(&NewUser {
                name: name.to_owned(),
                email: email.to_owned(),
                status,
                plan,
                signed_up: parse_date(signed_up)?,
            })?;
        }

        for &(number, customer, amount_cents, issued_on, status) in DEMO_INVOICES {
            let status = InvoiceStatus::parse(status)
                .ok_or_else(|| anyhow!("demo invoice {number} has unknown status {status:?}"))?;
            self.insert_invoice(&NewInvoice {
                number: number.to_owned(),
                customer: customer.to_owned(),
                amount_cents,
                issued_on: parse_date(issued_on)?,
                status,
            })?;
        }

        Ok(())
    }

    pub fn insert_user(&self, user: &NewUser) -> Result<UserId> {
        let now = now_rfc3339()?;
        self.conn
            .execute(
                "
                INSERT OR IGNORE INTO users
                  (name, email, status, plan, signed_up, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                ",
                params![
                    user.name,
                    user.email,
                    user.status.as_str(),
                    user.plan.as_str(),
                    format_date(user.signed_up),
                    now,
                    now,
                ],
            )
            .with_context(|| format!("insert user {}", user.email))?;

        let id: i64 = self
            .conn
            .query_row(
                "SELECT id FROM users WHERE email = ?",
                params![user.email],
                |row| row.get(0),
            )
            .with_context(|| format!("read back user {}", user.email))?;
        Ok(UserId::new(id))
    }

    pub fn insert_invoice(&self, invoice: &NewInvoice) -> Result<InvoiceId> {
        let now = now_rfc3339()?;
        self.conn
            .execute(
                "
                INSERT OR IGNORE INTO invoices
                  (number, customer, amount_cents, issued_on, status, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                ",
                params![
                    invoice.number,
                    invoice.customer,
                    invoice.amount_cents,
                    format_date(invoice.issued_on),
                    invoice.status.as_str(),
                    now,
                    now,
                ],
            )
            .with_context(|| format!("insert invoice {}", invoice.number))?;

        let id: i64 = self
            .conn
            .query_row(
                "SELECT id FROM invoices WHERE number = ?",
                params![invoice.number],
                |row| row.get(0),
            )
            .with_context(|| format!("read back invoice {}", invoice.number))?;
        Ok(InvoiceId::new(id))
    }

    pub fn list_users(&self) -> Result<Vec<UserRow>> {
        let mut stmt = self
            .conn
            .prepare(
                "
                SELECT id, name, email, status, plan, signed_up
                FROM users
                ORDER BY name ASC, id ASC
                ",
            )
            .context("prepare users query")?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                ))
            })
            .context("query users")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("collect users")?;

        let mut users = Vec::with_capacity(rows.len());
        for (id, name, email, status, plan, signed_up) in rows {
            let status = UserStatus::parse(&status)
                .ok_or_else(|| anyhow!("user {email} has unknown status {status:?}"))?;
            let plan = PlanKind::parse(&plan)
                .ok_or_else(|| anyhow!("user {email} has unknown plan {plan:?}"))?;
            users.push(UserRow {
                id: UserId::new(id),
                name,
                email,
                status,
                plan,
                signed_up: parse_date(&signed_up)?,
            });
        }
        Ok(users)
    }

    pub fn list_invoices(&self) -> Result<Vec<InvoiceRow>> {
        let mut stmt = self
            .conn
            .prepare(
                "
                SELECT id, number, customer, amount_cents, issued_on, status
                FROM invoices
                ORDER BY issued_on DESC, number ASC
                ",
            )
            .context("prepare invoices query")?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                ))
            })
            .context("query invoices")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("collect invoices")?;

        let mut invoices = Vec::with_capacity(rows.len());
        for (id, number, customer, amount_cents, issued_on, status) in rows {
            let status = InvoiceStatus::parse(&status)
                .ok_or_else(|| anyhow!("invoice {number} has unknown status {status:?}"))?;
            invoices.push(InvoiceRow {
                id: InvoiceId::new(id),
                number,
                customer,
                amount_cents,
                issued_on: parse_date(&issued_on)?,
                status,
            });
        }
        Ok(invoices)
    }

    fn get_flag_raw(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM flags WHERE key = ?",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .with_context(|| format!("read flag {key}"))
    }

    fn put_flag_raw(&self, key: &str, value: &str) -> Result<()> {
        let now = now_rfc3339()?;
        self.conn
            .execute(
                "
                INSERT INTO flags (key, value, updated_at)
                VALUES (?, ?, ?)
                ON CONFLICT(key) DO UPDATE SET
                  value = excluded.value,
                  updated_at = excluded.updated_at
                ",
                params![key, value, now],
            )
            .with_context(|| format!("upsert flag {key}"))?;
        Ok(())
    }

    // A stored value that no longer parses reads as absent, so callers fall
    // back to the documented default instead of failing.
    pub fn get_flag(&self, key: FlagKey) -> Result<Option<FlagValue>> {
        let raw = self.get_flag_raw(key.as_str())?;
        Ok(raw.and_then(|value| FlagValue::parse_for_key(key, &value)))
    }

    pub fn put_flag(&self, value: FlagValue) -> Result<()> {
        self.put_flag_raw(value.key().as_str(), value.as_str())
    }

    pub fn load_layout_flags(&self) -> Result<PersistedFlags> {
        let mut flags = PersistedFlags::default();
        for key in FlagKey::ALL {
            match self.get_flag(key)? {
                Some(FlagValue::Theme(theme)) => flags.theme = Some(theme),
                Some(FlagValue::Sidebar(sidebar)) => flags.sidebar = Some(sidebar),
                Some(FlagValue::Nav(nav)) => flags.nav = Some(nav),
                None => {}
            }
        }
        Ok(flags)
    }
}

pub fn default_db_path() -> Result<PathBuf> {
    if let Some(override_path) = env::var_os("ATRIUM_DB_PATH") {
        return Ok(PathBuf::from(override_path));
    }

    let data_root = dirs::data_local_dir().ok_or_else(|| {
        anyhow!("cannot resolve data directory; set ATRIUM_DB_PATH to a writable database path")
    })?;

    let app_dir = data_root.join(APP_NAME);
    fs::create_dir_all(&app_dir)
        .with_context(|| format!("create data directory {}", app_dir.display()))?;
    Ok(app_dir.join("atrium.db"))
}

pub fn validate_db_path(path: &str) -> Result<()> {
    if path.is_empty() {
        bail!("database path must not be empty");
    }
    if path == ":memory:" {
        return Ok(());
    }

    if let Some(index) = path.find("://")
        && index > 0
    {
        let scheme = &path[..index];
        if scheme.chars().all(char::is_alphabetic) {
            bail!(
                "database path {path:?} looks like a URI ({scheme}://); pass a filesystem path instead"
            );
        }
    }

    if path.starts_with("file:") {
        bail!("database path {path:?} uses file: URI syntax; pass a plain filesystem path");
    }

    if path.contains('?') {
        bail!(
            "database path {path:?} contains '?'; remove query parameters and use a plain file path"
        );
    }

    Ok(())
}

fn has_user_tables(conn: &Connection) -> Result<bool> {
    let count: i64 = conn
        .query_row(
            "
            SELECT COUNT(*)
            FROM sqlite_master
            WHERE type = 'table'
              AND name NOT LIKE 'sqlite_%'
            ",
            [],
            |row| row.get(0),
        )
        .context("count user tables")?;
    Ok(count > 0)
}

fn validate_schema(conn: &Connection) -> Result<()> {
    for (table, required_columns) in REQUIRED_SCHEMA {
        if !table_exists(conn, table)? {
            bail!("table `{table}` is missing; move the database aside and rerun to recreate it");
        }

        let columns = table_columns(conn, table)?;
        let missing = required_columns
            .iter()
            .filter(|column| !columns.contains(**column))
            .copied()
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            bail!(
                "table `{table}` is missing required columns: {}; move the database aside and rerun to recreate it",
                missing.join(", ")
            );
        }
    }
    Ok(())
}

fn ensure_required_indexes(conn: &Connection) -> Result<()> {
    for index in REQUIRED_INDEXES {
        conn.execute_batch(index.create_sql)
            .with_context(|| format!("create index {}", index.name))?;
    }
    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let exists: i64 = conn
        .query_row(
            "
            SELECT EXISTS (
              SELECT 1
              FROM sqlite_master
              WHERE type = 'table' AND name = ?
            )
            ",
            params![table],
            |row| row.get(0),
        )
        .with_context(|| format!("check table existence for {table}"))?;
    Ok(exists == 1)
}

fn table_columns(conn: &Connection, table: &str) -> Result<BTreeSet<String>> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({table})"))
        .with_context(|| format!("inspect columns for {table}"))?;
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .with_context(|| format!("query column info for {table}"))?;

    rows.collect::<rusqlite::Result<BTreeSet<_>>>()
        .with_context(|| format!("collect columns for {table}"))
}

fn configure_connection(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        PRAGMA foreign_keys = ON;
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        ",
    )
    .context("configure sqlite pragmas")
}

fn now_rfc3339() -> Result<String> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .context("format current timestamp")
}

fn parse_date(raw: &str) -> Result<Date> {
    Date::parse(raw, &format_description!("[year]-[month]-[day]"))
        .with_context(|| format!("unsupported date format {raw:?}"))
}
