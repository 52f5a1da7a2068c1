// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use atrium_app::{
    FieldChoice, FilterCriteria, FlagKey, FlagValue, InvoiceRow, InvoiceStatus, LayoutCommand,
    LayoutEvent, LayoutState, Metric, NavEntry, PlanKind, RangeDays, ScreenKind, SidebarMode,
    SortIndicators, TableRow, Theme, UserRow, UserStatus, ViewportClass, active_entry,
    format_cents, format_date,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use std::io;
use std::time::Duration;

const SIDEBAR_WIDTH: u16 = 24;
const SIDEBAR_COLLAPSED_WIDTH: u16 = 6;
const DRAWER_WIDTH: u16 = 28;
const OVERVIEW_ROWS: usize = 5;
const SEARCH_CURSOR: &str = "▎";
const ACTIVE_NAV_MARK: &str = "›";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    pub compact_below: u16,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            compact_below: atrium_app::DEFAULT_COMPACT_BELOW,
        }
    }
}

pub trait AppRuntime {
    fn load_users(&mut self) -> Result<Vec<UserRow>>;
    fn load_invoices(&mut self) -> Result<Vec<InvoiceRow>>;
    fn ambient_theme(&mut self) -> Theme;
    fn persist_flag(&mut self, value: FlagValue) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq)]
struct TableScope {
    criteria: FilterCriteria,
    sort: SortIndicators,
    filter_rows: Vec<TableRow>,
    sort_cursor: usize,
}

impl TableScope {
    fn new(criteria: FilterCriteria, columns: usize) -> Self {
        Self {
            criteria,
            sort: SortIndicators::new(columns),
            filter_rows: Vec::new(),
            sort_cursor: 0,
        }
    }

    fn visible_indices(&self) -> Vec<usize> {
        self.criteria.visible_indices(&self.filter_rows)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct AnalyticsUiState {
    range: RangeDays,
    metric: Metric,
}

#[derive(Debug, Clone, PartialEq)]
struct ViewData {
    screen: ScreenKind,
    users: Vec<UserRow>,
    invoices: Vec<InvoiceRow>,
    overview: TableScope,
    users_table: TableScope,
    invoices_table: TableScope,
    analytics: AnalyticsUiState,
    nav_cursor: usize,
    search_focus: bool,
    status_line: Option<String>,
}

impl Default for ViewData {
    fn default() -> Self {
        Self {
            screen: ScreenKind::Overview,
            users: Vec::new(),
            invoices: Vec::new(),
            overview: TableScope::new(FilterCriteria::new(), OVERVIEW_COLUMNS.len()),
            users_table: TableScope::new(
                FilterCriteria::new().with_field("status").with_field("plan"),
                USER_COLUMNS.len(),
            ),
            invoices_table: TableScope::new(
                FilterCriteria::new().with_field("status"),
                INVOICE_COLUMNS.len(),
            ),
            analytics: AnalyticsUiState {
                range: RangeDays::Thirty,
                metric: Metric::Revenue,
            },
            nav_cursor: 0,
            search_focus: false,
            status_line: None,
        }
    }
}

const OVERVIEW_COLUMNS: [&str; 4] = ["invoice", "customer", "amount", "status"];
const USER_COLUMNS: [&str; 5] = ["name", "email", "status", "plan", "signed up"];
const INVOICE_COLUMNS: [&str; 5] = ["invoice", "customer", "amount", "issued", "status"];

pub fn current_viewport(compact_below: u16) -> ViewportClass {
    match terminal::size() {
        Ok((width, _)) => ViewportClass::classify(width, compact_below),
        Err(_) => ViewportClass::Desktop,
    }
}

pub fn run_app<R: AppRuntime>(
    layout: &mut LayoutState,
    runtime: &mut R,
    options: UiOptions,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        event::EnableMouseCapture,
        event::EnableFocusChange,
    )
    .context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view = ViewData::default();
    if let Err(error) = refresh_view_data(runtime, &mut view) {
        view.status_line = Some(format!("load failed: {error}"));
    }

    let mut result = Ok(());
    loop {
        if let Err(error) = terminal.draw(|frame| render(frame, layout, &view)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if !has_event {
            continue;
        }
        match event::read().context("read event")? {
            Event::Key(key) => {
                if handle_key_event(layout, runtime, &mut view, key) {
                    break;
                }
            }
            Event::Resize(width, _) => {
                handle_resize(layout, runtime, &mut view, width, options.compact_below);
            }
            Event::FocusGained => handle_focus_gained(layout, runtime, &mut view),
            Event::Mouse(mouse) => handle_mouse(layout, runtime, &mut view, mouse),
            _ => {}
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(
        io::stdout(),
        event::DisableFocusChange,
        event::DisableMouseCapture,
        terminal::LeaveAlternateScreen,
    )
    .context("leave alternate screen")?;
    result
}

fn refresh_view_data<R: AppRuntime>(runtime: &mut R, view: &mut ViewData) -> Result<()> {
    view.users = runtime.load_users()?;
    view.invoices = runtime.load_invoices()?;
    view.users_table.filter_rows = view.users.iter().map(UserRow::filter_row).collect();
    view.invoices_table.filter_rows = view.invoices.iter().map(InvoiceRow::filter_row).collect();
    view.overview.filter_rows = view
        .invoices
        .iter()
        .take(OVERVIEW_ROWS)
        .map(InvoiceRow::filter_row)
        .collect();
    Ok(())
}

fn dispatch_layout<R: AppRuntime>(
    layout: &mut LayoutState,
    runtime: &mut R,
    view: &mut ViewData,
    command: LayoutCommand,
) {
    let events = layout.dispatch(command);
    for event in events {
        let value = match event {
            LayoutEvent::ThemeChanged {
                theme,
                persist: true,
            } => FlagValue::Theme(theme),
            LayoutEvent::SidebarChanged {
                sidebar,
                persist: true,
            } => FlagValue::Sidebar(sidebar),
            LayoutEvent::NavChanged { nav, persist: true } => FlagValue::Nav(nav),
            _ => continue,
        };
        if let Err(error) = runtime.persist_flag(value) {
            view.status_line = Some(format!("save failed: {error}"));
        }
    }
}

fn handle_resize<R: AppRuntime>(
    layout: &mut LayoutState,
    runtime: &mut R,
    view: &mut ViewData,
    width: u16,
    compact_below: u16,
) {
    let viewport = ViewportClass::classify(width, compact_below);
    dispatch_layout(layout, runtime, view, LayoutCommand::ViewportChanged(viewport));
}

fn handle_focus_gained<R: AppRuntime>(
    layout: &mut LayoutState,
    runtime: &mut R,
    view: &mut ViewData,
) {
    let ambient = runtime.ambient_theme();
    dispatch_layout(
        layout,
        runtime,
        view,
        LayoutCommand::AmbientThemeChanged(ambient),
    );
}

// Pressing the dimmed area beside the drawer closes it, like an overlay.
fn handle_mouse<R: AppRuntime>(
    layout: &mut LayoutState,
    runtime: &mut R,
    view: &mut ViewData,
    mouse: MouseEvent,
) {
    if !matches!(mouse.kind, MouseEventKind::Down(_)) {
        return;
    }
    if layout.viewport.is_compact() && layout.nav.is_open() && mouse.column >= DRAWER_WIDTH {
        dispatch_layout(layout, runtime, view, LayoutCommand::CloseNav);
    }
}

fn handle_key_event<R: AppRuntime>(
    layout: &mut LayoutState,
    runtime: &mut R,
    view: &mut ViewData,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view.search_focus {
        handle_search_key(view, key);
        return false;
    }

    if layout.viewport.is_compact() && layout.nav.is_open() {
        handle_drawer_key(layout, runtime, view, key);
        return false;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('f'), KeyModifiers::NONE) | (KeyCode::Tab, _) => {
            activate_screen(layout, runtime, view, screen_cycle(view.screen, 1));
        }
        (KeyCode::Char('b'), KeyModifiers::NONE) | (KeyCode::BackTab, _) => {
            activate_screen(layout, runtime, view, screen_cycle(view.screen, -1));
        }
        (KeyCode::Char('s'), KeyModifiers::NONE) => {
            dispatch_layout(layout, runtime, view, LayoutCommand::ToggleChrome);
            if layout.viewport.is_compact() && layout.nav.is_open() {
                view.nav_cursor = screen_position(view.screen);
            }
        }
        (KeyCode::Char('t'), KeyModifiers::NONE) => {
            dispatch_layout(layout, runtime, view, LayoutCommand::ToggleTheme);
        }
        (KeyCode::Esc, _) => {
            dispatch_layout(layout, runtime, view, LayoutCommand::CloseNav);
        }
        (KeyCode::Char('/'), KeyModifiers::NONE) => {
            if active_scope(view).is_some() {
                view.search_focus = true;
            }
        }
        (KeyCode::Char('1'), KeyModifiers::NONE) => cycle_screen_field(view, 0),
        (KeyCode::Char('2'), KeyModifiers::NONE) => cycle_screen_field(view, 1),
        (KeyCode::Char('o'), KeyModifiers::NONE) => {
            if let Some(scope) = active_scope_mut(view) {
                scope.sort.activate(scope.sort_cursor);
            }
        }
        (KeyCode::Left, _) => {
            if let Some(scope) = active_scope_mut(view) {
                scope.sort_cursor = scope.sort_cursor.saturating_sub(1);
            }
        }
        (KeyCode::Right, _) => {
            if let Some(scope) = active_scope_mut(view) {
                if scope.sort_cursor + 1 < scope.sort.columns() {
                    scope.sort_cursor += 1;
                }
            }
        }
        (KeyCode::Char('r'), KeyModifiers::NONE) => {
            if view.screen == ScreenKind::Analytics {
                view.analytics.range = cycle_range(view.analytics.range);
            }
        }
        (KeyCode::Char('m'), KeyModifiers::NONE) => {
            if view.screen == ScreenKind::Analytics {
                view.analytics.metric = cycle_metric(view.analytics.metric);
            }
        }
        _ => {}
    }

    false
}

fn handle_search_key(view: &mut ViewData, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            view.search_focus = false;
        }
        KeyCode::Backspace => {
            if let Some(scope) = active_scope_mut(view) {
                let mut query = scope.criteria.query.clone();
                query.pop();
                scope.criteria.set_query(&query);
            }
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(scope) = active_scope_mut(view) {
                let mut query = scope.criteria.query.clone();
                query.push(ch);
                scope.criteria.set_query(&query);
            }
        }
        _ => {}
    }
}

fn handle_drawer_key<R: AppRuntime>(
    layout: &mut LayoutState,
    runtime: &mut R,
    view: &mut ViewData,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc => {
            dispatch_layout(layout, runtime, view, LayoutCommand::CloseNav);
        }
        KeyCode::Char('s') => {
            dispatch_layout(layout, runtime, view, LayoutCommand::ToggleChrome);
        }
        KeyCode::Char('t') => {
            dispatch_layout(layout, runtime, view, LayoutCommand::ToggleTheme);
        }
        KeyCode::Up => {
            view.nav_cursor = view.nav_cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            if view.nav_cursor + 1 < ScreenKind::ALL.len() {
                view.nav_cursor += 1;
            }
        }
        KeyCode::Enter => {
            let screen = ScreenKind::ALL[view.nav_cursor.min(ScreenKind::ALL.len() - 1)];
            activate_screen(layout, runtime, view, screen);
        }
        _ => {}
    }
}

// Choosing a destination counts as nav activation, which closes the drawer
// on compact viewports.
fn activate_screen<R: AppRuntime>(
    layout: &mut LayoutState,
    runtime: &mut R,
    view: &mut ViewData,
    screen: ScreenKind,
) {
    view.screen = screen;
    view.search_focus = false;
    view.nav_cursor = screen_position(screen);
    dispatch_layout(layout, runtime, view, LayoutCommand::NavActivated);
}

fn screen_cycle(screen: ScreenKind, delta: isize) -> ScreenKind {
    let screens = ScreenKind::ALL;
    let current = screen_position(screen) as isize;
    let len = screens.len() as isize;
    let next = (current + delta).rem_euclid(len) as usize;
    screens[next]
}

fn screen_position(screen: ScreenKind) -> usize {
    ScreenKind::ALL
        .iter()
        .position(|candidate| *candidate == screen)
        .unwrap_or(0)
}

fn active_scope(view: &ViewData) -> Option<&TableScope> {
    match view.screen {
        ScreenKind::Overview => Some(&view.overview),
        ScreenKind::Users => Some(&view.users_table),
        ScreenKind::Invoices => Some(&view.invoices_table),
        ScreenKind::Analytics | ScreenKind::Settings => None,
    }
}

fn active_scope_mut(view: &mut ViewData) -> Option<&mut TableScope> {
    match view.screen {
        ScreenKind::Overview => Some(&mut view.overview),
        ScreenKind::Users => Some(&mut view.users_table),
        ScreenKind::Invoices => Some(&mut view.invoices_table),
        ScreenKind::Analytics | ScreenKind::Settings => None,
    }
}

fn screen_fields(screen: ScreenKind) -> &'static [(&'static str, &'static [&'static str])] {
    const USER_FIELDS: [(&str, &[&str]); 2] = [
        ("status", &["active", "invited", "suspended"]),
        ("plan", &["free", "pro", "enterprise"]),
    ];
    const INVOICE_FIELDS: [(&str, &[&str]); 1] = [("status", &["paid", "due", "overdue"])];

    match screen {
        ScreenKind::Users => &USER_FIELDS,
        ScreenKind::Invoices => &INVOICE_FIELDS,
        _ => &[],
    }
}

fn cycle_screen_field(view: &mut ViewData, slot: usize) {
    let fields = screen_fields(view.screen);
    let Some((field, tags)) = fields.get(slot).copied() else {
        return;
    };
    let Some(scope) = active_scope_mut(view) else {
        return;
    };

    let next = cycle_choice(&scope.criteria.field(field), tags);
    scope.criteria.set_field(field, next);
}

// all, then each tag in order, then back to all
fn cycle_choice(current: &FieldChoice, tags: &[&str]) -> FieldChoice {
    match current {
        FieldChoice::Any => match tags.first() {
            Some(first) => FieldChoice::Tag((*first).to_owned()),
            None => FieldChoice::Any,
        },
        FieldChoice::Tag(tag) => {
            let position = tags.iter().position(|candidate| candidate == tag);
            match position {
                Some(index) if index + 1 < tags.len() => {
                    FieldChoice::Tag(tags[index + 1].to_owned())
                }
                _ => FieldChoice::Any,
            }
        }
    }
}

fn cycle_range(range: RangeDays) -> RangeDays {
    let position = RangeDays::ALL
        .iter()
        .position(|candidate| *candidate == range)
        .unwrap_or(0);
    RangeDays::ALL[(position + 1) % RangeDays::ALL.len()]
}

fn cycle_metric(metric: Metric) -> Metric {
    let position = Metric::ALL
        .iter()
        .position(|candidate| *candidate == metric)
        .unwrap_or(0);
    Metric::ALL[(position + 1) % Metric::ALL.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Palette {
    text: Color,
    dim: Color,
    accent: Color,
    status: Color,
}

fn palette_for(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            text: Color::White,
            dim: Color::DarkGray,
            accent: Color::Cyan,
            status: Color::Yellow,
        },
        Theme::Light => Palette {
            text: Color::Black,
            dim: Color::Gray,
            accent: Color::Blue,
            status: Color::Magenta,
        },
    }
}

fn render(frame: &mut ratatui::Frame<'_>, layout: &LayoutState, view: &ViewData) {
    let palette = palette_for(layout.theme);

    let (sidebar_area, main_area) = if layout.viewport.is_compact() {
        (None, frame.area())
    } else {
        let width = match layout.sidebar {
            SidebarMode::Expanded => SIDEBAR_WIDTH,
            SidebarMode::Collapsed => SIDEBAR_COLLAPSED_WIDTH,
        };
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(width), Constraint::Min(1)])
            .split(frame.area());
        (Some(split[0]), split[1])
    };

    if let Some(area) = sidebar_area {
        render_sidebar(frame, area, layout, view, palette);
    }

    let rows_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(main_area);

    render_header(frame, rows_area[0], layout, view, palette);
    render_body(frame, rows_area[1], layout, view, palette);
    render_footer(frame, rows_area[2], view, palette);

    if layout.viewport.is_compact() && layout.nav.is_open() {
        render_drawer(frame, view, palette);
    }
}

fn render_header(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    layout: &LayoutState,
    view: &ViewData,
    palette: Palette,
) {
    let header = Paragraph::new(header_text(layout, view.screen))
        .style(Style::default().fg(palette.text))
        .block(Block::default().title("atrium").borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn header_text(layout: &LayoutState, screen: ScreenKind) -> String {
    format!(
        "{}  {}  [{}]",
        screen.title(),
        layout.theme.glyph(),
        layout.viewport.as_str(),
    )
}

fn render_sidebar(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    layout: &LayoutState,
    view: &ViewData,
    palette: Palette,
) {
    let collapsed = layout.sidebar == SidebarMode::Collapsed;
    let entries = ScreenKind::nav_entries();
    let lines = sidebar_lines(&entries, view.screen.route(), collapsed);

    let sidebar = Paragraph::new(lines.join("\n"))
        .style(Style::default().fg(palette.accent))
        .block(Block::default().title("nav").borders(Borders::ALL));
    frame.render_widget(sidebar, area);
}

fn sidebar_lines(entries: &[NavEntry], current_route: &str, collapsed: bool) -> Vec<String> {
    let active = active_entry(current_route, entries);
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let mark = if active == Some(index) {
                ACTIVE_NAV_MARK
            } else {
                " "
            };
            if collapsed {
                let initial = entry.label.chars().next().unwrap_or(' ');
                format!("{mark}{initial}")
            } else {
                format!("{mark} {}", entry.label)
            }
        })
        .collect()
}

fn render_body(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    layout: &LayoutState,
    view: &ViewData,
    palette: Palette,
) {
    match view.screen {
        ScreenKind::Overview => {
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(4), Constraint::Min(1)])
                .split(area);
            let summary = Paragraph::new(overview_lines(view).join("\n"))
                .style(Style::default().fg(palette.text))
                .block(Block::default().title("at a glance").borders(Borders::ALL));
            frame.render_widget(summary, split[0]);
            render_scope_table(
                frame,
                split[1],
                &view.overview,
                &OVERVIEW_COLUMNS,
                "recent invoices",
                view,
                palette,
            );
        }
        ScreenKind::Users => {
            render_scope_table(
                frame,
                area,
                &view.users_table,
                &USER_COLUMNS,
                "users",
                view,
                palette,
            );
        }
        ScreenKind::Invoices => {
            render_scope_table(
                frame,
                area,
                &view.invoices_table,
                &INVOICE_COLUMNS,
                "invoices",
                view,
                palette,
            );
        }
        ScreenKind::Analytics => {
            let body = Paragraph::new(analytics_lines(&view.analytics).join("\n"))
                .style(Style::default().fg(palette.text))
                .block(Block::default().title("analytics").borders(Borders::ALL));
            frame.render_widget(body, area);
        }
        ScreenKind::Settings => {
            let body = Paragraph::new(settings_lines(layout, view).join("\n"))
                .style(Style::default().fg(palette.text))
                .block(Block::default().title("settings").borders(Borders::ALL));
            frame.render_widget(body, area);
        }
    }
}

fn render_scope_table(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    scope: &TableScope,
    columns: &[&str],
    label: &str,
    view: &ViewData,
    palette: Palette,
) {
    let visible = scope.visible_indices();

    let header_cells = columns.iter().enumerate().map(|(index, column)| {
        let mut style = Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD);
        if scope.sort.is_active(index) {
            style = style.fg(palette.accent);
        }
        if index == scope.sort_cursor {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        Cell::from(sort_header_label(column, &scope.sort, index)).style(style)
    });
    let header = Row::new(header_cells);

    let rows = visible.iter().map(|row_index| {
        let cells = table_cells(view, *row_index)
            .into_iter()
            .map(|text| Cell::from(text).style(Style::default().fg(palette.text)))
            .collect::<Vec<_>>();
        Row::new(cells)
    });

    let widths = vec![Constraint::Min(8); columns.len().max(1)];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .title(table_title(
                    label,
                    visible.len(),
                    scope.filter_rows.len(),
                    scope,
                    view.search_focus,
                ))
                .borders(Borders::ALL),
        );
    frame.render_widget(table, area);
}

fn table_cells(view: &ViewData, row_index: usize) -> Vec<String> {
    match view.screen {
        ScreenKind::Overview => view
            .invoices
            .iter()
            .take(OVERVIEW_ROWS)
            .nth(row_index)
            .map(|invoice| {
                vec![
                    invoice.number.clone(),
                    invoice.customer.clone(),
                    format_cents(invoice.amount_cents),
                    invoice.status.as_str().to_owned(),
                ]
            })
            .unwrap_or_default(),
        ScreenKind::Users => view
            .users
            .get(row_index)
            .map(|user| {
                vec![
                    user.name.clone(),
                    user.email.clone(),
                    user.status.as_str().to_owned(),
                    user.plan.as_str().to_owned(),
                    format_date(user.signed_up),
                ]
            })
            .unwrap_or_default(),
        ScreenKind::Invoices => view
            .invoices
            .get(row_index)
            .map(|invoice| {
                vec![
                    invoice.number.clone(),
                    invoice.customer.clone(),
                    format_cents(invoice.amount_cents),
                    format_date(invoice.issued_on),
                    invoice.status.as_str().to_owned(),
                ]
            })
            .unwrap_or_default(),
        ScreenKind::Analytics | ScreenKind::Settings => Vec::new(),
    }
}

fn sort_header_label(column: &str, sort: &SortIndicators, index: usize) -> String {
    format!("{column} {}", sort.indicator(index).glyph())
}

fn table_title(
    label: &str,
    shown: usize,
    total: usize,
    scope: &TableScope,
    search_focus: bool,
) -> String {
    let mut title = format!("{label} — {shown} of {total}");

    let mut filters = Vec::new();
    if search_focus {
        filters.push(format!("search: {}{SEARCH_CURSOR}", scope.criteria.query));
    } else if !scope.criteria.query.trim().is_empty() {
        filters.push(format!("search: {}", scope.criteria.query));
    }
    for field in scope.criteria.field_names() {
        let choice = scope.criteria.field(field);
        if !choice.is_any() {
            filters.push(format!("{field}: {}", choice.as_str()));
        }
    }

    if !filters.is_empty() {
        title.push_str(" [");
        title.push_str(&filters.join(", "));
        title.push(']');
    }
    title
}

fn overview_lines(view: &ViewData) -> Vec<String> {
    let active_users = view
        .users
        .iter()
        .filter(|user| user.status == UserStatus::Active)
        .count();
    let pro_users = view
        .users
        .iter()
        .filter(|user| user.plan == PlanKind::Pro)
        .count();
    let outstanding = view
        .invoices
        .iter()
        .filter(|invoice| invoice.status != InvoiceStatus::Paid)
        .map(|invoice| invoice.amount_cents)
        .sum::<i64>();

    vec![
        format!("users: {} ({active_users} active)", view.users.len()),
        format!(
            "plans: {pro_users} pro of {} | outstanding: {}",
            view.users.len(),
            format_cents(outstanding),
        ),
    ]
}

fn analytics_lines(analytics: &AnalyticsUiState) -> Vec<String> {
    vec![
        format!("range:  {}  (r to change)", analytics.range.chip_label()),
        format!("legend: {}  (m to change)", analytics.metric.legend_label()),
        String::new(),
        "chart data is plotted by the reporting pipeline".to_owned(),
    ]
}

fn settings_lines(layout: &LayoutState, view: &ViewData) -> Vec<String> {
    let mut lines = vec![
        format!("{}: {}", FlagKey::Theme.label(), layout.theme.as_str()),
        format!("{}: {}", FlagKey::Sidebar.label(), layout.sidebar.as_str()),
        format!("{}: {}", FlagKey::Nav.label(), layout.nav.as_str()),
        String::new(),
        "flags persist across restarts under the ui.* keys".to_owned(),
    ];
    if let Some(status) = &view.status_line {
        lines.push(String::new());
        lines.push(format!("last error: {status}"));
    }
    lines
}

fn render_footer(frame: &mut ratatui::Frame<'_>, area: Rect, view: &ViewData, palette: Palette) {
    let (text, color) = match &view.status_line {
        Some(status) => (status.clone(), palette.status),
        None => (footer_hints(view.screen).to_owned(), palette.dim),
    };
    let footer = Paragraph::new(text)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}

fn footer_hints(screen: ScreenKind) -> &'static str {
    match screen {
        ScreenKind::Overview | ScreenKind::Invoices => {
            "f/b screens  s chrome  t theme  / search  1 status  ←/→/o sort  ctrl-q quit"
        }
        ScreenKind::Users => {
            "f/b screens  s chrome  t theme  / search  1 status  2 plan  ←/→/o sort  ctrl-q quit"
        }
        ScreenKind::Analytics => "f/b screens  s chrome  t theme  r range  m metric  ctrl-q quit",
        ScreenKind::Settings => "f/b screens  s chrome  t theme  ctrl-q quit",
    }
}

fn render_drawer(frame: &mut ratatui::Frame<'_>, view: &ViewData, palette: Palette) {
    let area = frame.area();
    let drawer = Rect {
        x: area.x,
        y: area.y,
        width: DRAWER_WIDTH.min(area.width),
        height: area.height,
    };

    frame.render_widget(Clear, drawer);
    let entries = ScreenKind::nav_entries();
    let lines = drawer_lines(&entries, view.nav_cursor);
    let body = Paragraph::new(lines.join("\n"))
        .style(Style::default().fg(palette.accent))
        .block(Block::default().title("go to").borders(Borders::ALL));
    frame.render_widget(body, drawer);
}

fn drawer_lines(entries: &[NavEntry], cursor: usize) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            if index == cursor {
                format!("{ACTIVE_NAV_MARK} {}", entry.label)
            } else {
                format!("  {}", entry.label)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        AppRuntime, OVERVIEW_ROWS, UiOptions, ViewData, analytics_lines, cycle_choice,
        cycle_metric, cycle_range, drawer_lines, footer_hints, handle_drawer_key,
        handle_focus_gained, handle_key_event, handle_mouse, handle_resize, header_text,
        refresh_view_data, screen_cycle, settings_lines, sidebar_lines, sort_header_label,
        table_cells, table_title,
    };
    use anyhow::Result;
    use atrium_app::{
        FieldChoice, FlagValue, InvoiceId, InvoiceRow, InvoiceStatus, LayoutState, Metric,
        NavDrawer, PersistedFlags, PlanKind, RangeDays, ScreenKind, SidebarMode, Theme, UserId,
        UserRow, UserStatus, ViewportClass,
    };
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use time::{Date, Month};

    #[derive(Debug, Default)]
    struct TestRuntime {
        users: Vec<UserRow>,
        invoices: Vec<InvoiceRow>,
        ambient: Option<Theme>,
        persisted: Vec<FlagValue>,
    }

    impl AppRuntime for TestRuntime {
        fn load_users(&mut self) -> Result<Vec<UserRow>> {
            Ok(self.users.clone())
        }

        fn load_invoices(&mut self) -> Result<Vec<InvoiceRow>> {
            Ok(self.invoices.clone())
        }

        fn ambient_theme(&mut self) -> Theme {
            self.ambient.unwrap_or(Theme::Light)
        }

        fn persist_flag(&mut self, value: FlagValue) -> Result<()> {
            self.persisted.push(value);
            Ok(())
        }
    }

    fn sample_user(id: i64, name: &str, plan: PlanKind) -> UserRow {
        UserRow {
            id: UserId::new(id),
            name: name.to_owned(),
            email: format!("{}@example.com", name.to_ascii_lowercase().replace(' ', ".")),
            status: UserStatus::Active,
            plan,
            signed_up: Date::from_calendar_date(2026, Month::March, 4).expect("valid date"),
        }
    }

    fn sample_invoice(id: i64, number: &str, status: InvoiceStatus) -> InvoiceRow {
        InvoiceRow {
            id: InvoiceId::new(id),
            number: number.to_owned(),
            customer: "Nimbus Labs".to_owned(),
            amount_cents: 125_000,
            issued_on: Date::from_calendar_date(2026, Month::June, 17).expect("valid date"),
            status,
        }
    }

    fn desktop_layout() -> LayoutState {
        LayoutState::init(
            PersistedFlags::default(),
            ViewportClass::Desktop,
            Theme::Light,
        )
    }

    fn compact_layout() -> LayoutState {
        LayoutState::init(
            PersistedFlags::default(),
            ViewportClass::Compact,
            Theme::Light,
        )
    }

    fn loaded_view(runtime: &mut TestRuntime) -> ViewData {
        let mut view = ViewData::default();
        refresh_view_data(runtime, &mut view).expect("load view data");
        view
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_q_quits() {
        let mut layout = desktop_layout();
        let mut runtime = TestRuntime::default();
        let mut view = ViewData::default();

        let quit = handle_key_event(
            &mut layout,
            &mut runtime,
            &mut view,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        assert!(quit);
    }

    #[test]
    fn theme_toggle_persists_through_the_runtime() {
        let mut layout = desktop_layout();
        let mut runtime = TestRuntime::default();
        let mut view = ViewData::default();

        handle_key_event(&mut layout, &mut runtime, &mut view, key(KeyCode::Char('t')));
        assert_eq!(layout.theme, Theme::Dark);
        assert_eq!(runtime.persisted, vec![FlagValue::Theme(Theme::Dark)]);

        handle_key_event(&mut layout, &mut runtime, &mut view, key(KeyCode::Char('t')));
        assert_eq!(layout.theme, Theme::Light);
        assert_eq!(
            runtime.persisted,
            vec![
                FlagValue::Theme(Theme::Dark),
                FlagValue::Theme(Theme::Light),
            ],
        );
    }

    #[test]
    fn chrome_key_collapses_sidebar_on_desktop_and_opens_drawer_on_compact() {
        let mut runtime = TestRuntime::default();
        let mut view = ViewData::default();

        let mut desktop = desktop_layout();
        handle_key_event(&mut desktop, &mut runtime, &mut view, key(KeyCode::Char('s')));
        assert_eq!(desktop.sidebar, SidebarMode::Collapsed);
        assert_eq!(desktop.nav, NavDrawer::Closed);

        let mut compact = compact_layout();
        handle_key_event(&mut compact, &mut runtime, &mut view, key(KeyCode::Char('s')));
        assert_eq!(compact.nav, NavDrawer::Open);
        assert_eq!(compact.sidebar, SidebarMode::Expanded);
    }

    #[test]
    fn resize_to_compact_closes_the_drawer_and_persists_the_nav_flag() {
        let mut layout = desktop_layout();
        let mut runtime = TestRuntime::default();
        let mut view = ViewData::default();

        layout.nav = NavDrawer::Open;
        handle_resize(&mut layout, &mut runtime, &mut view, 60, 100);
        assert_eq!(layout.viewport, ViewportClass::Compact);
        assert_eq!(layout.nav, NavDrawer::Closed);
        assert_eq!(
            runtime.persisted,
            vec![FlagValue::Nav(NavDrawer::Closed)],
        );
    }

    #[test]
    fn resize_forced_sidebar_expansion_is_not_persisted() {
        let mut layout = desktop_layout();
        let mut runtime = TestRuntime::default();
        let mut view = ViewData::default();

        layout.sidebar = SidebarMode::Collapsed;
        handle_resize(&mut layout, &mut runtime, &mut view, 60, 100);
        assert_eq!(layout.sidebar, SidebarMode::Expanded);
        assert!(
            runtime
                .persisted
                .iter()
                .all(|value| !matches!(value, FlagValue::Sidebar(_))),
            "sidebar write-through should be skipped: {:?}",
            runtime.persisted
        );
    }

    #[test]
    fn focus_gained_adopts_the_ambient_theme_only_without_an_explicit_choice() {
        let mut runtime = TestRuntime {
            ambient: Some(Theme::Dark),
            ..TestRuntime::default()
        };
        let mut view = ViewData::default();

        let mut layout = desktop_layout();
        handle_focus_gained(&mut layout, &mut runtime, &mut view);
        assert_eq!(layout.theme, Theme::Dark);
        assert!(runtime.persisted.is_empty());

        let mut chosen = LayoutState::init(
            PersistedFlags {
                theme: Some(Theme::Light),
                sidebar: None,
                nav: None,
            },
            ViewportClass::Desktop,
            Theme::Light,
        );
        handle_focus_gained(&mut chosen, &mut runtime, &mut view);
        assert_eq!(chosen.theme, Theme::Light);
    }

    #[test]
    fn mouse_press_beside_the_open_drawer_closes_it() {
        let mut layout = compact_layout();
        let mut runtime = TestRuntime::default();
        let mut view = ViewData::default();
        layout.nav = NavDrawer::Open;

        let press = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 60,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut layout, &mut runtime, &mut view, press);
        assert_eq!(layout.nav, NavDrawer::Closed);

        // A press inside the drawer leaves it open.
        layout.nav = NavDrawer::Open;
        let inside = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut layout, &mut runtime, &mut view, inside);
        assert_eq!(layout.nav, NavDrawer::Open);
    }

    #[test]
    fn chrome_key_toggles_the_open_drawer_closed() {
        let mut layout = compact_layout();
        let mut runtime = TestRuntime::default();
        let mut view = ViewData::default();

        handle_key_event(&mut layout, &mut runtime, &mut view, key(KeyCode::Char('s')));
        assert_eq!(layout.nav, NavDrawer::Open);

        handle_key_event(&mut layout, &mut runtime, &mut view, key(KeyCode::Char('s')));
        assert_eq!(layout.nav, NavDrawer::Closed);
        assert_eq!(
            runtime.persisted,
            vec![
                FlagValue::Nav(NavDrawer::Open),
                FlagValue::Nav(NavDrawer::Closed),
            ],
        );
    }

    #[test]
    fn escape_closes_the_drawer_unconditionally() {
        let mut layout = compact_layout();
        let mut runtime = TestRuntime::default();
        let mut view = ViewData::default();
        layout.nav = NavDrawer::Open;

        handle_key_event(&mut layout, &mut runtime, &mut view, key(KeyCode::Esc));
        assert_eq!(layout.nav, NavDrawer::Closed);
    }

    #[test]
    fn choosing_a_drawer_destination_switches_screen_and_closes_it() {
        let mut layout = compact_layout();
        let mut runtime = TestRuntime::default();
        let mut view = ViewData::default();
        layout.nav = NavDrawer::Open;

        handle_drawer_key(&mut layout, &mut runtime, &mut view, key(KeyCode::Down));
        handle_drawer_key(&mut layout, &mut runtime, &mut view, key(KeyCode::Enter));
        assert_eq!(view.screen, ScreenKind::Users);
        assert_eq!(layout.nav, NavDrawer::Closed);
    }

    #[test]
    fn screen_switching_on_desktop_leaves_the_nav_flag_alone() {
        let mut layout = desktop_layout();
        let mut runtime = TestRuntime::default();
        let mut view = ViewData::default();

        handle_key_event(&mut layout, &mut runtime, &mut view, key(KeyCode::Char('f')));
        assert_eq!(view.screen, ScreenKind::Users);
        assert!(runtime.persisted.is_empty());

        handle_key_event(&mut layout, &mut runtime, &mut view, key(KeyCode::Char('b')));
        assert_eq!(view.screen, ScreenKind::Overview);
    }

    #[test]
    fn screen_cycle_wraps_in_both_directions() {
        assert_eq!(screen_cycle(ScreenKind::Settings, 1), ScreenKind::Overview);
        assert_eq!(screen_cycle(ScreenKind::Overview, -1), ScreenKind::Settings);
    }

    #[test]
    fn search_keystrokes_refilter_the_users_table() {
        let mut layout = desktop_layout();
        let mut runtime = TestRuntime {
            users: vec![
                sample_user(1, "Alice Romero", PlanKind::Pro),
                sample_user(2, "Bruno Keller", PlanKind::Free),
            ],
            ..TestRuntime::default()
        };
        let mut view = loaded_view(&mut runtime);
        view.screen = ScreenKind::Users;

        handle_key_event(&mut layout, &mut runtime, &mut view, key(KeyCode::Char('/')));
        assert!(view.search_focus);

        for ch in "alice".chars() {
            handle_key_event(&mut layout, &mut runtime, &mut view, key(KeyCode::Char(ch)));
        }
        assert_eq!(view.users_table.criteria.query, "alice");
        assert_eq!(view.users_table.visible_indices(), vec![0]);

        handle_key_event(&mut layout, &mut runtime, &mut view, key(KeyCode::Backspace));
        assert_eq!(view.users_table.criteria.query, "alic");

        handle_key_event(&mut layout, &mut runtime, &mut view, key(KeyCode::Enter));
        assert!(!view.search_focus);
    }

    #[test]
    fn field_keys_cycle_tag_selectors_and_narrow_rows() {
        let mut layout = desktop_layout();
        let mut runtime = TestRuntime {
            users: vec![
                sample_user(1, "Alice Romero", PlanKind::Pro),
                sample_user(2, "Bruno Keller", PlanKind::Free),
            ],
            ..TestRuntime::default()
        };
        let mut view = loaded_view(&mut runtime);
        view.screen = ScreenKind::Users;

        // plan: all → free
        handle_key_event(&mut layout, &mut runtime, &mut view, key(KeyCode::Char('2')));
        assert_eq!(
            view.users_table.criteria.field("plan"),
            FieldChoice::Tag("free".to_owned())
        );
        assert_eq!(view.users_table.visible_indices(), vec![1]);

        // free → pro
        handle_key_event(&mut layout, &mut runtime, &mut view, key(KeyCode::Char('2')));
        assert_eq!(view.users_table.visible_indices(), vec![0]);

        // pro → enterprise → all
        handle_key_event(&mut layout, &mut runtime, &mut view, key(KeyCode::Char('2')));
        assert_eq!(view.users_table.visible_indices(), Vec::<usize>::new());
        handle_key_event(&mut layout, &mut runtime, &mut view, key(KeyCode::Char('2')));
        assert_eq!(view.users_table.visible_indices(), vec![0, 1]);
    }

    #[test]
    fn field_keys_are_no_ops_on_screens_without_selectors() {
        let mut layout = desktop_layout();
        let mut runtime = TestRuntime::default();
        let mut view = ViewData::default();
        view.screen = ScreenKind::Overview;

        handle_key_event(&mut layout, &mut runtime, &mut view, key(KeyCode::Char('1')));
        assert!(view.overview.criteria.field("status").is_any());

        view.screen = ScreenKind::Invoices;
        handle_key_event(&mut layout, &mut runtime, &mut view, key(KeyCode::Char('2')));
        assert!(view.invoices_table.criteria.field("status").is_any());
    }

    #[test]
    fn sort_keys_move_the_cursor_and_advance_the_indicator() {
        let mut layout = desktop_layout();
        let mut runtime = TestRuntime {
            users: vec![sample_user(1, "Alice Romero", PlanKind::Pro)],
            ..TestRuntime::default()
        };
        let mut view = loaded_view(&mut runtime);
        view.screen = ScreenKind::Users;

        handle_key_event(&mut layout, &mut runtime, &mut view, key(KeyCode::Right));
        assert_eq!(view.users_table.sort_cursor, 1);

        handle_key_event(&mut layout, &mut runtime, &mut view, key(KeyCode::Char('o')));
        assert!(view.users_table.sort.is_active(1));
        assert_eq!(sort_header_label("email", &view.users_table.sort, 1), "email ↓");

        handle_key_event(&mut layout, &mut runtime, &mut view, key(KeyCode::Left));
        handle_key_event(&mut layout, &mut runtime, &mut view, key(KeyCode::Char('o')));
        assert!(view.users_table.sort.is_active(0));
        assert!(!view.users_table.sort.is_active(1));
        // The sibling keeps its glyph after losing the active mark.
        assert_eq!(sort_header_label("email", &view.users_table.sort, 1), "email ↓");
    }

    #[test]
    fn analytics_keys_cycle_range_and_metric() {
        let mut layout = desktop_layout();
        let mut runtime = TestRuntime::default();
        let mut view = ViewData::default();
        view.screen = ScreenKind::Analytics;

        handle_key_event(&mut layout, &mut runtime, &mut view, key(KeyCode::Char('r')));
        assert_eq!(view.analytics.range, RangeDays::Ninety);
        handle_key_event(&mut layout, &mut runtime, &mut view, key(KeyCode::Char('m')));
        assert_eq!(view.analytics.metric, Metric::ActiveUsers);

        let lines = analytics_lines(&view.analytics);
        assert!(lines[0].contains("Last 90 days"));
        assert!(lines[1].contains("Active users"));
    }

    #[test]
    fn analytics_keys_do_nothing_on_other_screens() {
        let mut layout = desktop_layout();
        let mut runtime = TestRuntime::default();
        let mut view = ViewData::default();
        view.screen = ScreenKind::Users;

        handle_key_event(&mut layout, &mut runtime, &mut view, key(KeyCode::Char('r')));
        assert_eq!(view.analytics.range, RangeDays::Thirty);
    }

    #[test]
    fn cycle_choice_walks_all_tags_and_returns_to_wildcard() {
        let tags = ["paid", "due", "overdue"];
        let mut choice = FieldChoice::Any;
        let mut seen = Vec::new();
        for _ in 0..4 {
            choice = cycle_choice(&choice, &tags);
            seen.push(choice.as_str().to_owned());
        }
        assert_eq!(seen, vec!["paid", "due", "overdue", "all"]);
    }

    #[test]
    fn cycle_choice_recovers_from_an_unknown_tag() {
        let next = cycle_choice(&FieldChoice::Tag("stale".to_owned()), &["paid", "due"]);
        assert!(next.is_any());
    }

    #[test]
    fn range_and_metric_cycles_wrap() {
        assert_eq!(cycle_range(RangeDays::Ninety), RangeDays::Seven);
        assert_eq!(cycle_metric(Metric::Churn), Metric::Revenue);
    }

    #[test]
    fn sidebar_marks_the_entry_matching_the_current_route() {
        let entries = ScreenKind::nav_entries();
        let lines = sidebar_lines(&entries, ScreenKind::Invoices.route(), false);
        assert!(lines[2].starts_with("› Invoices"));
        assert!(lines[0].starts_with("  Overview"));
    }

    #[test]
    fn collapsed_sidebar_shows_initials() {
        let entries = ScreenKind::nav_entries();
        let lines = sidebar_lines(&entries, ScreenKind::Users.route(), true);
        assert_eq!(lines[1], "›U");
        assert_eq!(lines[0], " O");
    }

    #[test]
    fn drawer_lines_highlight_the_cursor() {
        let entries = ScreenKind::nav_entries();
        let lines = drawer_lines(&entries, 3);
        assert!(lines[3].starts_with("› Analytics"));
        assert!(lines[0].starts_with("  Overview"));
    }

    #[test]
    fn table_title_reports_visible_counts_and_active_filters() {
        let mut view = ViewData::default();
        view.users_table.criteria.set_query("alice");
        view.users_table
            .criteria
            .set_field("plan", FieldChoice::Tag("pro".to_owned()));

        let title = table_title("users", 1, 12, &view.users_table, false);
        assert!(title.starts_with("users — 1 of 12"));
        assert!(title.contains("search: alice"));
        assert!(title.contains("plan: pro"));
    }

    #[test]
    fn overview_table_is_limited_to_recent_invoices() {
        let mut runtime = TestRuntime::default();
        for id in 0..8 {
            runtime.invoices.push(sample_invoice(
                id,
                &format!("INV-{id:04}"),
                InvoiceStatus::Paid,
            ));
        }
        let view = loaded_view(&mut runtime);
        assert_eq!(view.overview.filter_rows.len(), OVERVIEW_ROWS);
        assert_eq!(view.invoices_table.filter_rows.len(), 8);
    }

    #[test]
    fn table_cells_render_formatted_money_and_dates() {
        let mut runtime = TestRuntime {
            invoices: vec![sample_invoice(7, "INV-1007", InvoiceStatus::Due)],
            ..TestRuntime::default()
        };
        let mut view = loaded_view(&mut runtime);
        view.screen = ScreenKind::Invoices;

        let cells = table_cells(&view, 0);
        assert_eq!(
            cells,
            vec![
                "INV-1007".to_owned(),
                "Nimbus Labs".to_owned(),
                "$1,250.00".to_owned(),
                "2026-06-17".to_owned(),
                "due".to_owned(),
            ],
        );
    }

    #[test]
    fn header_shows_the_theme_glyph_and_viewport_class() {
        let layout = desktop_layout();
        let text = header_text(&layout, ScreenKind::Users);
        assert!(text.contains("Users"));
        assert!(text.contains('☾'));
        assert!(text.contains("[desktop]"));
    }

    #[test]
    fn settings_screen_lists_the_live_flag_values() {
        let mut layout = desktop_layout();
        layout.sidebar = SidebarMode::Collapsed;
        let view = ViewData::default();

        let lines = settings_lines(&layout, &view);
        assert!(lines.contains(&"theme: light".to_owned()));
        assert!(lines.contains(&"sidebar: collapsed".to_owned()));
        assert!(lines.contains(&"nav drawer: closed".to_owned()));
    }

    #[test]
    fn footer_hints_mention_the_screen_specific_keys() {
        assert!(footer_hints(ScreenKind::Users).contains("2 plan"));
        assert!(footer_hints(ScreenKind::Analytics).contains("r range"));
        assert!(!footer_hints(ScreenKind::Settings).contains("search"));
    }

    #[test]
    fn default_options_use_the_standard_breakpoint() {
        assert_eq!(UiOptions::default().compact_below, 100);
    }
}
