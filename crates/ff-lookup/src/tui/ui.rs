//! UI rendering

use ff_lookup_core::dashboard::{ServiceState, StatTile};
use ff_lookup_core::model::group_thousands;
use ff_lookup_core::{OutfitView, PlayerBundle, Phase, Presence, Severity, Tab, ViewState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::app::App;

const SIDEBAR_WIDTH: u16 = 24;

/// Result sections in the order they are revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Profile,
    Outfit,
    Guild,
    Pet,
    Status,
}

const SECTIONS: [Section; 5] = [
    Section::Profile,
    Section::Outfit,
    Section::Guild,
    Section::Pet,
    Section::Status,
];

const FIGURE: [&str; 7] = [
    "    .---.    ",
    "   ( H F )   ",
    "  /|  T  |\\  ",
    " W |     |   ",
    "   |  B  |   ",
    "   /     \\   ",
    "  S       S  ",
];

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let main_area = if app.nav.sidebar_open() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(40)])
            .split(frame.area());
        render_sidebar(frame, app, cols[0]);
        cols[1]
    } else {
        frame.area()
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Stat tiles
            Constraint::Min(12),   // Body
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Toast line
        ])
        .split(main_area);

    render_header(frame, app, rows[0]);
    render_tiles(frame, &app.dashboard.tiles, rows[1]);

    let tab = app.nav.active();
    if tab.shows_dashboard() {
        render_dashboard_body(frame, app, rows[2]);
    } else {
        render_placeholder(frame, tab, rows[2]);
    }

    render_status_bar(frame, app, rows[3]);
    render_toast_line(frame, app, rows[4]);
}

fn rounded_block(title: &str, color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(color))
        .title(format!(" {title} "))
}

/// Render the navigation sidebar
fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let block = rounded_block("FF LOOKUP", Color::Magenta)
        .title_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Subtitle
            Constraint::Min(1),    // Menu
            Constraint::Length(2), // Footer
        ])
        .split(inner);

    let dim = Style::default().fg(Color::DarkGray);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(" Admin Dashboard", dim))),
        chunks[0],
    );

    let active = app.nav.active();
    let items: Vec<ListItem> = Tab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                let style = Style::default()
                    .fg(Color::Yellow)
                    .bg(Color::Rgb(38, 38, 38))
                    .add_modifier(Modifier::BOLD);
                ListItem::new(Line::from(vec![
                    Span::styled("▶ ", style),
                    Span::styled(tab.label(), style),
                    Span::styled(" ●", Style::default().fg(Color::Magenta)),
                ]))
            } else {
                ListItem::new(Line::from(Span::styled(
                    format!("  {}", tab.label()),
                    Style::default().fg(Color::Gray),
                )))
            }
        })
        .collect();
    frame.render_widget(List::new(items), chunks[1]);

    let footer = Paragraph::new(vec![
        Line::from(Span::styled(format!("v{}", app.dashboard.version), dim)),
        Line::from(Span::styled(
            "© FF Lookup",
            Style::default().fg(Color::Magenta),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[2]);
}

/// Render the page header (title on the left, operator on the right)
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(24)])
        .split(inner);

    let header = &app.dashboard.header;
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {}", header.title),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", header.subtitle),
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(title, cols[0]);

    let operator = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Magenta)),
            Span::styled(
                header.operator.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            header.role.as_str(),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Right);
    frame.render_widget(operator, cols[1]);
}

/// Render the row of summary tiles
fn render_tiles(frame: &mut Frame, tiles: &[StatTile], area: Rect) {
    if tiles.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, tiles.len() as u32); tiles.len()];
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (tile, col) in tiles.iter().zip(cols.iter()) {
        let title = truncate_text(&tile.title, col.width.saturating_sub(4) as usize);
        let block = rounded_block(&title, Color::DarkGray);

        let mut lines = vec![Line::from(Span::styled(
            format!(" {}", tile.value),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        if let Some(trend) = tile.trend {
            let color = if trend.positive {
                Color::Green
            } else {
                Color::Red
            };
            lines.push(Line::from(Span::styled(
                format!(" {} {}% vs yesterday", trend.arrow(), trend.percent),
                Style::default().fg(color),
            )));
        }

        frame.render_widget(Paragraph::new(lines).block(block), *col);
    }
}

/// Render the lookup column and the side column
fn render_dashboard_body(frame: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Search box
            Constraint::Min(6),    // Results
        ])
        .split(cols[0]);

    render_search_box(frame, app, left[0]);
    render_results(frame, app, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.dashboard.recent.len() as u16 + 2),
            Constraint::Length(6),
            Constraint::Min(5),
        ])
        .split(cols[1]);

    render_recent(frame, app, right[0]);
    render_quick_stats(frame, app, right[1]);
    render_system_status(frame, app, right[2]);
}

fn render_placeholder(frame: &mut Frame, tab: Tab, area: Rect) {
    let dim = Style::default().fg(Color::DarkGray);
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} is not part of this demo", tab.label()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Press Tab to move to UID Lookup", dim)),
    ];
    let para = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(rounded_block(tab.label(), Color::DarkGray));
    frame.render_widget(para, area);
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::None => Style::default().fg(Color::DarkGray),
        Severity::Error => Style::default().fg(Color::Red),
        Severity::Warning => Style::default().fg(Color::Yellow),
        Severity::Success => Style::default().fg(Color::Green),
    }
}

/// Render the UID input with its inline validation message
fn render_search_box(frame: &mut Frame, app: &App, area: Rect) {
    let validation = app.search.validation();
    let border_color = match validation.severity() {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
        _ => Color::Cyan,
    };
    let block = rounded_block("Player lookup", border_color);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cursor_style = Style::default().fg(Color::White).bg(Color::DarkGray);
    let text_style = Style::default().fg(Color::White);

    // Split the input at cursor position
    let (before, after) = app.input.text.split_at(app.input.cursor);
    let cursor_char = after.chars().next();
    let after_cursor = cursor_char.map(|c| &after[c.len_utf8()..]).unwrap_or("");

    let mut spans = vec![Span::styled("▌ ", Style::default().fg(Color::Yellow))];
    if app.input.text.is_empty() {
        spans.push(Span::styled("█", Style::default().fg(Color::White)));
        spans.push(Span::styled(
            " Enter player UID...",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        if !before.is_empty() {
            spans.push(Span::styled(before, text_style));
        }
        // Block cursor on the character under it, or a thick bar at the end
        if let Some(c) = cursor_char {
            spans.push(Span::styled(c.to_string(), cursor_style));
        } else {
            spans.push(Span::styled("█", Style::default().fg(Color::White)));
        }
        if !after_cursor.is_empty() {
            spans.push(Span::styled(after_cursor, text_style));
        }
    }

    let button_style = if app.search.can_submit() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    spans.push(Span::styled("  [Enter search]", button_style));

    let status_line = if let Phase::Loading { uid, .. } = app.search.phase() {
        let spinner = spinner_frame(app.loading_since.unwrap_or_else(Instant::now));
        Line::from(Span::styled(
            format!("{spinner} Looking up {uid}..."),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        match validation.message() {
            Some(message) => Line::from(vec![
                Span::styled("● ", severity_style(validation.severity())),
                Span::styled(message, severity_style(validation.severity())),
            ]),
            None => Line::from(""),
        }
    };

    frame.render_widget(Paragraph::new(vec![Line::from(spans), status_line]), inner);
}

/// Render whatever the search phase calls for below the input
fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    match app.search.view() {
        ViewState::Idle | ViewState::Invalid => render_empty_state(frame, area),
        ViewState::Loading => render_loading(frame, app, area),
        ViewState::NotFound => render_not_found(frame, app, area),
        ViewState::Results => {
            if let Some(bundle) = app.search.bundle() {
                render_bundle(frame, app, bundle, area);
            }
        }
    }
}

fn render_empty_state(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No data yet",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Enter a Free Fire player UID to see account details",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let para = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(rounded_block("Results", Color::DarkGray));
    frame.render_widget(para, area);
}

fn render_loading(frame: &mut Frame, app: &App, area: Rect) {
    let spinner = spinner_frame(app.loading_since.unwrap_or_else(Instant::now));
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{spinner} Fetching player data"),
            Style::default().fg(Color::Yellow),
        )),
    ];
    let para = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(rounded_block("Results", Color::Yellow));
    frame.render_widget(para, area);
}

fn render_not_found(frame: &mut Frame, app: &App, area: Rect) {
    let uid = match app.search.phase() {
        Phase::NotFound { uid } => uid.as_str(),
        _ => "",
    };
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("No player found for UID {uid}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Check the UID and try again",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let para = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(rounded_block("Not found", Color::Red));
    frame.render_widget(para, area);
}

/// Fan one bundle out into the result panels, honouring the reveal schedule
fn render_bundle(frame: &mut Frame, app: &App, bundle: &PlayerBundle, area: Rect) {
    let visible = app.visible_sections(SECTIONS.len());
    let shown = |section: Section| {
        SECTIONS
            .iter()
            .position(|s| *s == section)
            .is_some_and(|i| i < visible)
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Profile header
            Constraint::Length(10), // Profile details + outfit
            Constraint::Min(7),     // Guild, pet, status
        ])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(rows[2]);

    if shown(Section::Profile) {
        render_profile_header(frame, bundle, rows[0]);
        render_profile_details(frame, bundle, top[0]);
    }
    if shown(Section::Outfit) {
        render_outfit(frame, bundle, app.search.outfit_view(), top[1]);
    }
    if shown(Section::Guild) {
        render_guild(frame, bundle, bottom[0]);
    }
    if shown(Section::Pet) {
        render_pet(frame, bundle, bottom[1]);
    }
    if shown(Section::Status) {
        render_status(frame, bundle, bottom[2]);
    }
}

fn presence_style(presence: &Presence) -> Style {
    match presence {
        Presence::Online => Style::default().fg(Color::Green),
        Presence::InGame { .. } => Style::default().fg(Color::Cyan),
        Presence::Offline => Style::default().fg(Color::DarkGray),
    }
}

fn labeled_line(label: &str, width: usize, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {label:<width$}"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(value.into(), Style::default().fg(Color::White)),
    ])
}

fn detail_line(label: &str, value: impl Into<String>) -> Line<'static> {
    labeled_line(label, 11, value)
}

/// Narrower label column for the three small panels
fn compact_line(label: &str, value: impl Into<String>) -> Line<'static> {
    labeled_line(label, 8, value)
}

fn render_profile_header(frame: &mut Frame, bundle: &PlayerBundle, area: Rect) {
    let p = &bundle.player;
    let dim = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", p.nickname),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("[{}]", p.presence.label()), presence_style(&p.presence)),
        ]),
        Line::from(vec![
            Span::styled(format!(" UID: {}", p.uid), dim),
            Span::styled("   ★ ", Style::default().fg(Color::Yellow)),
            Span::raw(format!("Level {}", p.level)),
            Span::styled("   ♥ ", Style::default().fg(Color::Magenta)),
            Span::raw(format!("{} likes", group_thousands(p.likes))),
        ]),
    ];
    let para = Paragraph::new(lines).block(rounded_block("Player", Color::Magenta));
    frame.render_widget(para, area);
}

fn render_profile_details(frame: &mut Frame, bundle: &PlayerBundle, area: Rect) {
    let p = &bundle.player;
    let lines = vec![
        Line::from(vec![
            Span::styled(format!(" {:<11}", "BR rank"), Style::default().fg(Color::DarkGray)),
            Span::styled(
                p.br_rank.as_str(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        detail_line("CS rank", p.cs_rank.as_str()),
        detail_line("Rank", p.rank.as_str()),
        detail_line("Guild", bundle.guild.name.as_str()),
        detail_line("Region", p.region.as_str()),
        detail_line("Experience", group_thousands(p.experience)),
        detail_line("Created", p.account_created.format("%Y-%m-%d").to_string()),
        detail_line("Last login", p.last_login.format("%Y-%m-%d %H:%M").to_string()),
    ];
    let para = Paragraph::new(lines).block(rounded_block("Profile", Color::Cyan));
    frame.render_widget(para, area);
}

fn render_outfit(frame: &mut Frame, bundle: &PlayerBundle, view: OutfitView, area: Rect) {
    let hint_style = Style::default().fg(Color::DarkGray);
    let title = format!("Outfit · {}", view.label());

    let lines: Vec<Line> = match view {
        OutfitView::Image => {
            let mut lines: Vec<Line> = FIGURE
                .iter()
                .map(|row| Line::from(Span::styled(*row, Style::default().fg(Color::Cyan))))
                .collect();
            lines.push(Line::from(Span::styled("^o details", hint_style)));
            lines
        }
        OutfitView::Detail => {
            let mut lines: Vec<Line> = bundle
                .outfit
                .slots()
                .into_iter()
                .map(|(slot, item)| detail_line(slot, item))
                .collect();
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(" ^o image", hint_style)));
            lines
        }
    };

    let mut para = Paragraph::new(lines).block(rounded_block(&title, Color::Blue));
    if view == OutfitView::Image {
        para = para.alignment(Alignment::Center);
    }
    frame.render_widget(para, area);
}

fn render_guild(frame: &mut Frame, bundle: &PlayerBundle, area: Rect) {
    let g = &bundle.guild;
    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", g.name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        compact_line("ID", g.id.to_string()),
        compact_line("Level", g.level.to_string()),
        compact_line("Members", format!("{}/{}", g.members, g.capacity)),
        compact_line("Leader", g.leader.as_str()),
    ];
    let para = Paragraph::new(lines).block(rounded_block("Guild", Color::Green));
    frame.render_widget(para, area);
}

fn render_pet(frame: &mut Frame, bundle: &PlayerBundle, area: Rect) {
    let pet = &bundle.pet;
    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", pet.name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        compact_line("Type", pet.kind.as_str()),
        compact_line("Level", pet.level.to_string()),
        compact_line("Exp", group_thousands(pet.experience)),
        compact_line("Skill", pet.skill.as_str()),
    ];
    let para = Paragraph::new(lines).block(rounded_block("Pet", Color::Yellow));
    frame.render_widget(para, area);
}

fn render_status(frame: &mut Frame, bundle: &PlayerBundle, area: Rect) {
    let p = &bundle.player;
    let lines = vec![
        Line::from(Span::styled(
            format!(" ● {}", p.presence.label()),
            presence_style(&p.presence).add_modifier(Modifier::BOLD),
        )),
        compact_line("Region", p.region.as_str()),
        Line::from(Span::styled(" Last seen", Style::default().fg(Color::DarkGray))),
        Line::from(format!("  {}", p.last_login.format("%Y-%m-%d %H:%M"))),
    ];
    let para = Paragraph::new(lines).block(rounded_block("Status", Color::Cyan));
    frame.render_widget(para, area);
}

fn render_recent(frame: &mut Frame, app: &App, area: Rect) {
    let dim = Style::default().fg(Color::DarkGray);
    let name_width = (area.width as usize).saturating_sub(22).max(6);

    let items: Vec<ListItem> = app
        .dashboard
        .recent
        .iter()
        .map(|entry| {
            let name = truncate_text(&entry.nickname, name_width);
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {name:<name_width$}"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" Lv{:<3}", entry.level), dim),
                Span::styled(format!(" {}", entry.ago), dim),
            ]))
        })
        .collect();

    frame.render_widget(
        List::new(items).block(rounded_block("Recent lookups", Color::DarkGray)),
        area,
    );
}

fn render_quick_stats(frame: &mut Frame, app: &App, area: Rect) {
    let block = rounded_block("Quick stats", Color::DarkGray);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 4])
        .split(inner);

    let quick = app.dashboard.quick;
    let ratio = quick.success_ratio();
    let dim = Style::default().fg(Color::DarkGray);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" Successful ", dim),
            Span::styled(
                group_thousands(u64::from(quick.succeeded)),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ])),
        rows[0],
    );
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Magenta).bg(Color::Black))
            .ratio(ratio)
            .label(""),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" Failed     ", dim),
            Span::styled(
                group_thousands(u64::from(quick.failed)),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ])),
        rows[2],
    );
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Red).bg(Color::Black))
            .ratio(1.0 - ratio)
            .label(""),
        rows[3],
    );
}

fn render_system_status(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .dashboard
        .services
        .iter()
        .map(|service| {
            let color = match service.state {
                ServiceState::Operational => Color::Green,
                ServiceState::Degraded => Color::Yellow,
                ServiceState::Down => Color::Red,
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!(" {:<12}", service.name)),
                Span::styled(
                    format!("● {}", service.state.label()),
                    Style::default().fg(color),
                ),
            ]))
        })
        .collect();

    frame.render_widget(
        List::new(items).block(rounded_block("System status", Color::DarkGray)),
        area,
    );
}

/// Render the status bar (keyboard shortcuts + last lookup time)
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let dim = Style::default().fg(Color::DarkGray);
    let bracket = Style::default().fg(Color::DarkGray);

    let mut spans = vec![Span::raw(" ")];
    let mut hints = vec!["Enter search", "^u clear", "Tab section", "^b sidebar"];
    if app.search.bundle().is_some() {
        hints.push("^o outfit");
    }
    hints.push("Esc quit");

    for hint in hints {
        spans.push(Span::styled("[", bracket));
        spans.push(Span::styled(hint, dim));
        spans.push(Span::styled("] ", bracket));
    }

    if let Some(duration) = app.last_duration {
        spans.push(Span::styled(
            format!("lookup {}", format_duration(duration)),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::DIM),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the toast notification line (below status bar)
fn render_toast_line(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(ref toast) = app.toast {
        let bracket = Style::default().fg(Color::DarkGray);
        let toast_style = if toast.is_error {
            Style::default().fg(Color::Red).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::Blue).add_modifier(Modifier::DIM)
        };

        let spans = vec![
            Span::styled(" [", bracket),
            Span::styled(toast.message.as_str(), toast_style),
            Span::styled("]", bracket),
        ];

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn spinner_frame(started_at: Instant) -> &'static str {
    const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    let elapsed = started_at.elapsed().as_millis() / 80;
    let idx = (elapsed as usize) % FRAMES.len();
    FRAMES[idx]
}

fn format_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.1}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.1}s", d.as_secs_f64())
    }
}

fn truncate_text(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut result = String::new();
    let mut width = 0;

    for ch in text.chars() {
        let char_width = ch.width().unwrap_or(0);
        if width + char_width + 1 > max_width {
            break;
        }
        result.push(ch);
        width += char_width;
    }

    result + "…"
}

#[cfg(test)]
mod tests {
    use super::super::app::tests::{ctrl, press, test_app, type_text, wait_idle};
    use super::super::app::AppOptions;
    use super::*;
    use crossterm::event::KeyCode;
    use ff_lookup_core::MockLookup;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<Vec<_>>()
            .chunks(width)
            .map(|row| row.concat())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app_with_results(uid: &str) -> App {
        let mut app = test_app(Duration::ZERO);
        type_text(&mut app, uid);
        press(&mut app, KeyCode::Enter);
        wait_idle(&mut app);
        app
    }

    #[test]
    fn test_idle_dashboard() {
        let app = test_app(Duration::ZERO);
        let screen = draw(&app);
        assert!(screen.contains("FF LOOKUP"));
        assert!(screen.contains("▶ UID Lookup"));
        assert!(screen.contains("Lookups today"));
        assert!(screen.contains("↑ 12% vs yesterday"));
        assert!(screen.contains("No data yet"));
        assert!(screen.contains("Recent lookups"));
        assert!(screen.contains("DragonSlayer"));
        assert!(screen.contains("Tester"));
        assert!(screen.contains("Warming up"));
    }

    #[test]
    fn test_inline_validation_message() {
        let mut app = test_app(Duration::ZERO);
        type_text(&mut app, "12ab");
        let screen = draw(&app);
        assert!(screen.contains("UID must contain digits only"));
        assert!(screen.contains("No data yet"));

        let mut app = test_app(Duration::ZERO);
        type_text(&mut app, "1234");
        assert!(draw(&app).contains("UID must be at least 8 digits (got 4)"));
    }

    #[test]
    fn test_results_panels() {
        let app = app_with_results("1234567890");
        let screen = draw(&app);
        assert!(screen.contains("ProGamer_VN"));
        assert!(screen.contains("UID: 1234567890"));
        assert!(screen.contains("Grandmaster"));
        assert!(screen.contains("EliteCaptain"));
        assert!(screen.contains("Skyline Spree"));
        assert!(screen.contains("48/55"));
        assert!(screen.contains("Outfit · image"));
        assert!(!screen.contains("Sakura Sneakers"));
        assert!(screen.contains("] lookup "));
    }

    #[test]
    fn test_outfit_detail_view() {
        let mut app = app_with_results("1234567890");
        ctrl(&mut app, 'o');
        let screen = draw(&app);
        assert!(screen.contains("Outfit · details"));
        assert!(screen.contains("Sakura Sneakers"));
        assert!(screen.contains("Dragon AK"));
    }

    #[test]
    fn test_not_found_panel() {
        let app = app_with_results("99999999");
        let screen = draw(&app);
        assert!(screen.contains("Not found"));
        assert!(screen.contains("No player found for UID 99999999"));
        assert!(!screen.contains("EliteCaptain"));
    }

    #[test]
    fn test_loading_panel() {
        let mut app = test_app(Duration::from_secs(2));
        type_text(&mut app, "12345678");
        press(&mut app, KeyCode::Enter);
        let screen = draw(&app);
        assert!(screen.contains("Looking up 12345678..."));
        assert!(screen.contains("Fetching player data"));
    }

    #[test]
    fn test_staggered_reveal_hides_later_sections() {
        let mut app = App::new(
            Arc::new(MockLookup::new(Duration::ZERO)),
            AppOptions {
                reveal_step: Duration::from_secs(3600),
                sidebar_open: true,
                operator: "Tester".to_string(),
            },
        );
        type_text(&mut app, "1234567890");
        press(&mut app, KeyCode::Enter);
        wait_idle(&mut app);

        let screen = draw(&app);
        assert!(screen.contains("Grandmaster"));
        assert!(!screen.contains("Outfit ·"));
        assert!(!screen.contains("EliteCaptain"));
        assert!(!screen.contains("Skyline Spree"));
    }

    #[test]
    fn test_sidebar_hidden() {
        let mut app = test_app(Duration::ZERO);
        ctrl(&mut app, 'b');
        let screen = draw(&app);
        assert!(!screen.contains("FF LOOKUP"));
        assert!(screen.contains("Player lookup"));
    }

    #[test]
    fn test_placeholder_tab() {
        let mut app = test_app(Duration::ZERO);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.nav.active(), Tab::Settings);

        let screen = draw(&app);
        assert!(screen.contains("Settings is not part of this demo"));
        assert!(!screen.contains("Player lookup"));
        assert!(screen.contains("Lookups today"));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_micros(250)), "250µs");
        assert_eq!(format_duration(Duration::from_micros(1500)), "1.5ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("ProGamer_VN", 20), "ProGamer_VN");
        assert_eq!(truncate_text("ProGamer_VN", 6), "ProGa…");
    }
}
