use super::app::{App, Screen};
use super::catalog::CatalogScreen;
use super::home::HomeScreen;
use super::theme::Theme;
use crate::onboarding::{Field, Step, Wizard, CONSENT_TEXT, DISCLAIMER_TEXT, DISCLAIMER_TITLE};
use crate::profile::{ActivityLevel, Gender, Goal, WorkoutTime};
use crate::workout::plan::{DayMark, WeeklyProgress, SUGGESTIONS};
use crate::workout::{format_clock, CatalogEntry, CategoryFilter, Difficulty};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

/// Widest the onboarding card gets on large terminals.
const WIZARD_WIDTH: u16 = 76;

pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
        frame.area(),
    );

    // Header + Body + Footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    match &app.screen {
        Screen::Onboarding(wizard) => render_onboarding(frame, wizard, theme, chunks[1]),
        Screen::Home(home) => render_home(frame, home, theme, chunks[1]),
        Screen::Catalog(catalog) => render_catalog(frame, catalog, theme, chunks[1]),
    }

    render_footer(frame, app, chunks[2]);
}

fn card<'a>(title: impl Into<Line<'a>>, border: ratatui::style::Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border))
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let mut spans = vec![Span::styled(
        "  FitLazy",
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::styled("  ·  ", Style::default().fg(theme.fg_dim)));
    spans.push(Span::styled(
        app.screen.title(),
        Style::default().fg(theme.fg),
    ));

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );
    frame.render_widget(header, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    if let Some(status) = &app.status {
        let footer = Paragraph::new(status.as_str()).style(Style::default().fg(theme.error));
        frame.render_widget(footer, area);
        return;
    }

    let help = match &app.screen {
        Screen::Onboarding(wizard) if wizard.focused_field().is_numeric() => {
            "[0-9] Type  [Bksp] Delete  [↑↓/Tab] Field  [Enter] Next  [Esc] Back  [Ctrl+C] Quit"
        }
        Screen::Onboarding(_) => {
            "[←→/Space] Choose  [↑↓/Tab] Field  [Enter] Next  [Esc] Back  [F2] Theme  [Q] Quit"
        }
        Screen::Home(home) if home.session().is_active() => {
            "[P] Pause  [N] Next exercise  [C] Catalog  [F2] Theme  [Q] Quit"
        }
        Screen::Home(_) => "[Enter/S] Start  [C] Catalog  [F2] Theme  [Q] Quit",
        Screen::Catalog(_) => {
            "[←→/1-4] Tab  [↑↓/jk] Select  [Esc/B] Home  [F2] Theme  [Q] Quit"
        }
    };

    let footer = Paragraph::new(help).style(Style::default().fg(theme.fg_dim));
    frame.render_widget(footer, area);
}

// ---------------------------------------------------------------------------
// Onboarding
// ---------------------------------------------------------------------------

fn render_onboarding(frame: &mut Frame, wizard: &Wizard, theme: &Theme, area: Rect) {
    let width = area.width.min(WIZARD_WIDTH);
    let card_area = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let step = wizard.step();
    let block = card(
        Span::styled(
            format!(" {} ", step.title()),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ),
        theme.accent,
    )
    .title(
        Line::from(Span::styled(
            format!(" {}/4 ", step.number()),
            Style::default().fg(theme.fg_dim),
        ))
        .alignment(Alignment::Right),
    );
    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Progress
            Constraint::Length(1),
            Constraint::Min(0),    // Fields
            Constraint::Length(1), // Buttons
        ])
        .split(inner);

    let progress = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent).bg(theme.highlight_bg))
        .ratio(wizard.progress())
        .label("");
    frame.render_widget(progress, chunks[0]);

    let lines = step_lines(wizard, theme);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[2]);

    let mut buttons = Vec::new();
    if wizard.can_go_back() {
        buttons.push(Span::styled("[Esc] ← Назад", Style::default().fg(theme.fg)));
        buttons.push(Span::raw("     "));
    }
    let next_style = if wizard.can_proceed() {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_dim)
    };
    let arrow = if step == Step::Disclaimer { "" } else { " →" };
    buttons.push(Span::styled(
        format!("[Enter] {}{}", wizard.next_label(), arrow),
        next_style,
    ));
    frame.render_widget(
        Paragraph::new(Line::from(buttons)).alignment(Alignment::Right),
        chunks[3],
    );
}

fn step_lines<'a>(wizard: &Wizard, theme: &Theme) -> Vec<Line<'a>> {
    let draft = wizard.draft();
    let focused = wizard.focused_field();
    let mut lines = Vec::new();

    for &field in wizard.step().fields() {
        let is_focused = field == focused;
        match field {
            Field::Goal => {
                lines.push(field_label(field, is_focused, theme));
                for goal in Goal::ALL {
                    lines.push(option_line(
                        format!("{} {}", goal.icon(), goal.label()),
                        draft.goal == Some(goal),
                        is_focused,
                        theme,
                    ));
                }
            }
            Field::Gender => {
                lines.push(field_label(field, is_focused, theme));
                let spans = Gender::ALL
                    .iter()
                    .flat_map(|g| {
                        option_spans(g.label(), draft.gender == Some(*g), is_focused, theme)
                    })
                    .collect::<Vec<_>>();
                lines.push(Line::from(spans));
            }
            Field::Age | Field::Height | Field::Weight => {
                let value = match field {
                    Field::Age => &draft.age,
                    Field::Height => &draft.height,
                    _ => &draft.weight,
                };
                lines.push(numeric_line(field, value, is_focused, theme));
            }
            Field::ActivityLevel => {
                lines.push(field_label(field, is_focused, theme));
                for level in ActivityLevel::ALL {
                    lines.push(option_line(
                        level.label().to_string(),
                        draft.activity_level == Some(level),
                        is_focused,
                        theme,
                    ));
                }
            }
            Field::WorkoutTime => {
                lines.push(field_label(field, is_focused, theme));
                let spans = WorkoutTime::ALL
                    .iter()
                    .flat_map(|t| {
                        option_spans(t.label(), draft.workout_time == Some(*t), is_focused, theme)
                    })
                    .collect::<Vec<_>>();
                lines.push(Line::from(spans));
            }
            Field::Disclaimer => {
                lines.push(Line::from(Span::styled(
                    format!("⚠ {}", DISCLAIMER_TITLE),
                    Style::default()
                        .fg(theme.error)
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    DISCLAIMER_TEXT,
                    Style::default().fg(theme.fg),
                )));
                lines.push(Line::from(""));
                let mark = if draft.agreed_to_disclaimer {
                    "[x]"
                } else {
                    "[ ]"
                };
                let style = if is_focused {
                    Style::default().fg(theme.accent).bg(theme.highlight_bg)
                } else {
                    Style::default().fg(theme.fg)
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("{} ", mark), style.add_modifier(Modifier::BOLD)),
                    Span::styled(CONSENT_TEXT, style),
                ]));
            }
        }
        lines.push(Line::from(""));
    }

    lines
}

fn field_label<'a>(field: Field, focused: bool, theme: &Theme) -> Line<'a> {
    let (marker, style) = if focused {
        (
            "▸ ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default().fg(theme.fg_dim))
    };
    Line::from(Span::styled(format!("{}{}", marker, field.label()), style))
}

fn option_line<'a>(label: String, selected: bool, focused: bool, theme: &Theme) -> Line<'a> {
    let mut spans = vec![Span::raw("    ")];
    spans.extend(option_spans(&label, selected, focused, theme));
    Line::from(spans)
}

fn option_spans<'a>(label: &str, selected: bool, focused: bool, theme: &Theme) -> Vec<Span<'a>> {
    let mark = if selected { "(●)" } else { "( )" };
    let style = match (selected, focused) {
        (true, true) => Style::default()
            .fg(theme.accent)
            .bg(theme.highlight_bg)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(theme.accent),
        (false, _) => Style::default().fg(theme.fg),
    };
    vec![
        Span::styled(format!("{} {}", mark, label), style),
        Span::raw("   "),
    ]
}

fn numeric_line<'a>(field: Field, value: &str, focused: bool, theme: &Theme) -> Line<'a> {
    let label_style = if focused {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_dim)
    };
    let marker = if focused { "▸ " } else { "  " };

    let input = if value.is_empty() {
        Span::styled(
            format!("{:<6}", field.placeholder()),
            Style::default().fg(theme.fg_dim),
        )
    } else {
        Span::styled(format!("{:<6}", value), Style::default().fg(theme.fg))
    };
    let cursor = if focused { "▏" } else { " " };

    Line::from(vec![
        Span::styled(format!("{}{:<12}", marker, field.label()), label_style),
        Span::styled("[ ", Style::default().fg(theme.fg_dim)),
        input,
        Span::styled(cursor, Style::default().fg(theme.accent)),
        Span::styled("]", Style::default().fg(theme.fg_dim)),
    ])
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

fn render_home(frame: &mut Frame, home: &HomeScreen, theme: &Theme, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(64), Constraint::Percentage(36)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Greeting
            Constraint::Min(0),    // Today's plan
            Constraint::Length(4), // Other workouts
        ])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Weekly progress
            Constraint::Length(5), // AI assistant
            Constraint::Length(5), // Premium
            Constraint::Min(0),
        ])
        .split(columns[1]);

    render_greeting(frame, home, theme, left[0]);
    render_plan(frame, home, theme, left[1]);
    render_suggestions(frame, theme, left[2]);
    render_weekly(frame, theme, right[0]);
    render_assistant_card(frame, theme, right[1]);
    render_premium_card(frame, theme, right[2]);
}

fn render_greeting(frame: &mut Frame, home: &HomeScreen, theme: &Theme, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            " Привет! 👋",
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", home.quote()),
            Style::default().fg(theme.fg_dim),
        )),
    ];
    frame.render_widget(Paragraph::new(text), area);
}

fn render_plan(frame: &mut Frame, home: &HomeScreen, theme: &Theme, area: Rect) {
    let plan = home.plan();
    let session = home.session();
    let active = session.is_active();

    let block = card(
        Span::styled(
            format!(" ⚡ {} ", plan.name),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ),
        theme.accent,
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                          // Summary
            Constraint::Length(if active { 4 } else { 0 }), // Active panel
            Constraint::Min(0),                             // Exercises
            Constraint::Length(1),                          // Controls
        ])
        .split(inner);

    let summary = Line::from(vec![
        Span::styled(
            format!(" 🕐 {} минут", plan.duration_minutes()),
            Style::default().fg(theme.fg_dim),
        ),
        Span::raw("    "),
        Span::styled(
            format!("🔥 {} упражнений", plan.exercise_count()),
            Style::default().fg(theme.fg_dim),
        ),
    ]);
    frame.render_widget(Paragraph::new(summary), chunks[0]);

    if active {
        render_active_panel(frame, home, theme, chunks[1]);
    }

    let current = session.exercise_index();
    let items: Vec<ListItem> = plan
        .exercises
        .iter()
        .enumerate()
        .map(|(idx, exercise)| {
            let done = active && idx < current;
            let is_current = active && idx == current;

            let marker = if done {
                Span::styled(" ✓ ", Style::default().fg(theme.success))
            } else {
                Span::styled(format!(" {} ", idx + 1), Style::default().fg(theme.fg_dim))
            };
            let line = Line::from(vec![
                marker,
                Span::raw(" "),
                Span::styled(exercise.name, Style::default().fg(theme.fg)),
                Span::styled(
                    format!("  · {} сек", exercise.duration_secs),
                    Style::default().fg(theme.fg_dim),
                ),
            ]);

            let style = if is_current {
                Style::default()
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();
    frame.render_widget(List::new(items), chunks[2]);

    let controls = if active {
        Line::from(vec![
            Span::styled("[P] ⏸ Пауза", Style::default().fg(theme.fg)),
            Span::raw("     "),
            Span::styled(
                "[N] Следующее ›",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(Span::styled(
            "[Enter] ▶ Начать тренировку",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
    };
    frame.render_widget(
        Paragraph::new(controls).alignment(Alignment::Center),
        chunks[3],
    );
}

fn render_active_panel(frame: &mut Frame, home: &HomeScreen, theme: &Theme, area: Rect) {
    let session = home.session();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(8)])
        .split(rows[0]);

    let position = format!(
        " Упражнение {} из {}",
        session.exercise_index() + 1,
        session.exercise_count()
    );
    frame.render_widget(
        Paragraph::new(position).style(Style::default().fg(theme.fg_dim)),
        top[0],
    );
    frame.render_widget(
        Paragraph::new(format!("{} ", format_clock(session.time_left())))
            .style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Right),
        top[1],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent).bg(theme.highlight_bg))
        .ratio(session.elapsed_ratio())
        .label("");
    frame.render_widget(gauge, rows[1]);

    if let Some(exercise) = home.current_exercise() {
        frame.render_widget(
            Paragraph::new(format!(" {}", exercise.name))
                .style(Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)),
            rows[2],
        );
    }
}

fn render_suggestions(frame: &mut Frame, theme: &Theme, area: Rect) {
    let block = card(" Другие тренировки ", theme.fg_dim).title(
        Line::from(Span::styled(
            " [C] Все тренировки → ",
            Style::default().fg(theme.accent),
        ))
        .alignment(Alignment::Right),
    );

    let spans: Vec<Span> = SUGGESTIONS
        .iter()
        .flat_map(|s| {
            [
                Span::styled(
                    format!(" {} {}", s.icon, s.name),
                    Style::default().fg(theme.fg),
                ),
                Span::styled(
                    format!(" · {} минут   ", s.minutes),
                    Style::default().fg(theme.fg_dim),
                ),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_weekly(frame: &mut Frame, theme: &Theme, area: Rect) {
    let week = WeeklyProgress::sample();
    let block = card(" Прогресс недели ", theme.fg_dim);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" Выполнено тренировок ", Style::default().fg(theme.fg_dim)),
            Span::styled(
                format!("{} из {}", week.completed, week.target),
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
            ),
        ])),
        rows[0],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent).bg(theme.highlight_bg))
        .ratio(week.ratio())
        .label("");
    frame.render_widget(gauge, rows[1]);

    let days: Vec<Span> = week
        .days
        .iter()
        .map(|(day, mark)| match mark {
            DayMark::Done => Span::styled(
                format!(" {}✓", day),
                Style::default()
                    .fg(theme.bg)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            DayMark::Today => Span::styled(
                format!(" {} ", day),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
            DayMark::Upcoming => {
                Span::styled(format!(" {} ", day), Style::default().fg(theme.fg_dim))
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(days)), rows[3]);
}

fn render_assistant_card(frame: &mut Frame, theme: &Theme, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            " Задавайте вопросы о тренировках",
            Style::default().fg(theme.fg_dim),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " 💬 Открыть чат",
            Style::default().fg(theme.fg_dim),
        )),
    ];
    let block = card(
        Span::styled(
            " ✨ AI-Помощник ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        theme.accent,
    );
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_premium_card(frame: &mut Frame, theme: &Theme, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            " Все тренировки, челленджи и AI-советы",
            Style::default().fg(theme.fg_dim),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Оформить подписку",
            Style::default().fg(theme.secondary),
        )),
    ];
    let block = card(
        Span::styled(
            " 👑 Premium доступ ",
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        ),
        theme.secondary,
    );
    frame.render_widget(Paragraph::new(text).block(block), area);
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

fn render_catalog(frame: &mut Frame, catalog: &CatalogScreen, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Entries
            Constraint::Length(7), // Upsell
        ])
        .split(area);

    let titles: Vec<Line> = CategoryFilter::TABS
        .iter()
        .map(|tab| Line::from(format!(" {} ", tab.label())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(catalog.filter.tab_index())
        .style(Style::default().fg(theme.fg_dim))
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .divider("│")
        .block(card(" ← Назад [Esc] ", theme.fg_dim));
    frame.render_widget(tabs, chunks[0]);

    let entries = catalog.visible();
    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| entry_item(entry, i == catalog.selected, theme))
        .collect();

    let list_block = card(format!(" Тренировки: {} ", entries.len()), theme.accent);
    if items.is_empty() {
        frame.render_widget(
            Paragraph::new(" Нет тренировок в этой категории")
                .style(Style::default().fg(theme.fg_dim))
                .block(list_block),
            chunks[1],
        );
    } else {
        let mut state = ListState::default().with_selected(Some(catalog.selected));
        frame.render_stateful_widget(List::new(items).block(list_block), chunks[1], &mut state);
    }

    render_upsell(frame, theme, chunks[2]);
}

fn entry_item<'a>(entry: &CatalogEntry, selected: bool, theme: &Theme) -> ListItem<'a> {
    let mut title = vec![Span::styled(
        format!(" {} {}", entry.icon, entry.name),
        Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
    )];
    if entry.is_premium {
        title.push(Span::styled(
            "  👑 Premium",
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let difficulty_color = match entry.difficulty {
        Difficulty::Easy => theme.success,
        Difficulty::Medium => theme.accent,
    };
    let details = Line::from(vec![
        Span::styled(
            format!(
                "   🕐 {} мин · {} упражнений · ",
                entry.duration_minutes, entry.exercise_count
            ),
            Style::default().fg(theme.fg_dim),
        ),
        Span::styled(entry.difficulty.label(), Style::default().fg(difficulty_color)),
    ]);

    let action_color = if entry.is_premium {
        theme.secondary
    } else {
        theme.accent
    };
    let tags = Line::from(vec![
        Span::styled(
            "   🎯 Без оборудования · 👥 Для начинающих   ",
            Style::default().fg(theme.fg_dim),
        ),
        Span::styled(entry.action_label(), Style::default().fg(action_color)),
    ]);

    let style = if selected {
        Style::default().bg(theme.highlight_bg)
    } else {
        Style::default()
    };
    ListItem::new(Text::from(vec![Line::from(title), details, tags, Line::from("")]))
        .style(style)
}

fn render_upsell(frame: &mut Frame, theme: &Theme, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "👑 Откройте все тренировки",
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Получите доступ ко всем тренировкам, персональным челленджам и неограниченной поддержке AI-помощника",
            Style::default().fg(theme.fg_dim),
        )),
        Line::from(Span::styled(
            "✓ 50+ тренировок   ✓ AI-помощник   ✓ Челленджи",
            Style::default().fg(theme.fg),
        )),
        Line::from(Span::styled(
            "Оформить подписку за 299₽/мес",
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(card("", theme.secondary)),
        area,
    );
}
