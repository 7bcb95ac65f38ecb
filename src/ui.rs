use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use wee_site::carousel::Key as CarouselKey;
use wee_site::{content, AssetIndex, Carousel, Route, YearGroup, AUTOPLAY_INTERVAL};

/// One row of the flattened board table
struct BoardRow {
    display_year: String,
    name: String,
    position: String,
    file_name: String,
    has_photo: bool,
}

pub struct App {
    pub index: AssetIndex,
    pub roster: Vec<YearGroup>,
    pub route: Route,
    pub carousel: Carousel,
    pub board_state: TableState,
    board_rows: Vec<BoardRow>,
}

impl App {
    pub fn new(index: AssetIndex, roster: Vec<YearGroup>) -> Self {
        let carousel = Carousel::new(
            index
                .event_images()
                .iter()
                .map(|image| image.file_name.clone())
                .collect(),
        );

        let board_rows: Vec<BoardRow> = roster
            .iter()
            .flat_map(|group| {
                group.members.iter().map(|member| BoardRow {
                    display_year: group.display_year.clone(),
                    name: member.name.clone(),
                    position: member.position.clone().unwrap_or_default(),
                    file_name: member.file_name.clone(),
                    has_photo: member.image_src.is_some(),
                })
            })
            .collect();

        let mut board_state = TableState::default();
        if !board_rows.is_empty() {
            board_state.select(Some(0));
        }

        Self {
            index,
            roster,
            route: Route::Home,
            carousel,
            board_state,
            board_rows,
        }
    }

    pub fn next_page(&mut self) {
        self.route = self.route.next();
    }

    pub fn previous_page(&mut self) {
        self.route = self.route.previous();
    }

    fn next_row(&mut self) {
        let len = self.board_rows.len();
        if len == 0 {
            return;
        }
        let i = match self.board_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.board_state.select(Some(i));
    }

    fn previous_row(&mut self) {
        let len = self.board_rows.len();
        if len == 0 {
            return;
        }
        let i = match self.board_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.board_state.select(Some(i));
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, app))?;

        // The wrap frame has been presented; animation may resume
        if !app.carousel.animate() {
            app.carousel.settle();
        }

        let timeout = AUTOPLAY_INTERVAL
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Esc => {
                        if app.carousel.is_open() {
                            app.carousel.handle_key(CarouselKey::Escape);
                        } else {
                            return Ok(());
                        }
                    }
                    KeyCode::Tab => {
                        if key.modifiers.contains(KeyModifiers::SHIFT) {
                            app.previous_page();
                        } else {
                            app.next_page();
                        }
                    }
                    KeyCode::Enter => {
                        if !app.carousel.is_open() {
                            app.carousel.open_at(app.carousel.slide() as isize);
                        }
                    }
                    KeyCode::Char('p') | KeyCode::Char(' ') => {
                        let paused = app.carousel.is_paused();
                        app.carousel.set_paused(!paused);
                    }
                    KeyCode::Right | KeyCode::Char('l') => {
                        if app.carousel.is_open() {
                            app.carousel.handle_key(CarouselKey::ArrowRight);
                        } else {
                            app.carousel.step_forward();
                        }
                    }
                    KeyCode::Left | KeyCode::Char('h') => {
                        if app.carousel.is_open() {
                            app.carousel.handle_key(CarouselKey::ArrowLeft);
                        } else {
                            app.carousel.step_back();
                        }
                    }
                    KeyCode::Down | KeyCode::Char('j') => app.next_row(),
                    KeyCode::Up | KeyCode::Char('k') => app.previous_row(),
                    _ => {}
                }
            }
        }

        // The autoplay timer keeps ticking even while the lightbox is open
        if last_tick.elapsed() >= AUTOPLAY_INTERVAL {
            app.carousel.tick();
            last_tick = Instant::now();
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.route {
        Route::Home => render_home(f, chunks[1], app),
        Route::Board => render_board(f, chunks[1], app),
        Route::Events => render_events(f, chunks[1], app),
        Route::Resources => render_resources(f, chunks[1]),
    }

    render_status_bar(f, chunks[2], app);

    if app.carousel.is_open() {
        render_lightbox(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut tab_spans = vec![];
    for (i, route) in Route::ALL.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *route == app.route {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(route.label(), style));
    }

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Photos: {}", app.index.image_count()),
        Style::default().fg(Color::White),
    ));
    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Years: {}", app.roster.len()),
        Style::default().fg(Color::Green),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", content::SITE_TITLE)),
    );

    f.render_widget(header, area);
}

fn render_home(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(5)])
        .split(area);

    let mut content_lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", content::SITE_TITLE),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let mut chip_spans = vec![Span::raw("  ")];
    for stat in content::HERO_STATS {
        chip_spans.push(Span::styled(
            format!("[{} {}] ", stat.value, stat.label),
            Style::default().fg(Color::Yellow),
        ));
    }
    content_lines.push(Line::from(chip_spans));
    content_lines.push(Line::from(""));
    content_lines.push(Line::from(format!("  {}", content::ABOUT_BLURB)));
    content_lines.push(Line::from(""));
    for event in content::UPCOMING_EVENTS {
        content_lines.push(Line::from(vec![
            Span::styled(
                format!("  {} ", event.date),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::raw(event.title),
            Span::styled(
                format!("  ({})", event.location),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let home = Paragraph::new(content_lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" Home "),
        );
    f.render_widget(home, chunks[0]);

    render_carousel_strip(f, chunks[1], app);
}

fn render_board(f: &mut Frame, area: Rect, app: &mut App) {
    if app.board_rows.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from("  Board photos coming soon"),
            Line::from(""),
            Line::from(Span::styled(
                "  Add photos under photos/board/YYYY with a matching members.json",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" Board "),
        );
        f.render_widget(empty, area);
        return;
    }

    let header_cells = ["Year", "Name", "Position", "File", "Photo"].iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.board_rows.iter().map(|row| {
        let photo = if row.has_photo {
            Cell::from("✓").style(Style::default().fg(Color::Green))
        } else {
            Cell::from("coming soon").style(Style::default().fg(Color::Yellow))
        };

        Row::new(vec![
            Cell::from(row.display_year.clone()),
            Cell::from(row.name.clone()),
            Cell::from(row.position.clone()),
            Cell::from(row.file_name.clone()),
            photo,
        ])
        .height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(24),
            Constraint::Length(20),
            Constraint::Length(28),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Board Roster "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.board_state);
}

fn render_events(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    render_carousel_strip(f, chunks[0], app);

    let mut lines = vec![Line::from("")];
    for track in content::PROGRAMMING {
        lines.push(Line::from(Span::styled(
            format!("  {}", track.title),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("  {}", track.description)));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("  Calendar: ", Style::default().fg(Color::Yellow)),
        Span::styled(
            content::CALENDAR_EMBED_URL,
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    let programming = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Programming "),
    );
    f.render_widget(programming, chunks[1]);
}

fn render_resources(f: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from("")];
    for group in content::RESOURCE_GROUPS {
        lines.push(Line::from(Span::styled(
            format!("  {} ({} resources)", group.title, group.items.len()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        for item in group.items {
            let mut spans = vec![Span::raw(format!("    • {}", item.name))];
            if let Some(href) = item.href {
                spans.push(Span::styled(
                    format!("  {}", href),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(""));
    }

    let resources = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Resources "),
    );
    f.render_widget(resources, area);
}

/// Carousel strip rendered as a window of file names around the current
/// slide. Rendering doubles as the layout measurement that arms autoplay.
fn render_carousel_strip(f: &mut Frame, area: Rect, app: &mut App) {
    app.carousel.set_item_width(area.width.saturating_sub(2));

    if app.carousel.is_empty() {
        return; // nothing to rotate, render nothing
    }

    let len = app.carousel.len();
    let slide = app.carousel.slide();

    let mut spans = vec![Span::raw(" ")];
    for offset in 0..len.min(4) {
        let i = (slide + offset) % len;
        let style = if offset == 0 {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("▌{}▐ ", app.carousel.images()[i]), style));
    }

    let state = if app.carousel.is_paused() {
        Span::styled("⏸ paused", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("▶ playing", Style::default().fg(Color::Green))
    };

    let strip = Paragraph::new(vec![
        Line::from(spans),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!("{}/{} ", slide + 1, len),
                Style::default().fg(Color::Cyan),
            ),
            state,
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Event Photos "),
    );

    f.render_widget(strip, area);
}

fn render_lightbox(f: &mut Frame, app: &App) {
    let image = match app.carousel.lightbox_image() {
        Some(image) => image,
        None => return,
    };
    let index = app.carousel.lightbox_index().unwrap_or(0);

    let area = centered_rect(60, 40, f.size());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", image),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {} / {}", index + 1, app.carousel.len()),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  ←/→ navigate  Esc close",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )),
    ];

    let lightbox = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Lightbox "),
    );

    f.render_widget(lightbox, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = vec![Span::styled(
        format!(" {} ", app.route.label()),
        Style::default().fg(Color::Cyan),
    )];

    status_spans.push(Span::raw("| "));
    status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Page | "));
    status_spans.push(Span::styled("←/→", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Slide | "));
    status_spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Lightbox | "));
    status_spans.push(Span::styled("p", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Pause | "));
    status_spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Roster | "));
    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    if app.carousel.is_paused() {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled(
            "autoplay paused",
            Style::default().fg(Color::Yellow),
        ));
    }

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}
