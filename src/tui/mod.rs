mod help;
mod state;

use crate::cli::{build_config, Cli};
use crate::export::tabular;
use crate::model::{ExportFormat, RunEvent};
use crate::orchestrator::{self, UiCommand};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Terminal,
};
use state::{Focus, UiState};
use std::{io, time::Duration, time::Instant};
use tokio::sync::mpsc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

pub async fn run(args: Cli) -> Result<()> {
    // Unbounded channels avoid backpressure between the emitter and the view.
    let (event_tx, event_rx) = mpsc::unbounded_channel::<RunEvent>();
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<UiCommand>();

    // TUI runs in a dedicated thread to keep all blocking I/O out of the
    // Tokio runtime.
    let ui_args = args.clone();
    let ui_handle = std::thread::spawn(move || run_threaded(ui_args, event_rx, cmd_tx));

    let res = orchestrator::run_session(build_config(&args), event_tx, cmd_rx).await;

    let join_res = tokio::task::spawn_blocking(move || ui_handle.join()).await;
    if let Ok(joined) = join_res {
        match joined {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(e),
            Err(_) => return Err(anyhow::anyhow!("TUI thread panicked")),
        }
    }

    res
}

/// Run the TUI loop on a dedicated thread.
fn run_threaded(
    args: Cli,
    mut event_rx: UnboundedReceiver<RunEvent>,
    cmd_tx: UnboundedSender<UiCommand>,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).ok();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut state = UiState {
        keyword: args.keyword.clone().unwrap_or_default(),
        city: args.city.clone().unwrap_or_default(),
        ..Default::default()
    };

    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    let res = loop {
        // Drain events without blocking to keep the UI responsive.
        while let Ok(ev) = event_rx.try_recv() {
            state.apply_event(ev);
        }

        if last_tick.elapsed() >= tick_rate {
            terminal.draw(|f| draw(f.area(), f, &state)).ok();
            last_tick = Instant::now();
        }

        // Poll input with a short timeout to avoid blocking the render loop.
        if event::poll(Duration::from_millis(10)).unwrap_or(false) {
            if let Ok(Event::Key(k)) = event::read() {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match (k.modifiers, k.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                        let _ = cmd_tx.send(UiCommand::Quit);
                        break Ok(());
                    }
                    (_, KeyCode::Esc) => {
                        if state.show_help {
                            state.show_help = false;
                        } else {
                            let _ = cmd_tx.send(UiCommand::Quit);
                            break Ok(());
                        }
                    }
                    (_, KeyCode::F(1)) => {
                        state.show_help = !state.show_help;
                    }
                    (_, KeyCode::Tab) => {
                        state.focus = state.focus.next();
                    }
                    (_, KeyCode::Enter) => {
                        if state.running {
                            let _ = cmd_tx.send(UiCommand::Stop);
                        } else {
                            let _ = cmd_tx.send(UiCommand::Start {
                                keyword: state.keyword.clone(),
                                city: state.city.clone(),
                            });
                        }
                    }
                    (KeyModifiers::CONTROL, KeyCode::Char('e')) => {
                        let _ = cmd_tx.send(UiCommand::Export(ExportFormat::Xlsx));
                    }
                    (KeyModifiers::CONTROL, KeyCode::Char('x')) => {
                        let _ = cmd_tx.send(UiCommand::Export(ExportFormat::Xml));
                    }
                    (_, KeyCode::Backspace) => {
                        state.pop_char();
                    }
                    (_, KeyCode::Char(c)) => {
                        state.push_char(c);
                    }
                    _ => {}
                }
            }
        }
    };

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

fn draw(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // form
            Constraint::Length(1), // status
            Constraint::Min(4),    // results
            Constraint::Length(1), // footer
        ])
        .split(area);

    if state.show_help {
        help::draw_help(area, f);
        return;
    }

    draw_form(chunks[0], f, state);
    draw_status(chunks[1], f, state);
    draw_results(chunks[2], f, state);
    draw_footer(chunks[3], f, state);
}

fn input_block(title: &'static str, focused: bool, running: bool) -> Block<'static> {
    let style = if running {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(style)
}

fn draw_form(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(40),
            Constraint::Percentage(20),
        ])
        .split(area);

    let keyword = Paragraph::new(state.keyword.as_str()).block(input_block(
        "Search Keyword",
        state.focus == Focus::Keyword,
        state.running,
    ));
    f.render_widget(keyword, cols[0]);

    let city = Paragraph::new(state.city.as_str()).block(input_block(
        "City/Location",
        state.focus == Focus::City,
        state.running,
    ));
    f.render_widget(city, cols[1]);

    let (label, color) = if state.running {
        ("Extracting…  [enter] stop", Color::Red)
    } else {
        ("Idle  [enter] start", Color::Green)
    };
    let control = Paragraph::new(label)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL).title("Run"));
    f.render_widget(control, cols[2]);
}

fn draw_status(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    let mut spans = vec![Span::styled(
        format!(" {} businesses found", state.results.len()),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if !state.info.is_empty() {
        spans.push(Span::raw("  —  "));
        spans.push(Span::styled(
            state.info.clone(),
            Style::default().fg(Color::Cyan),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_results(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    // Borders plus header occupy three rows; show the newest rows that fit.
    let visible = (area.height as usize).saturating_sub(3).max(1);
    let all = tabular::rows(&state.results);
    let start = all.len().saturating_sub(visible);

    let header = Row::new(
        ["Name", "Phone", "Email", "Website", "Address", "Rating"]
            .into_iter()
            .map(|h| Cell::from(Span::styled(h, Style::default().add_modifier(Modifier::BOLD)))),
    );
    let rows = all[start..].iter().map(|cells| {
        Row::new(vec![
            Cell::from(cells[1].clone()),
            Cell::from(cells[2].clone()),
            Cell::from(cells[3].clone()),
            Cell::from(cells[4].clone()),
            Cell::from(cells[5].clone()),
            Cell::from(format!("{} ★ ({})", cells[6], cells[7])),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(20),
            Constraint::Percentage(13),
            Constraint::Percentage(20),
            Constraint::Percentage(17),
            Constraint::Percentage(18),
            Constraint::Percentage(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search Results"),
    );
    f.render_widget(table, area);
}

fn draw_footer(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    let mut spans = vec![
        Span::styled("tab", Style::default().fg(Color::Magenta)),
        Span::raw(" field  "),
        Span::styled("enter", Style::default().fg(Color::Magenta)),
        Span::raw(" start/stop  "),
        Span::styled("^E", Style::default().fg(Color::Magenta)),
        Span::raw(" xlsx  "),
        Span::styled("^X", Style::default().fg(Color::Magenta)),
        Span::raw(" xml  "),
        Span::styled("F1", Style::default().fg(Color::Magenta)),
        Span::raw(" help  "),
        Span::styled("esc", Style::default().fg(Color::Magenta)),
        Span::raw(" quit"),
    ];
    if let Some(path) = &state.last_exported_path {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(
            path.clone(),
            Style::default().fg(Color::Cyan),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
