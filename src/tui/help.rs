use ratatui::{
    layout::Rect,
    style::Color,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn key_line(key: &'static str, pad: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(key, Style::default().fg(Color::Magenta)),
        Span::raw(pad),
        Span::raw(action),
    ])
}

pub fn draw_help(area: Rect, f: &mut Frame) {
    let p = Paragraph::new(vec![
        Line::from("Keybinds:"),
        key_line("Esc / Ctrl-C", "  ", "Quit"),
        key_line("tab", "         ", "Switch input field"),
        key_line("enter", "       ", "Start / stop the search"),
        key_line("Ctrl-E", "      ", "Export results as XLSX"),
        key_line("Ctrl-X", "      ", "Export results as XML"),
        key_line("F1", "          ", "Toggle this help"),
        Line::from(""),
        Line::from("Form:"),
        Line::from("  Type into the focused field while idle;"),
        Line::from("  both fields are locked during a run."),
    ])
    .block(Block::default().borders(Borders::ALL).title("Help"));
    f.render_widget(p, area);
}
