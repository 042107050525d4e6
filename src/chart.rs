// 📊 Chart - interactive grouped bar chart of the USD estimates
// Two side-by-side panels (Ethereum / Optimism), one bar group per
// scenario, three bars per group with $x.xx data labels

use crate::cost::{CostTable, Operation};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;

// Bar heights are integer micro-dollars so sub-cent Optimism estimates
// still get a visible bar; the text label carries the exact dollar value
const USD_SCALE: f64 = 1e6;

fn operation_color(operation: Operation) -> Color {
    match operation {
        Operation::Create => Color::White,
        Operation::Sign => Color::Gray,
        Operation::Approve => Color::DarkGray,
    }
}

pub struct ChartApp {
    pub eth: CostTable,
    pub op: CostTable,
}

impl ChartApp {
    pub fn new(eth: CostTable, op: CostTable) -> Self {
        ChartApp { eth, op }
    }
}

pub fn run_chart(app: &ChartApp) -> Result<()> {
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
    app: &ChartApp,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &ChartApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(10),   // charts
            Constraint::Length(1), // legend / keys
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_network_panel(f, panels[0], &app.eth);
    render_network_panel(f, panels[1], &app.op);

    render_legend(f, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect, app: &ChartApp) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Estimated price in USD per operation",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  (Ether at ${:.2})", app.eth.eth_price_usd)),
    ]));
    f.render_widget(header, area);
}

fn render_network_panel(f: &mut Frame, area: Rect, table: &CostTable) {
    let mut chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(table.network.name()),
        )
        .bar_width(9)
        .bar_gap(1)
        .group_gap(3);

    let groups: Vec<BarGroup> = table
        .rows
        .iter()
        .map(|row| {
            let bars: Vec<Bar> = Operation::ALL
                .iter()
                .map(|&op| usd_bar(row.usd(op), op))
                .collect();
            BarGroup::default()
                .label(Line::from(row.label))
                .bars(&bars)
        })
        .collect();

    for group in groups {
        chart = chart.data(group);
    }

    f.render_widget(chart, area);
}

/// One bar with a `$x.xx` data label; zero-valued bars stay unlabeled
fn usd_bar(usd: f64, operation: Operation) -> Bar<'static> {
    let color = operation_color(operation);
    let text = if usd == 0.0 {
        String::new()
    } else {
        format!("${:.2}", usd)
    };

    Bar::default()
        .value((usd * USD_SCALE).round() as u64)
        .text_value(text)
        .style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color))
}

fn render_legend(f: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for op in Operation::ALL {
        spans.push(Span::styled(
            "■ ",
            Style::default().fg(operation_color(op)),
        ));
        spans.push(Span::raw(format!("{}   ", op.name())));
    }
    spans.push(Span::styled(
        "q/Esc: quit",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
