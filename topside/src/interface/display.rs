use crate::{
  feed::TelemetryFeed,
  view::{
    self,
    chart::{ChartKind, ChartSpec},
    table::TableRow,
    Region,
    StatusField,
    Surface,
  },
};
use common::format;
use crossterm::{
  event::{
    self,
    DisableMouseCapture,
    EnableMouseCapture,
    Event,
    KeyCode,
    KeyModifiers,
  },
  execute,
  terminal::{
    disable_raw_mode,
    enable_raw_mode,
    EnterAlternateScreen,
    LeaveAlternateScreen,
  },
};
use ratatui::{prelude::*, widgets::*};
use std::{
  collections::HashMap,
  error::Error,
  io::{self, Stdout},
  time::Duration,
};

const TOPSIDE_CYAN: Color = Color::from_u32(0x0059d2e6);

const WHITE: Color = Color::from_u32(0x00eeeeee);

const GREY: Color = Color::from_u32(0x00bbbbbb);

const DESATURATED_GREEN: Color = Color::from_u32(0x007aff85);
const DESATURATED_RED: Color = Color::from_u32(0x00ff5959);
const DESATURATED_BLUE: Color = Color::from_u32(0x0075a8ff);

const TOPSIDE_STYLE: Style =
  Style::new().bg(Color::from_u32(0)).fg(TOPSIDE_CYAN);

/// Line colors assigned to chart series by position.
const SERIES_COLORS: [Color; 2] = [DESATURATED_GREEN, DESATURATED_BLUE];

/// The dashboard's view models, projected once at startup.
///
/// Implements [`Surface`] by storing wholesale replacements; the draw
/// functions below read back from it on every tick.
struct ScreenSurface {
  fields: HashMap<StatusField, String>,
  rows: Vec<TableRow>,
  charts: HashMap<ChartKind, ChartSpec>,
  failures: HashMap<Region, String>,
}

impl ScreenSurface {
  fn new() -> ScreenSurface {
    ScreenSurface {
      fields: HashMap::new(),
      rows: Vec::new(),
      charts: HashMap::new(),
      failures: HashMap::new(),
    }
  }
}

impl Surface for ScreenSurface {
  fn set_field(&mut self, field: StatusField, value: String) {
    self.fields.insert(field, value);
  }

  fn replace_rows(&mut self, rows: Vec<TableRow>) {
    self.rows = rows;
  }

  fn render_chart(&mut self, chart: ChartSpec) {
    self.charts.insert(chart.kind, chart);
  }

  fn report_failure(&mut self, region: Region, message: String) {
    self.failures.insert(region, message);
  }
}

/// Runs the terminal dashboard over the given feed.
///
/// The feed is projected exactly once; every tick after that redraws the
/// same view models until the operator quits with `q` or `Ctrl-C`. Returns
/// once the terminal has been restored.
pub fn display(feed: &TelemetryFeed) -> io::Result<()> {
  // setup terminal
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend)?;

  let mut surface = ScreenSurface::new();
  view::render_dashboard(feed, &mut surface);

  let tick_rate = Duration::from_millis(100);

  loop {
    // Draw the dashboard and handle user input, stop if told to.
    if !display_round(&mut terminal, &surface, tick_rate) {
      break;
    }
  }

  // Attempt to restore terminal
  if let Err(error) = restore_terminal(&mut terminal) {
    return Err(io::Error::new(io::ErrorKind::Other, error.to_string()));
  }

  Ok(())
}

/// A function called every display round that draws the ui and handles user
/// input.
///
/// Returns false once the operator has asked to quit.
fn display_round(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  surface: &ScreenSurface,
  tick_rate: Duration,
) -> bool {
  // Draw the TUI
  let _ = terminal.draw(|f| dashboard_ui(f, surface));

  // event::poll doubles as the tick timer: it returns early when input is
  // pending and times out quietly otherwise.
  let has_input = match event::poll(tick_rate) {
    Ok(ready) => ready,
    Err(_) => return false,
  };

  if has_input {
    let event = match event::read() {
      Ok(event) => event,
      Err(_) => return false,
    };

    if let Event::Key(key) = event {
      if let KeyCode::Char('q') | KeyCode::Char('Q') = key.code {
        return false;
      }

      if let KeyCode::Char('c') | KeyCode::Char('C') = key.code {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
          return false;
        }
      }
    }
  }

  true
}

/// Attempts to restore the terminal to its pre-dashboard state.
fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result<(), Box<dyn Error>> {
  disable_raw_mode()?;
  execute!(
    terminal.backend_mut(),
    LeaveAlternateScreen,
    DisableMouseCapture
  )?;
  terminal.show_cursor()?;

  Ok(())
}

/// Top-level frame layout: status panel and telemetry log on the left, the
/// two charts stacked on the right.
fn dashboard_ui(f: &mut Frame, surface: &ScreenSurface) {
  let columns = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Length(58), Constraint::Fill(1)])
    .split(f.size());

  let left = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(7), Constraint::Fill(1)])
    .split(columns[0]);

  let right = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
    .split(columns[1]);

  draw_status(f, left[0], surface);
  draw_table(f, left[1], surface);
  draw_chart(f, right[0], surface, ChartKind::Depth);
  draw_chart(f, right[1], surface, ChartKind::Environment);
}

/// Draws the five-field status panel, or its failure notice.
fn draw_status(f: &mut Frame, area: Rect, surface: &ScreenSurface) {
  if let Some(message) = surface.failures.get(&Region::Status) {
    draw_failure(f, area, "Status", message);
    return;
  }

  let name_style = TOPSIDE_STYLE.bold();
  let data_style = TOPSIDE_STYLE.fg(WHITE);

  let mut rows = Vec::with_capacity(StatusField::ALL.len());

  for field in StatusField::ALL {
    let value = surface
      .fields
      .get(&field)
      .map_or("", |value| value.as_str());

    rows.push(Row::new(vec![
      Cell::from(Span::from(field.label()).into_right_aligned_line())
        .style(name_style),
      Cell::from(Span::from(value).into_right_aligned_line())
        .style(data_style),
    ]));
  }

  let widths = [Constraint::Length(14), Constraint::Fill(1)];

  let status_table: Table<'_> = Table::new(rows, widths)
    .style(TOPSIDE_STYLE)
    .block(Block::default().title("Status").borders(Borders::ALL));

  f.render_widget(status_table, area);
}

/// Draws the reverse-chronological telemetry log.
fn draw_table(f: &mut Frame, area: Rect, surface: &ScreenSurface) {
  if let Some(message) = surface.failures.get(&Region::Table) {
    draw_failure(f, area, "Telemetry Log", message);
    return;
  }

  let data_style = TOPSIDE_STYLE.fg(WHITE);

  let mut rows = Vec::with_capacity(surface.rows.len());

  for row in &surface.rows {
    rows.push(
      Row::new(
        row
          .cells()
          .into_iter()
          .map(|cell| {
            Cell::from(Span::from(cell).into_right_aligned_line())
          })
          .collect::<Vec<_>>(),
      )
      .style(data_style),
    );
  }

  let widths = [
    Constraint::Length(8),
    Constraint::Length(9),
    Constraint::Length(11),
    Constraint::Length(10),
    Constraint::Length(11),
  ];

  let telemetry_table: Table<'_> = Table::new(rows, widths)
    .style(TOPSIDE_STYLE)
    .header(
      Row::new(
        TableRow::HEADERS
          .into_iter()
          .map(|header| Span::from(header).into_centered_line())
          .collect::<Vec<_>>(),
      )
      .style(Style::new().bold())
      .bottom_margin(1),
    )
    .block(Block::default().title("Telemetry Log").borders(Borders::ALL));

  f.render_widget(telemetry_table, area);
}

/// Draws one of the line charts from its projected spec.
fn draw_chart(
  f: &mut Frame,
  area: Rect,
  surface: &ScreenSurface,
  kind: ChartKind,
) {
  let (fallback_title, region) = match kind {
    ChartKind::Depth => ("Depth Over Time", Region::DepthChart),
    ChartKind::Environment => {
      ("Temperature and Pressure", Region::EnvironmentChart)
    }
  };

  if let Some(message) = surface.failures.get(&region) {
    draw_failure(f, area, fallback_title, message);
    return;
  }

  let spec = match surface.charts.get(&kind) {
    Some(spec) => spec,
    None => return,
  };

  let mut datasets = Vec::with_capacity(spec.series.len());

  for (index, series) in spec.series.iter().enumerate() {
    let color = SERIES_COLORS[index % SERIES_COLORS.len()];

    datasets.push(
      Dataset::default()
        .name(series.name.as_str())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&series.points),
    );
  }

  let point_count = spec.x_labels.len();
  let x_max = if point_count > 1 {
    (point_count - 1) as f64
  } else {
    1.0
  };

  let y_mid = (spec.y_bounds[0] + spec.y_bounds[1]) / 2.0;
  let y_labels = vec![
    Span::from(format::one_decimal(spec.y_bounds[0])),
    Span::from(format::one_decimal(y_mid)),
    Span::from(format::one_decimal(spec.y_bounds[1])),
  ];

  let chart = Chart::new(datasets)
    .style(TOPSIDE_STYLE)
    .block(
      Block::default()
        .title(spec.title.as_str())
        .borders(Borders::ALL),
    )
    .x_axis(
      Axis::default()
        .style(TOPSIDE_STYLE.fg(GREY))
        .bounds([0.0, x_max])
        .labels(axis_labels(&spec.x_labels)),
    )
    .y_axis(
      Axis::default()
        .style(TOPSIDE_STYLE.fg(GREY))
        .bounds(spec.y_bounds)
        .labels(y_labels),
    );

  f.render_widget(chart, area);
}

/// Fills a region with its failure notice instead of its usual content.
fn draw_failure(f: &mut Frame, area: Rect, title: &str, message: &str) {
  let notice = Paragraph::new(message)
    .style(TOPSIDE_STYLE.fg(DESATURATED_RED))
    .wrap(Wrap { trim: true })
    .block(Block::default().title(title).borders(Borders::ALL));

  f.render_widget(notice, area);
}

/// Thins a full set of tick labels down to first, middle, and last so the
/// x axis stays legible at any terminal width.
fn axis_labels(labels: &[String]) -> Vec<Span<'_>> {
  match labels.len() {
    0 => Vec::new(),
    1 => vec![Span::from(labels[0].as_str())],
    2 => vec![
      Span::from(labels[0].as_str()),
      Span::from(labels[1].as_str()),
    ],
    len => vec![
      Span::from(labels[0].as_str()),
      Span::from(labels[len / 2].as_str()),
      Span::from(labels[len - 1].as_str()),
    ],
  }
}
