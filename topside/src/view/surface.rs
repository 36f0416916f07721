use crate::view::{chart::ChartSpec, table::TableRow};
use std::fmt;

/// One of the five named fields on the status panel.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StatusField {
  /// Current depth in meters.
  Depth,

  /// Current compass heading in degrees.
  Heading,

  /// Current speed in knots.
  Speed,

  /// Remaining battery charge as a percentage.
  Battery,

  /// Date and time of the most recent reading.
  LastUpdated,
}

impl StatusField {
  /// Every status field, in display order.
  pub const ALL: [StatusField; 5] = [
    StatusField::Depth,
    StatusField::Heading,
    StatusField::Speed,
    StatusField::Battery,
    StatusField::LastUpdated,
  ];

  /// The operator-facing label for this field.
  pub fn label(self) -> &'static str {
    match self {
      Self::Depth => "Depth (m)",
      Self::Heading => "Heading (°)",
      Self::Speed => "Speed (kn)",
      Self::Battery => "Battery (%)",
      Self::LastUpdated => "Last Updated",
    }
  }
}

/// One of the four independently rendered dashboard regions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Region {
  /// The five-field status panel.
  Status,

  /// The reverse-chronological reading table.
  Table,

  /// The depth-over-time chart.
  DepthChart,

  /// The temperature and pressure chart.
  EnvironmentChart,
}

impl fmt::Display for Region {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Self::Status => "status panel",
        Self::Table => "telemetry log",
        Self::DepthChart => "depth chart",
        Self::EnvironmentChart => "environment chart",
      }
    )
  }
}

/// A rendering target for the dashboard.
///
/// Every write replaces previous state wholesale: a field write supersedes
/// the field's old value, a row replacement supersedes the whole table, and
/// a chart render supersedes the chart of the same kind. Rendering the same
/// projections onto a surface twice therefore leaves it unchanged.
pub trait Surface {
  /// Writes one named status field, replacing its previous value.
  fn set_field(&mut self, field: StatusField, value: String);

  /// Replaces the table region's rows wholesale.
  fn replace_rows(&mut self, rows: Vec<TableRow>);

  /// Replaces the chart of the spec's kind with the spec's contents.
  fn render_chart(&mut self, chart: ChartSpec);

  /// Marks a region as failed, displaying the message in its place.
  fn report_failure(&mut self, region: Region, message: String);
}
