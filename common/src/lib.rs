#![warn(missing_docs)]

//! Common consists of the shared types between the parts of the topside
//! software stack. More specifically, the telemetry reading record produced
//! by the vehicle and the display formatting rules every rendering surface
//! applies to it are both stored here.

/// Pure display formatting for timestamps and sensor values.
pub mod format;

/// The telemetry reading record and its field-domain validation.
pub mod telemetry;

/// Trait providing a method to create a pretty, terminal-friendly
/// representation of the underlying.
pub trait ToPrettyString {
  /// Provides a representation of the underlying which is preferable when
  /// displaying to the console but not as a raw string.
  ///
  /// ANSI codes such as color codes, for example, can be used in a "pretty
  /// string" but would be atypical in a `fmt::Display` implementation.
  fn to_pretty_string(&self) -> String;
}
