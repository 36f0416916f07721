mod display;

pub use display::display;
