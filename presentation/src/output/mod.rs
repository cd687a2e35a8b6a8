pub mod console;
pub mod dot;
pub mod formatter;
