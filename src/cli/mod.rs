//! Terminal and SVG rendering of a session

pub mod color;
pub mod plot;
pub mod report;
pub mod table;
