//! Import/Export für Missionsdateien im Format `QGC WPL 110`.
//!
//! Eine Kopfzeile, danach ein Missions-Item pro Zeile mit zwölf
//! tab-getrennten Feldern.

pub mod parser;
pub mod writer;

pub use parser::parse_wpl_mission;
pub use writer::write_wpl_mission;

/// Kopfzeile einer WPL-Datei
pub const WPL_HEADER: &str = "QGC WPL 110";
