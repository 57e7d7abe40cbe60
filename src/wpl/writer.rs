//! Writer für `QGC WPL 110`-Missionsdateien.

use super::WPL_HEADER;
use crate::core::{MissionHolder, MissionItem};

/// Schreibt eine Mission als WPL-Text (Kopfzeile + ein Item pro Zeile)
pub fn write_wpl_mission(mission: &MissionHolder) -> String {
    let mut output = String::new();
    output.push_str(WPL_HEADER);
    output.push('\n');

    for item in mission.items() {
        output.push_str(&format_item_line(item));
        output.push('\n');
    }

    output
}

fn format_item_line(item: &MissionItem) -> String {
    [
        item.seq.to_string(),
        u8::from(item.current).to_string(),
        item.frame.as_u8().to_string(),
        item.command.as_u16().to_string(),
        format_param(item.param1),
        format_param(item.param2),
        format_param(item.param3),
        format_param(item.param4),
        format_degrees(item.x),
        format_degrees(item.y),
        format_param(item.z),
        u8::from(item.autocontinue).to_string(),
    ]
    .join("\t")
}

/// Parameter und Hoehe: 6 Nachkommastellen
fn format_param(value: f32) -> String {
    format!("{:.6}", value)
}

/// Breiten-/Laengengrad: 8 Nachkommastellen (~1 mm)
fn format_degrees(value: f64) -> String {
    format!("{:.8}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GeoCoordinate, MavCmd};

    #[test]
    fn test_format_item_line() {
        let item = MissionItem::nav(2, MavCmd::NavLand, GeoCoordinate::new(-35.5, 149.25), 0.0);
        assert_eq!(
            format_item_line(&item),
            "2\t0\t3\t21\t0.000000\t0.000000\t0.000000\t0.000000\t-35.50000000\t149.25000000\t0.000000\t1"
        );
    }

    #[test]
    fn test_empty_mission_writes_header_only() {
        assert_eq!(write_wpl_mission(&MissionHolder::new()), "QGC WPL 110\n");
    }
}
