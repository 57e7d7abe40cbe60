//! Darstellungs-Kategorie eines Wegpunkts und die Theme-Schnittstelle.
//!
//! Die Farbe eines Markers wird nie gespeichert: sie ergibt sich bei jedem
//! Redraw aus Item, Missionszustand und Theme.

use super::{MavCmd, MissionItem, WaypointSeq};

/// Farbliche Kategorie eines Wegpunkt-Markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaypointStyle {
    /// Home-Position
    Home,
    /// Aktuelles Ziel des Fahrzeugs
    CurrentTarget,
    /// Startpunkt
    Takeoff,
    /// Landepunkt
    Land,
    /// Kreisen/Warten
    Loiter,
    /// Rueckkehr zum Startpunkt
    ReturnToLaunch,
    /// Normaler Wegpunkt
    Waypoint,
    /// Alle uebrigen Kommandos
    Other,
}

impl WaypointStyle {
    /// Alle Kategorien in Anzeige-Reihenfolge
    pub const ALL: [WaypointStyle; 8] = [
        WaypointStyle::Home,
        WaypointStyle::CurrentTarget,
        WaypointStyle::Takeoff,
        WaypointStyle::Land,
        WaypointStyle::Loiter,
        WaypointStyle::ReturnToLaunch,
        WaypointStyle::Waypoint,
        WaypointStyle::Other,
    ];
}

/// Missionszustand, auf den sich die Farbgebung bezieht.
///
/// Gehoert dem Aufrufer; kann sich jederzeit ohne Wissen der Annotation aendern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MissionState {
    /// Sequenznummer des aktuellen Ziels (vom Fahrzeug gemeldet)
    pub current_seq: Option<WaypointSeq>,
    /// Sequenznummer des Home-Items (ArduPilot: 0)
    pub home_seq: Option<WaypointSeq>,
}

impl MissionState {
    /// Zustand mit gesetztem aktuellem Ziel
    pub fn with_current(current_seq: WaypointSeq) -> Self {
        Self {
            current_seq: Some(current_seq),
            ..Self::default()
        }
    }
}

/// Liefert Farben fuer Wegpunkt-Kategorien (RGBA, 0.0..=1.0)
pub trait ThemeProvider {
    /// Farbe fuer eine Kategorie
    fn waypoint_color(&self, style: WaypointStyle) -> [f32; 4];
}

/// Ermittelt die Kategorie eines Items im gegebenen Missionszustand.
///
/// Home hat Vorrang vor dem aktuellen Ziel, beide vor dem Kommando-Typ.
pub fn waypoint_style(item: &MissionItem, state: &MissionState) -> WaypointStyle {
    if state.home_seq == Some(item.seq) {
        return WaypointStyle::Home;
    }
    if state.current_seq == Some(item.seq) {
        return WaypointStyle::CurrentTarget;
    }

    match item.command {
        MavCmd::NavTakeoff => WaypointStyle::Takeoff,
        MavCmd::NavLand => WaypointStyle::Land,
        MavCmd::NavReturnToLaunch => WaypointStyle::ReturnToLaunch,
        MavCmd::NavWaypoint => WaypointStyle::Waypoint,
        cmd if cmd.is_loiter() => WaypointStyle::Loiter,
        _ => WaypointStyle::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoCoordinate;

    fn item(seq: WaypointSeq, command: MavCmd) -> MissionItem {
        MissionItem::nav(seq, command, GeoCoordinate::new(0.0, 0.0), 10.0)
    }

    #[test]
    fn command_decides_without_mission_state() {
        let state = MissionState::default();
        assert_eq!(
            waypoint_style(&item(1, MavCmd::NavTakeoff), &state),
            WaypointStyle::Takeoff
        );
        assert_eq!(
            waypoint_style(&item(1, MavCmd::NavLoiterTurns), &state),
            WaypointStyle::Loiter
        );
        assert_eq!(
            waypoint_style(&item(1, MavCmd::Other(93)), &state),
            WaypointStyle::Other
        );
    }

    #[test]
    fn home_beats_current_target() {
        let state = MissionState {
            current_seq: Some(0),
            home_seq: Some(0),
        };
        assert_eq!(
            waypoint_style(&item(0, MavCmd::NavWaypoint), &state),
            WaypointStyle::Home
        );
        assert_eq!(
            waypoint_style(&item(2, MavCmd::NavLand), &MissionState::with_current(2)),
            WaypointStyle::CurrentTarget
        );
    }
}
