//! Leitungsnahes Missions-Item (Layout wie MAVLink `MISSION_ITEM`).

use super::GeoCoordinate;
use serde::{Deserialize, Serialize};

/// Protokoll-Sequenznummer eines Missions-Items
pub type WaypointSeq = u16;

/// Erste Command-ID ausserhalb des NAV-Bereichs (MAV_CMD_NAV_LAST)
pub const MAV_CMD_NAV_LAST: u16 = 95;

/// Koordinatensystem eines Missions-Items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum MavFrame {
    /// WGS84, Hoehe ueber Meeresspiegel
    Global,
    /// Lokal North-East-Down
    LocalNed,
    /// Kein Koordinatensystem (reine Kommandos)
    Mission,
    /// WGS84, Hoehe relativ zum Home-Punkt
    #[default]
    GlobalRelativeAlt,
    /// Lokal East-North-Up
    LocalEnu,
    /// WGS84, Hoehe ueber Gelaende
    GlobalTerrainAlt,
    /// Unbekannter Frame (roher Wert bleibt erhalten)
    Other(u8),
}

impl MavFrame {
    /// Konvertiert die rohe Frame-ID
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Global,
            1 => Self::LocalNed,
            2 => Self::Mission,
            3 => Self::GlobalRelativeAlt,
            4 => Self::LocalEnu,
            10 => Self::GlobalTerrainAlt,
            other => Self::Other(other),
        }
    }

    /// Rohe Frame-ID
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Global => 0,
            Self::LocalNed => 1,
            Self::Mission => 2,
            Self::GlobalRelativeAlt => 3,
            Self::LocalEnu => 4,
            Self::GlobalTerrainAlt => 10,
            Self::Other(value) => value,
        }
    }

    /// x/y sind Breiten-/Laengengrad
    pub fn is_global(self) -> bool {
        matches!(
            self,
            Self::Global | Self::GlobalRelativeAlt | Self::GlobalTerrainAlt
        )
    }
}

impl From<u8> for MavFrame {
    fn from(value: u8) -> Self {
        Self::from_u8(value)
    }
}

impl From<MavFrame> for u8 {
    fn from(frame: MavFrame) -> Self {
        frame.as_u8()
    }
}

/// Kommando eines Missions-Items.
///
/// Nur die fuer die Kartendarstellung relevanten NAV-Kommandos haben eigene
/// Varianten; alles andere landet in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub enum MavCmd {
    /// MAV_CMD_NAV_WAYPOINT
    #[default]
    NavWaypoint,
    /// MAV_CMD_NAV_LOITER_UNLIM
    NavLoiterUnlim,
    /// MAV_CMD_NAV_LOITER_TURNS
    NavLoiterTurns,
    /// MAV_CMD_NAV_LOITER_TIME
    NavLoiterTime,
    /// MAV_CMD_NAV_RETURN_TO_LAUNCH
    NavReturnToLaunch,
    /// MAV_CMD_NAV_LAND
    NavLand,
    /// MAV_CMD_NAV_TAKEOFF
    NavTakeoff,
    /// Sonstiges Kommando (roher Wert bleibt erhalten)
    Other(u16),
}

impl MavCmd {
    /// Konvertiert die rohe Command-ID
    pub fn from_u16(value: u16) -> Self {
        match value {
            16 => Self::NavWaypoint,
            17 => Self::NavLoiterUnlim,
            18 => Self::NavLoiterTurns,
            19 => Self::NavLoiterTime,
            20 => Self::NavReturnToLaunch,
            21 => Self::NavLand,
            22 => Self::NavTakeoff,
            other => Self::Other(other),
        }
    }

    /// Rohe Command-ID
    pub fn as_u16(self) -> u16 {
        match self {
            Self::NavWaypoint => 16,
            Self::NavLoiterUnlim => 17,
            Self::NavLoiterTurns => 18,
            Self::NavLoiterTime => 19,
            Self::NavReturnToLaunch => 20,
            Self::NavLand => 21,
            Self::NavTakeoff => 22,
            Self::Other(value) => value,
        }
    }

    /// Liegt im MAVLink-NAV-Bereich (< MAV_CMD_NAV_LAST)
    pub fn is_nav(self) -> bool {
        self.as_u16() < MAV_CMD_NAV_LAST
    }

    /// Alle Loiter-Varianten
    pub fn is_loiter(self) -> bool {
        matches!(
            self,
            Self::NavLoiterUnlim | Self::NavLoiterTurns | Self::NavLoiterTime
        )
    }

    /// Anzeigename fuer Marker-Titel
    pub fn display_name(self) -> String {
        match self {
            Self::NavWaypoint => "Waypoint".to_string(),
            Self::NavLoiterUnlim => "Loiter (unlimited)".to_string(),
            Self::NavLoiterTurns => "Loiter (turns)".to_string(),
            Self::NavLoiterTime => "Loiter (time)".to_string(),
            Self::NavReturnToLaunch => "Return to launch".to_string(),
            Self::NavLand => "Land".to_string(),
            Self::NavTakeoff => "Takeoff".to_string(),
            Self::Other(id) => format!("Command {id}"),
        }
    }
}

impl From<u16> for MavCmd {
    fn from(value: u16) -> Self {
        Self::from_u16(value)
    }
}

impl From<MavCmd> for u16 {
    fn from(cmd: MavCmd) -> Self {
        cmd.as_u16()
    }
}

/// Ein einzelnes Missions-Item.
///
/// `x`/`y` tragen bei globalen Frames Breiten- und Laengengrad in Grad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissionItem {
    /// Protokoll-Sequenznummer
    pub seq: WaypointSeq,
    /// Koordinatensystem
    pub frame: MavFrame,
    /// Kommando
    pub command: MavCmd,
    /// Aktuelles Ziel des Fahrzeugs
    pub current: bool,
    /// Nach Erreichen automatisch weiter
    pub autocontinue: bool,
    /// Kommando-Parameter 1
    pub param1: f32,
    /// Kommando-Parameter 2
    pub param2: f32,
    /// Kommando-Parameter 3
    pub param3: f32,
    /// Kommando-Parameter 4
    pub param4: f32,
    /// Breitengrad
    pub x: f64,
    /// Laengengrad
    pub y: f64,
    /// Hoehe in Metern (Frame-relativ)
    pub z: f32,
}

impl Default for MissionItem {
    fn default() -> Self {
        Self {
            seq: 0,
            frame: MavFrame::default(),
            command: MavCmd::default(),
            current: false,
            autocontinue: true,
            param1: 0.0,
            param2: 0.0,
            param3: 0.0,
            param4: 0.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

impl MissionItem {
    /// Erstellt ein NAV-Item mit Position und Hoehe, restliche Felder auf Standard
    pub fn nav(seq: WaypointSeq, command: MavCmd, position: GeoCoordinate, altitude: f32) -> Self {
        Self {
            seq,
            command,
            x: position.latitude,
            y: position.longitude,
            z: altitude,
            ..Self::default()
        }
    }

    /// Kurzform fuer `MAV_CMD_NAV_WAYPOINT`
    pub fn waypoint(seq: WaypointSeq, position: GeoCoordinate, altitude: f32) -> Self {
        Self::nav(seq, MavCmd::NavWaypoint, position, altitude)
    }

    /// Position aus x/y
    pub fn position(&self) -> GeoCoordinate {
        GeoCoordinate::new(self.x, self.y)
    }

    /// Kopie mit ersetzter Position; alle anderen Felder bleiben gleich
    pub fn with_position(&self, position: GeoCoordinate) -> Self {
        Self {
            x: position.latitude,
            y: position.longitude,
            ..*self
        }
    }

    /// NAV-Kommando (bewegt das Fahrzeug)
    pub fn is_nav_command(&self) -> bool {
        self.command.is_nav()
    }

    /// Hat eine auf der Karte darstellbare Position.
    ///
    /// RTL ist zwar ein NAV-Kommando, nutzt x/y aber nicht.
    pub fn has_position(&self) -> bool {
        self.is_nav_command()
            && self.frame.is_global()
            && self.command != MavCmd::NavReturnToLaunch
    }
}
