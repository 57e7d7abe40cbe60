//! Core-Domänentypen: Koordinaten, Missions-Items, Wegpunkt-Annotationen.

pub mod coordinate;
pub mod map_placeable;
/// Leitungsnahe Missions-Items
///
/// Dieses Modul definiert das Item-Layout:
/// - MissionItem: Kommando, Frame, Parameter, Position, Sequenznummer
/// - MavCmd / MavFrame: rohe MAVLink-IDs mit benannten Varianten
pub mod mission_item;
pub mod mission_holder;
pub mod waypoint_annotation;
pub mod waypoint_style;

pub use coordinate::GeoCoordinate;
pub use map_placeable::MapPlaceable;
pub use mission_holder::{MissionHolder, MAX_MISSION_ITEMS};
pub use mission_item::{MavCmd, MavFrame, MissionItem, WaypointSeq, MAV_CMD_NAV_LAST};
pub use waypoint_annotation::{find_annotation, AnnotationError, WaypointAnnotation};
pub use waypoint_style::{waypoint_style, MissionState, ThemeProvider, WaypointStyle};
