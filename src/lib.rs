//! GCS Mission Map Library.
//! Wegpunkt-Annotationen fuer Missionskarten als Library exportiert für Tests und Wiederverwendung.

pub mod core;
pub mod shared;
pub mod wpl;

pub use core::{
    find_annotation, waypoint_style, AnnotationError, GeoCoordinate, MapPlaceable, MavCmd,
    MavFrame, MissionHolder, MissionItem, MissionState, ThemeProvider, WaypointAnnotation,
    WaypointSeq, WaypointStyle, MAX_MISSION_ITEMS,
};
pub use shared::{color_to_hex, ThemeOptions};
pub use wpl::{parse_wpl_mission, write_wpl_mission};
