//! Karten-Annotation fuer einen einzelnen Missions-Wegpunkt.

use super::waypoint_style::{waypoint_style, MissionState, ThemeProvider};
use super::{GeoCoordinate, MapPlaceable, MissionItem, WaypointSeq};
use thiserror::Error;

/// Fehler beim Erstellen einer Annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnnotationError {
    /// Anzeige-Index darf nicht negativ sein
    #[error("Annotation-Index darf nicht negativ sein: {0}")]
    NegativeIndex(isize),
}

/// Ein Wegpunkt-Marker auf der Missionskarte.
///
/// Haelt einen Snapshot des Missions-Items vom Erstellungszeitpunkt. Ein
/// Verschieben per `set_coordinate` aendert nur die Marker-Position, nie den
/// Snapshot; das Zurueckschreiben ist Sache des `MissionHolder`.
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointAnnotation {
    index: usize,
    coordinate: GeoCoordinate,
    item: MissionItem,
}

impl WaypointAnnotation {
    /// Einziger Konstruktor.
    ///
    /// Koordinate und Item-Position muessen nicht uebereinstimmen.
    pub fn new(
        coordinate: GeoCoordinate,
        item: MissionItem,
        index: isize,
    ) -> Result<Self, AnnotationError> {
        let index = usize::try_from(index).map_err(|_| AnnotationError::NegativeIndex(index))?;
        Ok(Self {
            index,
            coordinate,
            item,
        })
    }

    /// Anzeige-Index unter allen dargestellten Annotationen
    pub fn index(&self) -> usize {
        self.index
    }

    /// Aktuelle Marker-Position
    pub fn coordinate(&self) -> GeoCoordinate {
        self.coordinate
    }

    /// Ersetzt die Marker-Position ohne Pruefung
    pub fn set_coordinate(&mut self, coordinate: GeoCoordinate) {
        self.coordinate = coordinate;
    }

    /// Item-Snapshot vom Erstellungszeitpunkt
    pub fn mission_item(&self) -> &MissionItem {
        &self.item
    }

    /// Sequenznummer des Items
    pub fn seq(&self) -> WaypointSeq {
        self.item.seq
    }

    /// Prueft ob `seq` das Item dieser Annotation bezeichnet.
    ///
    /// Verglichen wird mit `seq` des Snapshots, nicht mit dem Anzeige-Index.
    /// Werte ausserhalb des `WaypointSeq`-Bereichs treffen nie.
    pub fn has_matching_seq<S>(&self, seq: S) -> bool
    where
        S: TryInto<WaypointSeq>,
    {
        seq.try_into().is_ok_and(|seq| seq == self.item.seq)
    }

    /// Marker-Farbe fuer den aktuellen Missionszustand (wird nicht gecacht)
    pub fn color<T>(&self, theme: &T, state: &MissionState) -> [f32; 4]
    where
        T: ThemeProvider + ?Sized,
    {
        theme.waypoint_color(waypoint_style(&self.item, state))
    }

    /// Neues Item aus Snapshot plus aktueller Marker-Position
    pub fn to_mission_item(&self) -> MissionItem {
        self.item.with_position(self.coordinate)
    }
}

impl MapPlaceable for WaypointAnnotation {
    fn coordinate(&self) -> GeoCoordinate {
        self.coordinate
    }

    fn set_coordinate(&mut self, coordinate: GeoCoordinate) {
        WaypointAnnotation::set_coordinate(self, coordinate);
    }

    fn title(&self) -> Option<String> {
        Some(format!(
            "{}: {}",
            self.item.seq,
            self.item.command.display_name()
        ))
    }

    fn subtitle(&self) -> Option<String> {
        Some(format!("Alt: {:.1} m", self.item.z))
    }
}

/// Findet die Annotation zu einer Sequenznummer
pub fn find_annotation<S>(
    annotations: &[WaypointAnnotation],
    seq: S,
) -> Option<&WaypointAnnotation>
where
    S: TryInto<WaypointSeq> + Copy,
{
    annotations.iter().find(|a| a.has_matching_seq(seq))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MavCmd, WaypointStyle};

    struct FixedTheme;

    impl ThemeProvider for FixedTheme {
        fn waypoint_color(&self, style: WaypointStyle) -> [f32; 4] {
            match style {
                WaypointStyle::CurrentTarget => [1.0, 0.0, 0.0, 1.0],
                _ => [0.0, 0.0, 1.0, 1.0],
            }
        }
    }

    fn sample() -> WaypointAnnotation {
        let item = MissionItem::waypoint(3, GeoCoordinate::new(37.0, -122.0), 50.0);
        WaypointAnnotation::new(GeoCoordinate::new(37.0, -122.0), item, 3).unwrap()
    }

    #[test]
    fn negative_index_is_rejected() {
        let item = MissionItem::default();
        let err = WaypointAnnotation::new(GeoCoordinate::default(), item, -1).unwrap_err();
        assert_eq!(err, AnnotationError::NegativeIndex(-1));
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn index_zero_is_valid() {
        let a = WaypointAnnotation::new(GeoCoordinate::default(), MissionItem::default(), 0)
            .unwrap();
        assert_eq!(a.index(), 0);
    }

    #[test]
    fn coordinate_may_differ_from_item_position() {
        let item = MissionItem::waypoint(1, GeoCoordinate::new(1.0, 1.0), 20.0);
        let a = WaypointAnnotation::new(GeoCoordinate::new(5.0, 5.0), item, 0).unwrap();
        assert_eq!(a.coordinate(), GeoCoordinate::new(5.0, 5.0));
        assert_eq!(a.mission_item().position(), GeoCoordinate::new(1.0, 1.0));
    }

    #[test]
    fn has_matching_seq_accepts_any_integer_type() {
        let a = sample();
        assert!(a.has_matching_seq(3u16));
        assert!(a.has_matching_seq(3i32));
        assert!(a.has_matching_seq(3usize));
        assert!(!a.has_matching_seq(-3i64));
        assert!(!a.has_matching_seq(65_539u32));
    }

    #[test]
    fn to_mission_item_uses_dragged_position_and_keeps_snapshot() {
        let mut a = sample();
        a.set_coordinate(GeoCoordinate::new(38.0, -121.0));

        let regenerated = a.to_mission_item();
        assert_eq!(regenerated.position(), GeoCoordinate::new(38.0, -121.0));
        assert_eq!(regenerated.seq, 3);
        assert_eq!(regenerated.z, 50.0);
        assert_eq!(
            a.mission_item().position(),
            GeoCoordinate::new(37.0, -122.0)
        );
    }

    #[test]
    fn color_follows_external_state() {
        let a = sample();
        let theme = FixedTheme;
        assert_eq!(
            a.color(&theme, &MissionState::default()),
            [0.0, 0.0, 1.0, 1.0]
        );
        assert_eq!(
            a.color(&theme, &MissionState::with_current(3)),
            [1.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn title_and_subtitle() {
        let item = MissionItem::nav(7, MavCmd::NavLand, GeoCoordinate::default(), 0.0);
        let a = WaypointAnnotation::new(GeoCoordinate::default(), item, 2).unwrap();
        assert_eq!(a.title().as_deref(), Some("7: Land"));
        assert_eq!(a.subtitle().as_deref(), Some("Alt: 0.0 m"));
    }

    #[test]
    fn find_annotation_by_seq() {
        let annotations: Vec<_> = (0..4)
            .map(|i| {
                let item = MissionItem::waypoint(i + 10, GeoCoordinate::default(), 0.0);
                WaypointAnnotation::new(GeoCoordinate::default(), item, i as isize).unwrap()
            })
            .collect();

        assert_eq!(find_annotation(&annotations, 12).map(|a| a.index()), Some(2));
        assert!(find_annotation(&annotations, 2).is_none());
        assert!(find_annotation(&annotations, -1).is_none());
    }
}
