//! Faehigkeit "auf der Karte platzierbar und verschiebbar".

use super::GeoCoordinate;

/// Alles, was die Kartenoberflaeche als verschiebbaren Marker darstellen kann.
///
/// Die Kartenoberflaeche haengt nur von diesem Trait ab, nicht vom konkreten Typ.
pub trait MapPlaceable {
    /// Aktuelle Marker-Position
    fn coordinate(&self) -> GeoCoordinate;

    /// Setzt die Marker-Position (z.B. nach Drag). Keine Validierung.
    fn set_coordinate(&mut self, coordinate: GeoCoordinate);

    /// Optionaler Titel fuer Callouts
    fn title(&self) -> Option<String> {
        None
    }

    /// Optionaler Untertitel fuer Callouts
    fn subtitle(&self) -> Option<String> {
        None
    }
}
