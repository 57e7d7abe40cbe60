//! Geografische Koordinate (WGS84, Grad) fuer Karten-Marker.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Breiten-/Laengengrad in Grad.
///
/// Es findet keine Bereichspruefung statt; `is_valid` ist rein informativ.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Breitengrad (Nord positiv)
    pub latitude: f64,
    /// Laengengrad (Ost positiv)
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Erstellt eine neue Koordinate
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Prueft ob die Koordinate im gueltigen WGS84-Bereich liegt.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Kartenvektor: x = Laenge, y = Breite
    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.longitude, self.latitude)
    }

    /// Gegenstueck zu `to_dvec2`
    pub fn from_dvec2(v: DVec2) -> Self {
        Self::new(v.y, v.x)
    }
}

impl From<(f64, f64)> for GeoCoordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}
