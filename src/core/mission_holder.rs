//! Besitzer der geordneten Mission: vergibt Sequenznummern und erzeugt Annotationen.

use super::{GeoCoordinate, MissionItem, WaypointAnnotation, WaypointSeq};
use anyhow::{bail, Result};

/// Maximale Anzahl Items einer Mission (MAVLink-Missionszaehler ist `u16`)
pub const MAX_MISSION_ITEMS: usize = WaypointSeq::MAX as usize + 1;

/// Geordnete Liste aller Missions-Items.
///
/// Nach jeder strukturellen Aenderung gilt `items[i].seq == i`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MissionHolder {
    items: Vec<MissionItem>,
}

impl MissionHolder {
    /// Erstellt eine leere Mission
    pub fn new() -> Self {
        Self::default()
    }

    /// Uebernimmt Items in der gegebenen Reihenfolge und nummeriert sie neu.
    ///
    /// Schlaegt fehl, wenn mehr als `MAX_MISSION_ITEMS` Items uebergeben werden.
    pub fn from_items(items: Vec<MissionItem>) -> Result<Self> {
        if items.len() > MAX_MISSION_ITEMS {
            bail!(
                "Mission zu gross: {} Items (maximal {})",
                items.len(),
                MAX_MISSION_ITEMS
            );
        }
        let mut holder = Self { items };
        holder.resequence();
        Ok(holder)
    }

    /// Anzahl der Items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Keine Items vorhanden
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Alle Items (read-only)
    pub fn items(&self) -> &[MissionItem] {
        &self.items
    }

    /// Item an Listenposition
    pub fn item(&self, index: usize) -> Option<&MissionItem> {
        self.items.get(index)
    }

    /// Item mit Sequenznummer
    pub fn item_by_seq(&self, seq: WaypointSeq) -> Option<&MissionItem> {
        self.index_of_seq(seq).map(|i| &self.items[i])
    }

    /// Listenposition des Items mit `seq`
    pub fn index_of_seq(&self, seq: WaypointSeq) -> Option<usize> {
        self.items.iter().position(|item| item.seq == seq)
    }

    /// Haengt ein Item an und vergibt die naechste Sequenznummer
    pub fn push_item(&mut self, mut item: MissionItem) -> Result<WaypointSeq> {
        let seq = self.next_seq()?;
        item.seq = seq;
        self.items.push(item);
        log::debug!("Missions-Item {} angehaengt", seq);
        Ok(seq)
    }

    /// Fuegt ein Item ein (Index wird auf die Laenge begrenzt) und nummeriert neu
    pub fn insert_item(&mut self, index: usize, item: MissionItem) -> Result<WaypointSeq> {
        // Auch bei Einfuegen in der Mitte muss die letzte Seq noch passen
        self.next_seq()?;
        let index = index.min(self.items.len());
        self.items.insert(index, item);
        self.resequence();
        log::debug!("Missions-Item an Position {} eingefuegt", index);
        Ok(self.items[index].seq)
    }

    /// Entfernt ein Item und nummeriert neu
    pub fn remove_item(&mut self, index: usize) -> Option<MissionItem> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.resequence();
        log::debug!("Missions-Item {} entfernt", removed.seq);
        Some(removed)
    }

    /// Verschiebt ein Item von `from` nach `to` und nummeriert neu.
    ///
    /// Bestehende Annotationen werden dadurch ungueltig und muessen ueber
    /// `annotations()` neu erzeugt werden.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        let len = self.items.len();
        if from >= len || to >= len {
            return false;
        }
        if from != to {
            let item = self.items.remove(from);
            self.items.insert(to, item);
            self.resequence();
            log::debug!("Missions-Item verschoben: {} -> {}", from, to);
        }
        true
    }

    /// Schreibt eine neue Position in das Item mit `seq`
    pub fn update_position(&mut self, seq: WaypointSeq, coordinate: GeoCoordinate) -> bool {
        let Some(index) = self.index_of_seq(seq) else {
            return false;
        };
        let item = &mut self.items[index];
        *item = item.with_position(coordinate);
        true
    }

    /// Uebernimmt die aktuelle Marker-Position einer Annotation in die Mission
    pub fn apply_annotation(&mut self, annotation: &WaypointAnnotation) -> bool {
        self.update_position(annotation.seq(), annotation.coordinate())
    }

    /// Items mit darstellbarer Kartenposition
    pub fn nav_items(&self) -> impl Iterator<Item = &MissionItem> {
        self.items.iter().filter(|item| item.has_position())
    }

    /// Erzeugt frische Annotationen fuer alle darstellbaren Items.
    ///
    /// `index` ist die Position unter den erzeugten Annotationen und kann daher
    /// von `seq` abweichen, sobald Items ohne Position dazwischen liegen.
    pub fn annotations(&self) -> Vec<WaypointAnnotation> {
        self.nav_items()
            .enumerate()
            .filter_map(|(index, item)| {
                // index < MAX_MISSION_ITEMS, also nie negativ: `new` schlaegt hier nie fehl
                WaypointAnnotation::new(item.position(), *item, index as isize).ok()
            })
            .collect()
    }

    /// Entfernt alle Items
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Seq fuer ein weiteres Item, falls die Mission noch nicht voll ist
    fn next_seq(&self) -> Result<WaypointSeq> {
        match WaypointSeq::try_from(self.items.len()) {
            Ok(seq) => Ok(seq),
            Err(_) => bail!("Mission zu gross: maximal {} Items", MAX_MISSION_ITEMS),
        }
    }

    fn resequence(&mut self) {
        // Laenge ist auf MAX_MISSION_ITEMS begrenzt, zip deckt also alle Items ab
        for (item, seq) in self.items.iter_mut().zip(0..=WaypointSeq::MAX) {
            item.seq = seq;
        }
    }
}
