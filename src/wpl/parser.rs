//! Parser für `QGC WPL 110`-Missionsdateien.

use super::WPL_HEADER;
use crate::core::{MavCmd, MavFrame, MissionHolder, MissionItem, MAX_MISSION_ITEMS};
use anyhow::{bail, Context, Result};
use std::str::FromStr;

/// Anzahl der Felder pro Item-Zeile
const FIELD_COUNT: usize = 12;

/// Parsed eine Mission aus dem Inhalt einer WPL-Datei.
///
/// Items werden in Datei-Reihenfolge neu nummeriert. Die seq-Spalte muss eine
/// ganze Zahl sein; weicht sie von der Position ab, wird nur gewarnt.
pub fn parse_wpl_mission(content: &str) -> Result<MissionHolder> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((_, header)) = lines.next() else {
        bail!("Missionsdatei ist leer");
    };
    if header != WPL_HEADER {
        bail!("Unbekannte Kopfzeile: '{}' (erwartet '{}')", header, WPL_HEADER);
    }

    let mut items = Vec::new();
    for (line_no, line) in lines {
        if items.len() == MAX_MISSION_ITEMS {
            bail!(
                "Mission zu gross: Zeile {} ueberschreitet maximal {} Items",
                line_no,
                MAX_MISSION_ITEMS
            );
        }

        let (file_seq, item) = parse_item_line(line)
            .with_context(|| format!("Fehler in Zeile {}: '{}'", line_no, line))?;

        if i64::try_from(items.len()).ok() != Some(file_seq) {
            log::warn!(
                "Zeile {}: Sequenz {} erwartet, {} gefunden, wird neu nummeriert",
                line_no,
                items.len(),
                file_seq
            );
        }
        items.push(item);
    }

    log::info!("Mission mit {} Items geladen", items.len());
    MissionHolder::from_items(items)
}

/// Parsed eine einzelne Item-Zeile.
///
/// Liefert den Wert der seq-Spalte separat; `item.seq` bleibt 0, bis der
/// `MissionHolder` neu nummeriert.
fn parse_item_line(line: &str) -> Result<(i64, MissionItem)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != FIELD_COUNT {
        bail!(
            "{} Felder erwartet, {} gefunden",
            FIELD_COUNT,
            fields.len()
        );
    }

    let file_seq = parse_field(fields[0], "seq")?;
    let item = MissionItem {
        seq: 0,
        current: parse_flag(fields[1], "current")?,
        frame: MavFrame::from_u8(parse_field(fields[2], "frame")?),
        command: MavCmd::from_u16(parse_field(fields[3], "command")?),
        param1: parse_field(fields[4], "param1")?,
        param2: parse_field(fields[5], "param2")?,
        param3: parse_field(fields[6], "param3")?,
        param4: parse_field(fields[7], "param4")?,
        x: parse_field(fields[8], "x")?,
        y: parse_field(fields[9], "y")?,
        z: parse_field(fields[10], "z")?,
        autocontinue: parse_flag(fields[11], "autocontinue")?,
    };

    Ok((file_seq, item))
}

fn parse_field<T>(text: &str, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.parse::<T>()
        .with_context(|| format!("Ungueltiger Wert fuer {}: '{}'", name, text))
}

fn parse_flag(text: &str, name: &str) -> Result<bool> {
    match parse_field::<u8>(text, name)? {
        0 => Ok(false),
        1 => Ok(true),
        other => bail!("{} muss 0 oder 1 sein, ist {}", name, other),
    }
}
