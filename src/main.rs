//! GCS Mission Map Inspector.
//!
//! Lädt eine `QGC WPL 110`-Missionsdatei und gibt die daraus erzeugten
//! Wegpunkt-Annotationen mit Titel, Position und Marker-Farbe aus.

use anyhow::Context;
use clap::Parser;
use gcs_mission_map::{
    color_to_hex, parse_wpl_mission, MapPlaceable, MissionState, ThemeOptions, WaypointSeq,
};
use serde::Serialize;
use std::path::PathBuf;

/// Kommandozeilen-Argumente
#[derive(Parser)]
#[command(version, author, about)]
struct Cli {
    /// Missionsdatei (QGC WPL 110)
    #[arg(value_name = "MISSION_FILE", required_unless_present = "dump_theme")]
    mission: Option<PathBuf>,

    /// Farbschema-Datei (TOML), sonst die Datei neben der Binary
    #[arg(short, long, value_name = "THEME_FILE")]
    theme: Option<PathBuf>,

    /// Sequenznummer des aktuellen Ziels
    #[arg(short, long)]
    current: Option<WaypointSeq>,

    /// Sequenznummer des Home-Items
    #[arg(long)]
    home: Option<WaypointSeq>,

    /// Ausgabe als JSON
    #[arg(long)]
    json: bool,

    /// Standard-Farbschema als TOML ausgeben
    #[arg(long)]
    dump_theme: bool,
}

/// Eine Ausgabezeile pro Annotation
#[derive(Serialize)]
struct AnnotationRow {
    index: usize,
    seq: WaypointSeq,
    title: Option<String>,
    subtitle: Option<String>,
    latitude: f64,
    longitude: f64,
    color: String,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "GCS Mission Map v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let cli = Cli::parse();

    if cli.dump_theme {
        print!("{}", toml::to_string_pretty(&ThemeOptions::default())?);
        return Ok(());
    }

    let theme_path = cli.theme.unwrap_or_else(ThemeOptions::config_path);
    let theme = ThemeOptions::load_from_file(&theme_path);

    let Some(mission_path) = cli.mission else {
        anyhow::bail!("Keine Missionsdatei angegeben");
    };
    let content = std::fs::read_to_string(&mission_path)
        .with_context(|| format!("Missionsdatei nicht lesbar: {}", mission_path.display()))?;
    let mission = parse_wpl_mission(&content)
        .with_context(|| format!("Missionsdatei fehlerhaft: {}", mission_path.display()))?;

    let state = MissionState {
        current_seq: cli.current,
        home_seq: cli.home,
    };

    let rows: Vec<AnnotationRow> = mission
        .annotations()
        .iter()
        .map(|annotation| {
            let coordinate = annotation.coordinate();
            AnnotationRow {
                index: annotation.index(),
                seq: annotation.seq(),
                title: annotation.title(),
                subtitle: annotation.subtitle(),
                latitude: coordinate.latitude,
                longitude: coordinate.longitude,
                color: color_to_hex(annotation.color(&theme, &state)),
            }
        })
        .collect();

    log::info!(
        "{} Items, {} davon auf der Karte darstellbar",
        mission.len(),
        rows.len()
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!(
                "[{:>3}] {:<28} {:>12.7} {:>13.7}  {}  {}",
                row.index,
                row.title.as_deref().unwrap_or("-"),
                row.latitude,
                row.longitude,
                row.color,
                row.subtitle.as_deref().unwrap_or(""),
            );
        }
    }

    Ok(())
}
