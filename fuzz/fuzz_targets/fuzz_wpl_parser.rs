#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(mission) = gcs_mission_map::parse_wpl_mission(content) {
            let written = gcs_mission_map::write_wpl_mission(&mission);
            let _ = gcs_mission_map::parse_wpl_mission(&written);
            let _ = mission.annotations();
        }
    }
});
