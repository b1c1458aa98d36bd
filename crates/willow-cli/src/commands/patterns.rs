use serde::Serialize;
use willow_core::{BreathingPattern, Phase};

#[derive(Serialize)]
struct PatternInfo {
    id: &'static str,
    label: &'static str,
    description: &'static str,
    cycle_secs: u32,
    phases: &'static [Phase],
}

pub fn run(json: bool) -> willow_core::Result<()> {
    let patterns: Vec<PatternInfo> = BreathingPattern::ALL
        .into_iter()
        .map(|p| PatternInfo {
            id: p.id(),
            label: p.label(),
            description: p.description(),
            cycle_secs: p.cycle_duration_secs(),
            phases: p.phases(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&patterns)?);
        return Ok(());
    }

    for info in &patterns {
        let steps: Vec<String> = info
            .phases
            .iter()
            .map(|phase| format!("{} {}s", phase.kind.instruction(), phase.duration_secs))
            .collect();
        println!("{:<18} {} ({}s cycle)", info.id, info.label, info.cycle_secs);
        println!("{:<18} {}", "", info.description);
        println!("{:<18} {}", "", steps.join(" -> "));
    }
    Ok(())
}
