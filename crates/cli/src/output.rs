use anyhow::Result;
use huddle_graph::{ClassReport, ClosureStrategy, PlayerClass};
use serde::Serialize;

#[derive(Serialize)]
struct JsonOutput<'a> {
    max_class_size: usize,
    players: usize,
    mutual_pairs: usize,
    mode: ClosureStrategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    classes: Option<&'a [PlayerClass]>,
}

pub(crate) fn render_text(report: &ClassReport, with_classes: bool) -> String {
    let mut out = format!(
        "Maximum number of players that can touch a single ball is: {} number of player(s).",
        report.max_class_size
    );

    if with_classes {
        for class in &report.classes {
            let members = if class.members.is_empty() {
                "(none)".to_string()
            } else {
                class.members.join(", ")
            };
            out.push_str(&format!("\n  {}: {}", class.player, members));
        }
    }

    out
}

pub(crate) fn render_json(report: &ClassReport, with_classes: bool) -> Result<String> {
    let output = JsonOutput {
        max_class_size: report.max_class_size,
        players: report.players,
        mutual_pairs: report.mutual_pairs,
        mode: report.mode,
        classes: with_classes.then_some(report.classes.as_slice()),
    };
    serde_json::to_string(&output).map_err(Into::into)
}
