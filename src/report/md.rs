use crate::logo::Logo;
use crate::types::report::ShortlistReport;

pub fn to_markdown(report: &ShortlistReport) -> String {
    let mut output = String::new();
    output.push_str("# Your familiar public companies\n\n");

    output.push_str("## Selection\n\n");
    if report.selected.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for selected in &report.selected {
            output.push_str(&format!(
                "- {}: {} ({})\n",
                selected.category, selected.label, selected.id
            ));
        }
        output.push('\n');
    }

    output.push_str("## Shortlist\n\n");
    for pick in &report.picks {
        let logo = match &pick.logo {
            Logo::Remote { url } => format!("![{}]({})", pick.name, url),
            Logo::Fallback { label } => label.clone(),
        };
        output.push_str(&format!(
            "{}. {} {} `{}` (score {:.3})\n",
            pick.rank, logo, pick.name, pick.ticker, pick.score
        ));
    }
    output.push('\n');

    if let Some(hint) = &report.hint {
        output.push_str(&format!("_{hint}_\n\n"));
    }

    output.push_str(&report.scoring_note);
    output.push('\n');
    output
}
