pub mod json;
pub mod md;

use crate::catalog::{self, Category};
use crate::error::CompassError;
use crate::logo::LogoResolver;
use crate::onboarding::{Selection, SELECTION_HINT};
use crate::scoring::Scorer;
use crate::types::report::{ReportPick, SelectedChoice, ShortlistReport};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn build(
    selection: &Selection,
    scorer: &Scorer,
    logos: &dyn LogoResolver,
) -> ShortlistReport {
    let picks = scorer
        .rank_selection(selection)
        .into_iter()
        .filter_map(|pick| match catalog::find_company(pick.ticker) {
            Some(company) => Some((company, pick.score)),
            None => {
                tracing::warn!(ticker = pick.ticker, "ranked ticker missing from catalog");
                None
            }
        })
        .enumerate()
        .map(|(index, (company, score))| ReportPick {
            rank: index + 1,
            ticker: company.ticker.to_string(),
            name: company.name.to_string(),
            score: round_score(score),
            logo: logos.resolve_logo(company),
        })
        .collect::<Vec<_>>();

    let selected = Category::ALL
        .into_iter()
        .filter_map(|category| {
            selection.get(category).map(|choice| SelectedChoice {
                category: category.to_string(),
                id: choice.id.to_string(),
                label: choice.label.to_string(),
            })
        })
        .collect::<Vec<_>>();

    let has_selection = selection.has_selection();
    ShortlistReport {
        has_selection,
        selected,
        picks,
        hint: (!has_selection).then(|| SELECTION_HINT.to_string()),
        scoring_note: scoring_note(scorer),
    }
}

pub fn render(report: &ShortlistReport, format: OutputFormat) -> Result<String, CompassError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(CompassError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

fn scoring_note(scorer: &Scorer) -> String {
    format!(
        "Scoring = {}×ecosystem + {}×membership + {}×local commerce + tiny geo prior (complements credited at {}×).",
        scorer.weight(Category::Ecosystem),
        scorer.weight(Category::Membership),
        scorer.weight(Category::LocalCommerce),
        scorer.complement_factor()
    )
}

fn round_score(score: f32) -> f32 {
    (score * 10_000.0).round() / 10_000.0
}
