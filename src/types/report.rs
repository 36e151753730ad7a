use crate::logo::Logo;
use crate::types::scoring::Score;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ShortlistReport {
    pub has_selection: bool,
    pub selected: Vec<SelectedChoice>,
    pub picks: Vec<ReportPick>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub scoring_note: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectedChoice {
    pub category: String,
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportPick {
    pub rank: usize,
    pub ticker: String,
    pub name: String,
    pub score: Score,
    pub logo: Logo,
}
