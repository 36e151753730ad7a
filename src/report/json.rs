use crate::types::report::ShortlistReport;

pub fn to_json(report: &ShortlistReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
