use crate::catalog::Company;
use serde::Serialize;

pub const CLEARBIT_BASE: &str = "https://logo.clearbit.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Logo {
    Remote { url: String },
    Fallback { label: String },
}

impl Logo {
    pub fn fallback_for(company: &Company) -> Self {
        Self::Fallback {
            label: format!("{} ({})", company.name, company.ticker),
        }
    }
}

/// Supplies a logo reference for a company. Resolution is best-effort and
/// has no bearing on ranking.
pub trait LogoResolver {
    fn resolve_logo(&self, company: &Company) -> Logo;
}

#[derive(Debug, Clone)]
pub struct ClearbitLogos {
    base_url: String,
}

impl Default for ClearbitLogos {
    fn default() -> Self {
        Self {
            base_url: CLEARBIT_BASE.to_string(),
        }
    }
}

impl ClearbitLogos {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl LogoResolver for ClearbitLogos {
    fn resolve_logo(&self, company: &Company) -> Logo {
        let domain = company.domain.trim();
        if domain.is_empty() {
            tracing::debug!(ticker = company.ticker, "no logo domain, using text fallback");
            return Logo::fallback_for(company);
        }
        Logo::Remote {
            url: format!("{}/{}", self.base_url.trim_end_matches('/'), domain),
        }
    }
}

/// Always renders the text label, e.g. for offline output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextLogos;

impl LogoResolver for TextLogos {
    fn resolve_logo(&self, company: &Company) -> Logo {
        Logo::fallback_for(company)
    }
}
