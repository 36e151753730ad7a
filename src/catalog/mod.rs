pub mod choices;
pub mod companies;

use crate::error::{CompassError, Result};
use std::collections::HashSet;
use std::fmt;

pub use companies::COMPANIES;

pub type Ticker = &'static str;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Company {
    pub ticker: Ticker,
    pub name: &'static str,
    pub domain: &'static str,
}

/// A selectable answer to one onboarding question.
///
/// `ticker` is credited in full; `complements` are close substitutes that
/// receive a reduced share of the category weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub id: &'static str,
    pub label: &'static str,
    pub ticker: Ticker,
    pub complements: &'static [Ticker],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ecosystem,
    Membership,
    LocalCommerce,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Ecosystem,
        Category::Membership,
        Category::LocalCommerce,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ecosystem => "ecosystem",
            Self::Membership => "membership",
            Self::LocalCommerce => "local-commerce",
        }
    }

    pub fn question(self) -> &'static str {
        match self {
            Self::Ecosystem => "Your main tech ecosystem",
            Self::Membership => "Membership you actually use",
            Self::LocalCommerce => "Default local commerce",
        }
    }

    pub fn choices(self) -> &'static [Choice] {
        match self {
            Self::Ecosystem => choices::ECOSYSTEMS,
            Self::Membership => choices::MEMBERSHIPS,
            Self::LocalCommerce => choices::LOCAL_COMMERCE,
        }
    }

    pub fn find_choice(self, id: &str) -> Option<&'static Choice> {
        self.choices().iter().find(|choice| choice.id == id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn find_company(ticker: &str) -> Option<&'static Company> {
    COMPANIES.iter().find(|company| company.ticker == ticker)
}

/// Checks that every ticker referenced by a choice or by the geo prior
/// resolves to a company, and that keys are unique.
pub fn validate(geo_tickers: &[&str]) -> Result<()> {
    let catalogs = Category::ALL.map(|category| (category, category.choices()));
    validate_tables(COMPANIES, &catalogs, geo_tickers)
}

pub(crate) fn validate_tables(
    companies: &[Company],
    catalogs: &[(Category, &[Choice])],
    geo_tickers: &[&str],
) -> Result<()> {
    let mut known = HashSet::<&str>::new();
    for company in companies {
        if company.ticker.trim().is_empty() {
            return Err(CompassError::Catalog(
                "company entries must have a non-empty ticker".to_string(),
            ));
        }
        if !known.insert(company.ticker) {
            return Err(CompassError::Catalog(format!(
                "duplicate company ticker: {}",
                company.ticker
            )));
        }
    }

    for (category, choices) in catalogs {
        let mut ids = HashSet::<&str>::new();
        for choice in choices.iter() {
            if !ids.insert(choice.id) {
                return Err(CompassError::Catalog(format!(
                    "{category} contains duplicate choice id: {}",
                    choice.id
                )));
            }
            if !known.contains(choice.ticker) {
                return Err(CompassError::Catalog(format!(
                    "{category}.{} references unknown ticker: {}",
                    choice.id, choice.ticker
                )));
            }
            if let Some(missing) = choice
                .complements
                .iter()
                .find(|ticker| !known.contains(*ticker))
            {
                return Err(CompassError::Catalog(format!(
                    "{category}.{} lists unknown complement: {missing}",
                    choice.id
                )));
            }
        }
    }

    if let Some(missing) = geo_tickers.iter().find(|ticker| !known.contains(*ticker)) {
        return Err(CompassError::Catalog(format!(
            "geo prior references unknown ticker: {missing}"
        )));
    }

    Ok(())
}
