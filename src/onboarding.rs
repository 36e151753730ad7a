use crate::catalog::{Category, Choice};
use crate::error::{CompassError, Result};
use crate::scoring::Scorer;

pub const CONTINUE_MESSAGE: &str = "Continue to your Familiar Portfolio (stub).";
pub const BOOST_MESSAGE: &str = "Connect mail metadata to boost accuracy (stub).";
pub const SELECTION_HINT: &str = "Make a selection to personalize your list.";

/// At most one answer per onboarding question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub ecosystem: Option<&'static Choice>,
    pub membership: Option<&'static Choice>,
    pub local_commerce: Option<&'static Choice>,
}

impl Selection {
    pub fn resolve(
        ecosystem: Option<&str>,
        membership: Option<&str>,
        local_commerce: Option<&str>,
    ) -> Result<Self> {
        let selection = Self {
            ecosystem: resolve_choice(Category::Ecosystem, ecosystem)?,
            membership: resolve_choice(Category::Membership, membership)?,
            local_commerce: resolve_choice(Category::LocalCommerce, local_commerce)?,
        };
        tracing::info!(
            ecosystem = selection.ecosystem.map(|choice| choice.id),
            membership = selection.membership.map(|choice| choice.id),
            local_commerce = selection.local_commerce.map(|choice| choice.id),
            "resolved onboarding selection"
        );
        Ok(selection)
    }

    pub fn has_selection(&self) -> bool {
        self.ecosystem.is_some() || self.membership.is_some() || self.local_commerce.is_some()
    }

    pub fn get(&self, category: Category) -> Option<&'static Choice> {
        match category {
            Category::Ecosystem => self.ecosystem,
            Category::Membership => self.membership,
            Category::LocalCommerce => self.local_commerce,
        }
    }
}

fn resolve_choice(category: Category, id: Option<&str>) -> Result<Option<&'static Choice>> {
    let Some(id) = id else {
        return Ok(None);
    };
    let id = id.trim();
    category
        .find_choice(id)
        .map(Some)
        .ok_or_else(|| CompassError::UnknownChoice {
            category: category.to_string(),
            id: id.to_string(),
        })
}

/// Placeholder for the hand-off to portfolio construction. Only available
/// once at least one question has been answered.
pub fn continue_to_portfolio(selection: &Selection, scorer: &Scorer) -> Result<String> {
    if !selection.has_selection() {
        return Err(CompassError::NoSelection);
    }
    let tickers = scorer.rank(
        selection.ecosystem,
        selection.membership,
        selection.local_commerce,
    );
    Ok(format!("{CONTINUE_MESSAGE} Shortlist: {}", tickers.join(", ")))
}

pub fn boost_accuracy() -> &'static str {
    BOOST_MESSAGE
}
