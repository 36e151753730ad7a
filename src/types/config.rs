use crate::catalog::{self, Category};
use crate::error::CompassError;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompassConfig {
    pub scoring: Option<ScoringConfig>,
    pub geo: Option<GeoConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub weights: Option<HashMap<String, f32>>,
    pub complement_factor: Option<f32>,
    pub top_n: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeoConfig {
    pub tickers: Option<Vec<String>>,
    pub prior: Option<f32>,
}

const ALLOWED_WEIGHT_KEYS: [&str; 3] = ["ecosystem", "membership", "local_commerce"];

impl CompassConfig {
    pub fn default_weights() -> [f32; 3] {
        [0.6, 0.3, 0.2]
    }

    pub fn default_geo_tickers() -> Vec<String> {
        ["MCD", "HD", "BKNG"].map(String::from).to_vec()
    }

    /// Category weights ordered as `Category::ALL`.
    pub fn weights(&self) -> [f32; 3] {
        let defaults = Self::default_weights();
        match self.scoring.as_ref().and_then(|scoring| scoring.weights.as_ref()) {
            Some(weights) => [
                *weights.get("ecosystem").unwrap_or(&defaults[0]),
                *weights.get("membership").unwrap_or(&defaults[1]),
                *weights.get("local_commerce").unwrap_or(&defaults[2]),
            ],
            None => defaults,
        }
    }

    pub fn weight_for(&self, category: Category) -> f32 {
        let weights = self.weights();
        match category {
            Category::Ecosystem => weights[0],
            Category::Membership => weights[1],
            Category::LocalCommerce => weights[2],
        }
    }

    pub fn complement_factor(&self) -> f32 {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.complement_factor)
            .unwrap_or(0.4)
    }

    pub fn top_n(&self) -> usize {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.top_n)
            .unwrap_or(6)
    }

    pub fn geo_tickers(&self) -> Vec<String> {
        self.geo
            .as_ref()
            .and_then(|geo| geo.tickers.clone())
            .unwrap_or_else(Self::default_geo_tickers)
    }

    pub fn geo_prior(&self) -> f32 {
        self.geo.as_ref().and_then(|geo| geo.prior).unwrap_or(0.05)
    }

    pub fn validate(&self) -> Result<(), CompassError> {
        if let Some(weights) = self.scoring.as_ref().and_then(|scoring| scoring.weights.as_ref()) {
            let mut unknown = weights
                .keys()
                .filter(|key| !ALLOWED_WEIGHT_KEYS.contains(&key.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                unknown.sort();
                return Err(CompassError::ConfigParse(format!(
                    "scoring.weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }
        }

        if self
            .weights()
            .iter()
            .any(|weight| !is_positive_fraction(*weight))
        {
            return Err(CompassError::ConfigParse(
                "scoring.weights values must be greater than 0.0 and at most 1.0".to_string(),
            ));
        }

        if !is_positive_fraction(self.complement_factor()) {
            return Err(CompassError::ConfigParse(
                "scoring.complement_factor must be greater than 0.0 and at most 1.0".to_string(),
            ));
        }

        if self.top_n() == 0 {
            return Err(CompassError::ConfigParse(
                "scoring.top_n must be greater than 0".to_string(),
            ));
        }

        let prior = self.geo_prior();
        if !prior.is_finite() || prior <= 0.0 {
            return Err(CompassError::ConfigParse(
                "geo.prior must be a finite number greater than 0.0".to_string(),
            ));
        }

        let mut seen = HashSet::<String>::new();
        for ticker in self.geo_tickers() {
            let normalized = ticker.trim();
            if normalized.is_empty() {
                return Err(CompassError::ConfigParse(
                    "geo.tickers entries must be non-empty ticker symbols".to_string(),
                ));
            }
            if !seen.insert(normalized.to_string()) {
                return Err(CompassError::ConfigParse(format!(
                    "geo.tickers contains duplicate ticker: {normalized}"
                )));
            }
            if catalog::find_company(normalized).is_none() {
                return Err(CompassError::Catalog(format!(
                    "geo prior references unknown ticker: {normalized}"
                )));
            }
        }

        for category in Category::ALL {
            let weight = self.weight_for(category);
            if weight <= prior {
                tracing::warn!(
                    category = category.as_str(),
                    weight,
                    prior,
                    "category weight does not outrank the geo prior"
                );
            }
        }

        Ok(())
    }
}

fn is_positive_fraction(value: f32) -> bool {
    value > 0.0 && value <= 1.0
}
