//! Affinity scoring: turns up to three onboarding answers into a ranked
//! shortlist of tickers.
//!
//! Each answered category credits its choice's ticker with the full
//! category weight and every complement with `complement_factor` of it.
//! The per-category maps are summed together with a fixed geo prior, then
//! sorted by score descending with ties broken by ticker ascending.

use crate::catalog::{self, Category, Choice, Ticker};
use crate::error::{CompassError, Result};
use crate::onboarding::Selection;
use crate::types::config::CompassConfig;
use crate::types::scoring::{Pick, Score, ScoreMap};
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct Scorer {
    weights: [Score; 3],
    complement_factor: Score,
    geo_prior: Vec<(Ticker, Score)>,
    top_n: usize,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            weights: CompassConfig::default_weights(),
            complement_factor: 0.4,
            geo_prior: vec![("MCD", 0.05), ("HD", 0.05), ("BKNG", 0.05)],
            top_n: 6,
        }
    }
}

impl Scorer {
    /// Builds a scorer from validated configuration. All catalog references
    /// are resolved here so that ranking itself cannot fail.
    pub fn from_config(config: &CompassConfig) -> Result<Self> {
        config.validate()?;

        let prior = config.geo_prior();
        let geo_prior = config
            .geo_tickers()
            .iter()
            .map(|ticker| {
                catalog::find_company(ticker.trim())
                    .map(|company| (company.ticker, prior))
                    .ok_or_else(|| {
                        CompassError::Catalog(format!(
                            "geo prior references unknown ticker: {ticker}"
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let geo_tickers = geo_prior.iter().map(|(ticker, _)| *ticker).collect::<Vec<_>>();
        catalog::validate(&geo_tickers)?;

        Ok(Self {
            weights: config.weights(),
            complement_factor: config.complement_factor(),
            geo_prior,
            top_n: config.top_n(),
        })
    }

    pub fn weight(&self, category: Category) -> Score {
        match category {
            Category::Ecosystem => self.weights[0],
            Category::Membership => self.weights[1],
            Category::LocalCommerce => self.weights[2],
        }
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn complement_factor(&self) -> Score {
        self.complement_factor
    }

    pub fn geo_prior(&self) -> ScoreMap {
        let mut map = ScoreMap::new();
        for (ticker, prior) in &self.geo_prior {
            credit(&mut map, *ticker, *prior);
        }
        map
    }

    /// Partial scores contributed by a single answered question.
    pub fn score_choice(&self, choice: Option<&Choice>, weight: Score) -> ScoreMap {
        let mut map = ScoreMap::new();
        let Some(choice) = choice else {
            return map;
        };
        credit(&mut map, choice.ticker, weight);
        for complement in choice.complements {
            credit(&mut map, *complement, self.complement_factor * weight);
        }
        map
    }

    pub fn score(
        &self,
        ecosystem: Option<&Choice>,
        membership: Option<&Choice>,
        local_commerce: Option<&Choice>,
    ) -> ScoreMap {
        let merged = merge_scores([
            self.score_choice(ecosystem, self.weight(Category::Ecosystem)),
            self.score_choice(membership, self.weight(Category::Membership)),
            self.score_choice(local_commerce, self.weight(Category::LocalCommerce)),
            self.geo_prior(),
        ]);
        tracing::debug!(entries = merged.len(), "merged affinity scores");
        merged
    }

    pub fn rank_scored(
        &self,
        ecosystem: Option<&Choice>,
        membership: Option<&Choice>,
        local_commerce: Option<&Choice>,
    ) -> Vec<Pick> {
        top_n(&self.score(ecosystem, membership, local_commerce), self.top_n)
    }

    pub fn rank(
        &self,
        ecosystem: Option<&Choice>,
        membership: Option<&Choice>,
        local_commerce: Option<&Choice>,
    ) -> Vec<Ticker> {
        self.rank_scored(ecosystem, membership, local_commerce)
            .into_iter()
            .map(|pick| pick.ticker)
            .collect()
    }

    pub fn rank_selection(&self, selection: &Selection) -> Vec<Pick> {
        self.rank_scored(
            selection.ecosystem,
            selection.membership,
            selection.local_commerce,
        )
    }
}

/// Only positive contributions create an entry; a zero credit must not
/// make a ticker present in the merged map.
fn credit(map: &mut ScoreMap, ticker: Ticker, score: Score) {
    if score > 0.0 {
        *map.entry(ticker).or_insert(0.0) += score;
    }
}

pub fn merge_scores<I>(maps: I) -> ScoreMap
where
    I: IntoIterator<Item = ScoreMap>,
{
    let mut out = ScoreMap::new();
    for map in maps {
        for (ticker, score) in map {
            *out.entry(ticker).or_insert(0.0) += score;
        }
    }
    out
}

/// Highest `n` entries, score descending then ticker ascending.
pub fn top_n(scores: &ScoreMap, n: usize) -> Vec<Pick> {
    let mut picks = scores
        .iter()
        .map(|(ticker, score)| Pick {
            ticker: *ticker,
            score: *score,
        })
        .collect::<Vec<_>>();

    picks.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.ticker.cmp(b.ticker))
    });
    picks.truncate(n);
    picks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eco(id: &str) -> Option<&'static Choice> {
        Some(Category::Ecosystem.find_choice(id).expect("ecosystem choice"))
    }

    fn mem(id: &str) -> Option<&'static Choice> {
        Some(Category::Membership.find_choice(id).expect("membership choice"))
    }

    fn loc(id: &str) -> Option<&'static Choice> {
        Some(Category::LocalCommerce.find_choice(id).expect("local choice"))
    }

    fn approx(a: Score, b: Score) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn no_selection_returns_geo_prior_in_ticker_order() {
        let scorer = Scorer::default();
        assert_eq!(scorer.rank(None, None, None), vec!["BKNG", "HD", "MCD"]);
    }

    #[test]
    fn apple_only_drops_last_geo_ticker() {
        let scorer = Scorer::default();
        let scores = scorer.score(eco("apple"), None, None);
        assert_eq!(scores.len(), 7);
        assert!(approx(scores["AAPL"], 0.6));
        for ticker in ["GOOGL", "MSFT", "AMZN"] {
            assert!(approx(scores[ticker], 0.24), "{ticker}");
        }
        for ticker in ["MCD", "HD", "BKNG"] {
            assert!(approx(scores[ticker], 0.05), "{ticker}");
        }

        assert_eq!(
            scorer.rank(eco("apple"), None, None),
            vec!["AAPL", "AMZN", "GOOGL", "MSFT", "BKNG", "HD"]
        );
    }

    #[test]
    fn apple_and_costco_rank_retail_complements_above_geo() {
        let scorer = Scorer::default();
        let scores = scorer.score(eco("apple"), mem("costco"), None);
        assert!(approx(scores["COST"], 0.3));
        assert!(approx(scores["WMT"], 0.12));
        assert!(approx(scores["TGT"], 0.12));

        assert_eq!(
            scorer.rank(eco("apple"), mem("costco"), None),
            vec!["AAPL", "COST", "AMZN", "GOOGL", "MSFT", "TGT"]
        );
    }

    #[test]
    fn single_choice_outranks_complements_and_geo() {
        let scorer = Scorer::default();
        for category in Category::ALL {
            let weight = scorer.weight(category);
            for choice in category.choices() {
                let map = scorer.score_choice(Some(choice), weight);
                let own = map[choice.ticker];
                for complement in choice.complements {
                    assert!(own > map[complement], "{} vs {complement}", choice.id);
                    assert!(map[complement] > 0.05, "{complement} should beat geo");
                }
                assert!(own > 0.05);
            }
        }
    }

    #[test]
    fn empty_complement_list_contributes_only_own_ticker() {
        let scorer = Scorer::default();
        let map = scorer.score_choice(loc("doordash"), 0.2);
        assert_eq!(map.len(), 1);
        assert!(approx(map["DASH"], 0.2));

        let merged = scorer.score(None, None, loc("doordash"));
        let mut keys = merged.keys().copied().collect::<Vec<_>>();
        keys.sort();
        assert_eq!(keys, vec!["BKNG", "DASH", "HD", "MCD"]);
    }

    #[test]
    fn null_choice_contributes_nothing() {
        let scorer = Scorer::default();
        assert!(scorer.score_choice(None, 0.6).is_empty());
    }

    #[test]
    fn collisions_across_categories_are_summed() {
        let scorer = Scorer::default();
        // prime credits AMZN directly and AAPL as a complement.
        let scores = scorer.score(eco("apple"), mem("prime"), loc("none-local"));
        assert!(approx(scores["AAPL"], 0.6 + 0.4 * 0.3));
        assert!(approx(scores["AMZN"], 0.24 + 0.3));
        assert!(approx(scores["MCD"], 0.2 + 0.05));
    }

    #[test]
    fn merge_order_does_not_change_scores() {
        let scorer = Scorer::default();
        let parts = [
            scorer.score_choice(eco("google"), 0.6),
            scorer.score_choice(mem("walmart"), 0.3),
            scorer.score_choice(loc("uber"), 0.2),
            scorer.geo_prior(),
        ];
        let forward = merge_scores(parts.clone());
        let mut reversed_parts = parts.to_vec();
        reversed_parts.reverse();
        let reversed = merge_scores(reversed_parts);
        let nested = merge_scores([
            merge_scores([parts[2].clone(), parts[0].clone()]),
            merge_scores([parts[3].clone(), parts[1].clone()]),
        ]);

        for other in [&reversed, &nested] {
            assert_eq!(forward.len(), other.len());
            for (ticker, score) in &forward {
                assert!(approx(*score, other[ticker]), "{ticker}");
            }
        }
    }

    #[test]
    fn ranking_is_idempotent() {
        let scorer = Scorer::default();
        let first = scorer.rank_scored(eco("meta"), mem("target"), loc("lyft"));
        let second = scorer.rank_scored(eco("meta"), mem("target"), loc("lyft"));
        assert_eq!(first, second);
    }

    #[test]
    fn top_n_returns_fewer_when_map_is_small() {
        let mut scores = ScoreMap::new();
        scores.insert("HD", 0.05);
        scores.insert("AAPL", 0.6);
        let picks = top_n(&scores, 6);
        assert_eq!(
            picks.iter().map(|pick| pick.ticker).collect::<Vec<_>>(),
            vec!["AAPL", "HD"]
        );
    }

    #[test]
    fn from_config_applies_overrides() {
        let config: CompassConfig = toml::from_str(
            r#"
[scoring]
top_n = 2

[geo]
tickers = ["DAL"]
prior = 0.01
"#,
        )
        .expect("config should parse");
        let scorer = Scorer::from_config(&config).expect("scorer should build");
        assert_eq!(scorer.rank(None, None, None), vec!["DAL"]);
        assert_eq!(scorer.rank(eco("tencent"), None, None), vec!["TCEHY", "BABA"]);
    }

    #[test]
    fn from_config_rejects_unknown_geo_ticker() {
        let config: CompassConfig = toml::from_str(
            r#"
[geo]
tickers = ["NOPE"]
"#,
        )
        .expect("config should parse");
        let err = Scorer::from_config(&config).expect_err("unknown geo ticker should fail");
        assert!(matches!(err, CompassError::Catalog(_)));
    }

    #[test]
    fn default_scorer_matches_empty_config() {
        let built = Scorer::from_config(&CompassConfig::default()).expect("defaults should build");
        let default = Scorer::default();
        assert_eq!(
            built.rank(eco("alibaba"), mem("starbucks"), loc("grab")),
            default.rank(eco("alibaba"), mem("starbucks"), loc("grab"))
        );
    }

    #[test]
    fn zero_weight_adds_no_entries() {
        let scorer = Scorer::default();
        assert!(scorer.score_choice(mem("costco"), 0.0).is_empty());
    }

    #[test]
    fn zero_weight_scorer_never_fills_shortlist_with_zero_scores() {
        let scorer = Scorer {
            weights: [0.6, 0.0, 0.2],
            ..Scorer::default()
        };
        let scores = scorer.score(None, mem("costco"), None);
        assert!(!scores.contains_key("COST"));
        assert!(!scores.contains_key("WMT"));
        assert!(!scores.contains_key("TGT"));
        assert_eq!(
            scorer.rank(None, mem("costco"), None),
            vec!["BKNG", "HD", "MCD"]
        );
    }

    #[test]
    fn zero_complement_factor_credits_only_primary_ticker() {
        let scorer = Scorer {
            complement_factor: 0.0,
            ..Scorer::default()
        };
        let map = scorer.score_choice(eco("apple"), 0.6);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["AAPL"]);
    }

    #[test]
    fn zero_geo_prior_leaves_geo_tickers_absent() {
        let scorer = Scorer {
            geo_prior: vec![("MCD", 0.0), ("HD", 0.0), ("BKNG", 0.0)],
            ..Scorer::default()
        };
        assert!(scorer.geo_prior().is_empty());
        assert!(scorer.rank(None, None, None).is_empty());
        assert_eq!(
            scorer.rank(None, None, loc("doordash")),
            vec!["DASH"]
        );
    }

    #[test]
    fn from_config_rejects_zero_weight() {
        let config: CompassConfig = toml::from_str(
            r#"
[scoring.weights]
membership = 0.0
"#,
        )
        .expect("config should parse");
        let err = Scorer::from_config(&config).expect_err("zero weight should fail");
        assert!(matches!(err, CompassError::ConfigParse(_)));
    }
}
