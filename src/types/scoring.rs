use crate::catalog::Ticker;
use std::collections::HashMap;

pub type Score = f32;

pub type ScoreMap = HashMap<Ticker, Score>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pick {
    pub ticker: Ticker,
    pub score: Score,
}
