//! 蒙特卡洛胜率计算
//!
//! 每次模拟 (trial) 都把剩余的牌洗一遍，补齐公共牌，再比较各家的最大牌型。
//! 模拟按批次分给 rayon 的线程池执行，每个批次使用从调用方随机源派生出的独立种子，
//! 所以给定种子时结果与线程调度无关，计数也总是精确地加总到模拟次数。

use crate::card::Card;
use crate::deck::{complete_board, remaining, shuffle, BOARD_SIZE};
use crate::error::OddsError;
use crate::hand::{best_of, compare, HandRank};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::time::Instant;
use tracing::debug;

pub const DEFAULT_TRIALS: u32 = 10_000;
pub const MAX_SEATS: usize = 9;
pub const HOLE_SIZE: usize = 2;
/// 结果中平局的键名，玩家不能使用
pub const TIE_KEY: &str = "tie";

const BATCH_SIZE: u32 = 1_000;

// --- 选项 ---

/// 多人模式下平局的计数方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieRule {
    /// 按平分的人数累加：三人平局计 3 次。各项之和可能超过模拟次数。
    #[default]
    PerWinner,
    /// 每次平局只计 1 次，各项之和恰好等于模拟次数
    PerTrial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityOptions {
    pub trials: u32,
    /// 为 `None` 时每次调用使用新的系统随机源
    pub seed: Option<u64>,
    pub tie_rule: TieRule,
}

impl Default for EquityOptions {
    fn default() -> Self {
        EquityOptions {
            trials: DEFAULT_TRIALS,
            seed: None,
            tie_rule: TieRule::default(),
        }
    }
}

impl EquityOptions {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_tie_rule(mut self, tie_rule: TieRule) -> Self {
        self.tie_rule = tie_rule;
        self
    }
}

// --- 两人模式 ---

/// 两人模式的请求：hero 与 villain 各 0..=2 张底牌，0..=5 张公共牌
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub hero: Vec<Card>,
    pub villain: Vec<Card>,
    pub board: Vec<Card>,
}

/// 两人模式的原始计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadsUpTally {
    pub hero_wins: u32,
    pub villain_wins: u32,
    pub ties: u32,
    /// 实际执行的模拟次数，底牌不全时为 0
    pub trials: u32,
}

/// 两人模式的百分比结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadsUpOdds {
    pub hero: f64,
    pub villain: f64,
    pub tie: f64,
}

impl HeadsUpTally {
    fn record(&mut self, outcome: Ordering) {
        match outcome {
            Ordering::Greater => self.hero_wins += 1,
            Ordering::Less => self.villain_wins += 1,
            Ordering::Equal => self.ties += 1,
        }
        self.trials += 1;
    }

    fn merge(mut self, other: HeadsUpTally) -> HeadsUpTally {
        self.hero_wins += other.hero_wins;
        self.villain_wins += other.villain_wins;
        self.ties += other.ties;
        self.trials += other.trials;
        self
    }

    pub fn odds(&self) -> HeadsUpOdds {
        HeadsUpOdds {
            hero: percent(self.hero_wins, self.trials),
            villain: percent(self.villain_wins, self.trials),
            tie: percent(self.ties, self.trials),
        }
    }
}

/// 计算两人的胜率
///
/// 任意一方底牌不足 2 张时不做模拟，直接返回全零。
pub fn heads_up(hand: &Hand, options: &EquityOptions) -> Result<HeadsUpTally, OddsError> {
    match options.seed {
        Some(seed) => heads_up_with_rng(hand, options, &mut StdRng::seed_from_u64(seed)),
        None => heads_up_with_rng(hand, options, &mut rand::rng()),
    }
}

/// 同 [`heads_up`]，随机源由调用方提供，忽略 `options.seed`
pub fn heads_up_with_rng<R: Rng + ?Sized>(
    hand: &Hand,
    options: &EquityOptions,
    rng: &mut R,
) -> Result<HeadsUpTally, OddsError> {
    check_board(&hand.board)?;
    check_hole("hero", &hand.hero)?;
    check_hole("villain", &hand.villain)?;
    check_unique(hand.hero.iter().chain(&hand.villain).chain(&hand.board))?;
    check_trials(options)?;

    if hand.hero.len() != HOLE_SIZE || hand.villain.len() != HOLE_SIZE {
        debug!(hero = hand.hero.len(), villain = hand.villain.len(), "底牌不全，跳过模拟");
        return Ok(HeadsUpTally::default());
    }

    let started = Instant::now();
    let known: Vec<Card> = hand.hero.iter().chain(&hand.villain).chain(&hand.board).copied().collect();
    let pool = remaining(&known);

    let tally = batch_plan(options.trials, rng)
        .into_par_iter()
        .map(|(seed, trials)| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut tally = HeadsUpTally::default();
            for _ in 0..trials {
                let mut deck = pool.clone();
                shuffle(&mut deck, &mut rng);
                let board = complete_board(&hand.board, &mut deck);
                let hero = best_of(&hand.hero, &board);
                let villain = best_of(&hand.villain, &board);
                tally.record(compare(&hero, &villain));
            }
            tally
        })
        .reduce(HeadsUpTally::default, HeadsUpTally::merge);

    debug!(trials = tally.trials, elapsed = ?started.elapsed(), "两人模拟完成");
    Ok(tally)
}

// --- 多人模式 ---

/// 一个座位上的玩家，`name` 同时是结果中的键
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub name: String,
    pub hole: Vec<Card>,
}

impl Seat {
    pub fn new(name: impl Into<String>, hole: Vec<Card>) -> Seat {
        Seat { name: name.into(), hole }
    }

    fn is_active(&self) -> bool {
        self.hole.len() == HOLE_SIZE
    }
}

/// 多人模式的请求：最多 9 个座位，空座位为 `None`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub players: Vec<Option<Seat>>,
    pub board: Vec<Card>,
}

/// 多人模式的原始计数，`wins[i]` 对应 `names[i]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiWayTally {
    pub names: Vec<String>,
    pub wins: Vec<u32>,
    pub ties: u32,
    pub trials: u32,
}

/// 多人模式的百分比结果，序列化为 `{ 玩家名: 百分比, ..., "tie": 百分比 }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiWayOdds {
    #[serde(flatten)]
    pub players: BTreeMap<String, f64>,
    pub tie: f64,
}

impl MultiWayTally {
    fn empty(names: Vec<String>) -> MultiWayTally {
        MultiWayTally {
            wins: vec![0; names.len()],
            names,
            ties: 0,
            trials: 0,
        }
    }

    fn merge(mut self, other: MultiWayTally) -> MultiWayTally {
        // reduce 的单位元没有玩家信息
        if self.names.is_empty() {
            return other;
        }
        for (w, o) in self.wins.iter_mut().zip(&other.wins) {
            *w += o;
        }
        self.ties += other.ties;
        self.trials += other.trials;
        self
    }

    pub fn wins_of(&self, name: &str) -> Option<u32> {
        self.names.iter().position(|n| n == name).map(|i| self.wins[i])
    }

    pub fn odds(&self) -> MultiWayOdds {
        if self.names.is_empty() {
            return MultiWayOdds { players: BTreeMap::new(), tie: 100.0 };
        }
        MultiWayOdds {
            players: self
                .names
                .iter()
                .zip(&self.wins)
                .map(|(name, &wins)| (name.clone(), percent(wins, self.trials)))
                .collect(),
            tie: percent(self.ties, self.trials),
        }
    }
}

/// 计算多人的胜率
///
/// 只有拿满 2 张底牌的玩家参与；没有这样的玩家时不做模拟，结果为 `{tie: 100}`。
pub fn multi_way(table: &Table, options: &EquityOptions) -> Result<MultiWayTally, OddsError> {
    match options.seed {
        Some(seed) => multi_way_with_rng(table, options, &mut StdRng::seed_from_u64(seed)),
        None => multi_way_with_rng(table, options, &mut rand::rng()),
    }
}

/// 同 [`multi_way`]，随机源由调用方提供，忽略 `options.seed`
pub fn multi_way_with_rng<R: Rng + ?Sized>(
    table: &Table,
    options: &EquityOptions,
    rng: &mut R,
) -> Result<MultiWayTally, OddsError> {
    // 检查顺序：公共牌、底牌张数、座位数、玩家名、重复的牌、模拟次数
    check_board(&table.board)?;
    let seats: Vec<&Seat> = table.players.iter().flatten().collect();
    for seat in &seats {
        check_hole(&seat.name, &seat.hole)?;
    }
    if table.players.len() > MAX_SEATS {
        return Err(OddsError::TooManySeats(table.players.len()));
    }
    let active: Vec<&Seat> = seats.iter().copied().filter(|s| s.is_active()).collect();
    check_names(&active)?;
    check_unique(seats.iter().flat_map(|s| s.hole.iter()).chain(&table.board))?;
    check_trials(options)?;

    if active.is_empty() {
        debug!("没有拿满底牌的玩家，跳过模拟");
        return Ok(MultiWayTally::default());
    }

    let started = Instant::now();
    let names: Vec<String> = active.iter().map(|s| s.name.clone()).collect();
    let known: Vec<Card> = active.iter().flat_map(|s| s.hole.iter()).chain(&table.board).copied().collect();
    let pool = remaining(&known);

    let tally = batch_plan(options.trials, rng)
        .into_par_iter()
        .map(|(seed, trials)| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut tally = MultiWayTally::empty(names.clone());
            let mut ranks: Vec<HandRank> = Vec::with_capacity(active.len());
            for _ in 0..trials {
                let mut deck = pool.clone();
                shuffle(&mut deck, &mut rng);
                let board = complete_board(&table.board, &mut deck);

                ranks.clear();
                ranks.extend(active.iter().map(|s| best_of(&s.hole, &board)));
                record_showdown(&mut tally, &ranks, options.tie_rule);
            }
            tally
        })
        .reduce(MultiWayTally::default, MultiWayTally::merge);

    debug!(
        players = active.len(),
        trials = tally.trials,
        ties = tally.ties,
        elapsed = ?started.elapsed(),
        "多人模拟完成"
    );
    Ok(tally)
}

/// 找出本次模拟中牌力最大的所有玩家并计数
fn record_showdown(tally: &mut MultiWayTally, ranks: &[HandRank], tie_rule: TieRule) {
    tally.trials += 1;
    let Some(best) = ranks.iter().max() else { return };
    let winners: Vec<usize> = ranks
        .iter()
        .enumerate()
        .filter(|(_, rank)| compare(rank, best) == Ordering::Equal)
        .map(|(i, _)| i)
        .collect();

    match winners.as_slice() {
        [winner] => tally.wins[*winner] += 1,
        _ => {
            tally.ties += match tie_rule {
                TieRule::PerWinner => winners.len() as u32,
                TieRule::PerTrial => 1,
            }
        }
    }
}

// --- 辅助函数 ---

fn percent(count: u32, trials: u32) -> f64 {
    if trials == 0 {
        return 0.0;
    }
    count as f64 / trials as f64 * 100.0
}

/// 把模拟次数切成批次，每批带一个独立的种子
fn batch_plan<R: Rng + ?Sized>(trials: u32, rng: &mut R) -> Vec<(u64, u32)> {
    let mut plan = Vec::with_capacity(trials.div_ceil(BATCH_SIZE) as usize);
    let mut left = trials;
    while left > 0 {
        let n = left.min(BATCH_SIZE);
        plan.push((rng.random::<u64>(), n));
        left -= n;
    }
    plan
}

fn check_trials(options: &EquityOptions) -> Result<(), OddsError> {
    if options.trials == 0 {
        return Err(OddsError::NoTrials);
    }
    Ok(())
}

fn check_board(board: &[Card]) -> Result<(), OddsError> {
    if board.len() > BOARD_SIZE {
        return Err(OddsError::BoardTooLong(board.len()));
    }
    Ok(())
}

fn check_hole(owner: &str, hole: &[Card]) -> Result<(), OddsError> {
    if hole.len() > HOLE_SIZE {
        return Err(OddsError::TooManyHoleCards { owner: owner.to_string(), len: hole.len() });
    }
    Ok(())
}

fn check_unique<'a>(cards: impl Iterator<Item = &'a Card>) -> Result<(), OddsError> {
    let mut seen = HashSet::new();
    for card in cards {
        if !seen.insert(*card) {
            return Err(OddsError::DuplicateCard(*card));
        }
    }
    Ok(())
}

fn check_names(active: &[&Seat]) -> Result<(), OddsError> {
    let mut seen = HashSet::new();
    for seat in active {
        if seat.name == TIE_KEY {
            return Err(OddsError::ReservedName);
        }
        if !seen.insert(seat.name.as_str()) {
            return Err(OddsError::DuplicateName(seat.name.clone()));
        }
    }
    Ok(())
}

// --- 单元测试 ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::parse_cards;

    fn cards(text: &str) -> Vec<Card> {
        parse_cards(text).unwrap()
    }

    fn hand(hero: &str, villain: &str, board: &str) -> Hand {
        Hand { hero: cards(hero), villain: cards(villain), board: cards(board) }
    }

    fn seat(name: &str, hole: &str) -> Option<Seat> {
        Some(Seat::new(name, cards(hole)))
    }

    // --- 两人模式 ---

    #[test]
    fn test_royal_flush_on_full_board_always_wins() {
        let hand = hand("AhKh", "2h2d", "QhJhTh2c3d");
        for _ in 0..3 {
            let tally = heads_up(&hand, &EquityOptions::default()).unwrap();
            assert_eq!(tally.hero_wins, DEFAULT_TRIALS);
            assert_eq!(tally.odds(), HeadsUpOdds { hero: 100.0, villain: 0.0, tie: 0.0 });
        }
    }

    #[test]
    fn test_full_board_split_is_always_a_tie() {
        // 公共牌就是皇家同花顺，双方平分
        let hand = hand("2c3d", "4c5d", "AsKsQsJsTs");
        let odds = heads_up(&hand, &EquityOptions::default().with_trials(500)).unwrap().odds();
        assert_eq!(odds, HeadsUpOdds { hero: 0.0, villain: 0.0, tie: 100.0 });
    }

    #[test]
    fn test_incomplete_hole_cards_skip_simulation() {
        let options = EquityOptions::default();
        let tally = heads_up(&hand("Ah", "2h2d", ""), &options).unwrap();
        assert_eq!(tally, HeadsUpTally::default());
        assert_eq!(tally.odds(), HeadsUpOdds { hero: 0.0, villain: 0.0, tie: 0.0 });

        let tally = heads_up(&hand("AhKh", "", "QhJhTh"), &options).unwrap();
        assert_eq!(tally.trials, 0);
    }

    #[test]
    fn test_trials_are_conserved() {
        let options = EquityOptions::default().with_seed(11).with_trials(2_345);
        let tally = heads_up(&hand("AsAh", "KsKh", ""), &options).unwrap();
        assert_eq!(tally.trials, 2_345);
        assert_eq!(tally.hero_wins + tally.villain_wins + tally.ties, 2_345);

        let odds = tally.odds();
        assert!((odds.hero + odds.villain + odds.tie - 100.0).abs() < 1e-9);
        // AA 对 KK 大约 82%
        assert!(odds.hero > 70.0 && odds.hero < 92.0, "hero = {}", odds.hero);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let hand = hand("AhKh", "QsQd", "2h7h");
        let options = EquityOptions::default().with_seed(2024).with_trials(3_000);
        assert_eq!(heads_up(&hand, &options).unwrap(), heads_up(&hand, &options).unwrap());
    }

    #[test]
    fn test_injected_rng_is_used() {
        let hand = hand("AhKh", "QsQd", "");
        let options = EquityOptions::default().with_trials(1_500);
        let a = heads_up_with_rng(&hand, &options, &mut StdRng::seed_from_u64(5)).unwrap();
        let b = heads_up_with_rng(&hand, &options, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_duplicate_card_is_rejected() {
        let err = heads_up(&hand("AhKh", "AhQd", ""), &EquityOptions::default()).unwrap_err();
        assert_eq!(err, OddsError::DuplicateCard(cards("Ah")[0]));

        let err = heads_up(&hand("AhKh", "2c2d", "Kh7s8s"), &EquityOptions::default()).unwrap_err();
        assert_eq!(err, OddsError::DuplicateCard(cards("Kh")[0]));
    }

    #[test]
    fn test_malformed_requests_are_rejected() {
        let options = EquityOptions::default();
        assert_eq!(
            heads_up(&hand("AhKh", "2c2d", "3c4c5c6c7c8c"), &options).unwrap_err(),
            OddsError::BoardTooLong(6)
        );
        assert!(matches!(
            heads_up(&hand("AhKhQh", "2c2d", ""), &options),
            Err(OddsError::TooManyHoleCards { len: 3, .. })
        ));
        assert_eq!(
            heads_up(&hand("AhKh", "2c2d", ""), &options.with_trials(0)).unwrap_err(),
            OddsError::NoTrials
        );
    }

    // --- 多人模式 ---

    #[test]
    fn test_no_active_players_is_a_full_tie() {
        let options = EquityOptions::default();
        let empty = Table::default();
        assert_eq!(multi_way(&empty, &options).unwrap().odds(), MultiWayOdds { players: BTreeMap::new(), tie: 100.0 });

        let table = Table { players: vec![None, seat("alice", "Ah"), None], board: vec![] };
        let odds = multi_way(&table, &options).unwrap().odds();
        assert!(odds.players.is_empty());
        assert_eq!(odds.tie, 100.0);
    }

    #[test]
    fn test_full_board_single_winner() {
        let table = Table {
            players: vec![seat("alice", "AhKh"), None, seat("bob", "2h2d"), seat("carol", "9c9d")],
            board: cards("QhJhTh2c3d"),
        };
        let tally = multi_way(&table, &EquityOptions::default().with_trials(400)).unwrap();
        assert_eq!(tally.wins_of("alice"), Some(400));
        assert_eq!(tally.wins_of("bob"), Some(0));
        assert_eq!(tally.ties, 0);

        let odds = tally.odds();
        assert_eq!(odds.players["alice"], 100.0);
        assert_eq!(odds.players["carol"], 0.0);
        assert_eq!(odds.players.len(), 3);
    }

    // 四张彩虹公共牌，三人底牌点数相同且无法成同花，每次都是三人平分
    fn three_way_split() -> Table {
        Table {
            players: vec![seat("p1", "2c3d"), seat("p2", "2h3s"), seat("p3", "2d3c")],
            board: cards("AsKdQhJc"),
        }
    }

    #[test]
    fn test_tie_counts_every_tied_winner_by_default() {
        let options = EquityOptions::default().with_seed(3).with_trials(1_000);
        let tally = multi_way(&three_way_split(), &options).unwrap();
        assert_eq!(tally.trials, 1_000);
        assert_eq!(tally.ties, 3_000);
        assert!(tally.wins.iter().all(|&w| w == 0));
        assert_eq!(tally.odds().tie, 300.0);
    }

    #[test]
    fn test_tie_counts_once_per_trial_when_requested() {
        let options = EquityOptions::default()
            .with_seed(3)
            .with_trials(1_000)
            .with_tie_rule(TieRule::PerTrial);
        let tally = multi_way(&three_way_split(), &options).unwrap();
        assert_eq!(tally.ties, 1_000);
        assert_eq!(tally.odds().tie, 100.0);
    }

    #[test]
    fn test_per_trial_rule_conserves_trials() {
        let table = Table {
            players: vec![seat("a", "AsAh"), seat("b", "KsKh"), seat("c", "7c8c"), None],
            board: vec![],
        };
        let options = EquityOptions::default().with_seed(99).with_trials(2_500).with_tie_rule(TieRule::PerTrial);
        let tally = multi_way(&table, &options).unwrap();
        assert_eq!(tally.wins.iter().sum::<u32>() + tally.ties, 2_500);
        assert_eq!(multi_way(&table, &options).unwrap(), tally);
    }

    #[test]
    fn test_multi_way_validation() {
        let options = EquityOptions::default();

        let crowded = Table { players: vec![None; 10], board: vec![] };
        assert_eq!(multi_way(&crowded, &options).unwrap_err(), OddsError::TooManySeats(10));

        let twins = Table { players: vec![seat("x", "AhKh"), seat("x", "2c2d")], board: vec![] };
        assert_eq!(multi_way(&twins, &options).unwrap_err(), OddsError::DuplicateName("x".into()));

        let reserved = Table { players: vec![seat("tie", "AhKh")], board: vec![] };
        assert_eq!(multi_way(&reserved, &options).unwrap_err(), OddsError::ReservedName);

        // 未拿满底牌的座位也参与重复检查
        let clash = Table { players: vec![seat("a", "AhKh"), seat("b", "Kh")], board: vec![] };
        assert!(matches!(multi_way(&clash, &options), Err(OddsError::DuplicateCard(_))));
    }

    #[test]
    fn test_validation_precedence() {
        // 底牌张数先于座位数
        let crowded: Vec<Option<Seat>> = (0..10).map(|i| Some(Seat::new(format!("p{}", i), vec![]))).collect();
        let mut crowded = Table { players: crowded, board: vec![] };
        if let Some(Some(first)) = crowded.players.first_mut() {
            first.hole = cards("2c3c4c");
        }
        assert!(matches!(
            multi_way(&crowded, &EquityOptions::default()),
            Err(OddsError::TooManyHoleCards { len: 3, .. })
        ));

        // 玩家名先于重复的牌
        let reserved = Table { players: vec![seat("tie", "AhKh"), seat("b", "AhQd")], board: vec![] };
        assert_eq!(multi_way(&reserved, &EquityOptions::default()).unwrap_err(), OddsError::ReservedName);

        // 重复的牌先于模拟次数
        let options = EquityOptions::default().with_trials(0);
        assert_eq!(
            heads_up(&hand("AhKh", "AhQd", ""), &options).unwrap_err(),
            OddsError::DuplicateCard(cards("Ah")[0])
        );
        let twins = Table { players: vec![seat("a", "AhKh"), seat("b", "KhQd")], board: vec![] };
        assert_eq!(multi_way(&twins, &options).unwrap_err(), OddsError::DuplicateCard(cards("Kh")[0]));

        // 公共牌最先检查
        assert_eq!(
            heads_up(&hand("AhKhQh", "AhQd", "3c4c5c6c7c8c"), &options).unwrap_err(),
            OddsError::BoardTooLong(6)
        );
    }

    #[test]
    fn test_multi_way_odds_deserialize_flat() {
        let odds: MultiWayOdds = serde_json::from_str(r#"{"alice":50,"bob":25.5,"tie":24.5}"#).unwrap();
        assert_eq!(odds.tie, 24.5);
        assert_eq!(odds.players.len(), 2);
        assert_eq!(odds.players["alice"], 50.0);
        assert_eq!(odds.players["bob"], 25.5);
        assert!(!odds.players.contains_key("tie"));
    }

    #[test]
    fn test_multi_way_odds_serialize_flat() {
        let tally = MultiWayTally {
            names: vec!["alice".into(), "bob".into()],
            wins: vec![50, 25],
            ties: 25,
            trials: 100,
        };
        let json = serde_json::to_value(tally.odds()).unwrap();
        assert_eq!(json, serde_json::json!({ "alice": 50.0, "bob": 25.0, "tie": 25.0 }));
    }
}
