use crate::card::{Card, Rank, Suit};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// 牌型类别，序号 1 (高牌) 到 9 (同花顺)
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl HandCategory {
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

/// 牌型等级 (HandRank)
/// 1. 变体的顺序从小到大排列，派生的 `Ord` 就是比较器：先比类别，再逐项比内部字段。
/// 2. 每个变体只携带该类别比较所需的字段，不存在长度不一致的比较向量。
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Serialize, Deserialize)]
pub enum HandRank {
    HighCard(Rank, Rank, Rank, Rank, Rank),          // 高牌
    OnePair(Rank, Rank, Rank, Rank),                 // 一对 (对子, 三张踢脚)
    TwoPair(Rank, Rank, Rank),                       // 两对 (大对, 小对, 踢脚)
    ThreeOfAKind(Rank, Rank, Rank),                  // 三条 (三条, 两张踢脚)
    Straight(Rank),                                  // 顺子 (最高牌的点数)
    Flush(Rank, Rank, Rank, Rank, Rank),             // 同花
    FullHouse(Rank, Rank),                           // 葫芦 (三条的点数, 对子的点数)
    FourOfAKind(Rank, Rank),                         // 四条 (四条的点数, 踢脚牌)
    StraightFlush(Rank),                             // 同花顺 (最高牌的点数)，A 高即皇家同花顺
}

impl HandRank {
    pub fn category(&self) -> HandCategory {
        match self {
            HandRank::HighCard(..) => HandCategory::HighCard,
            HandRank::OnePair(..) => HandCategory::OnePair,
            HandRank::TwoPair(..) => HandCategory::TwoPair,
            HandRank::ThreeOfAKind(..) => HandCategory::ThreeOfAKind,
            HandRank::Straight(..) => HandCategory::Straight,
            HandRank::Flush(..) => HandCategory::Flush,
            HandRank::FullHouse(..) => HandCategory::FullHouse,
            HandRank::FourOfAKind(..) => HandCategory::FourOfAKind,
            HandRank::StraightFlush(..) => HandCategory::StraightFlush,
        }
    }

    /// 数值形式的比较向量，A 记为 14，顺子/同花顺只有最高牌一项
    pub fn tiebreak(&self) -> Vec<u8> {
        let ranks: Vec<Rank> = match *self {
            HandRank::HighCard(a, b, c, d, e) | HandRank::Flush(a, b, c, d, e) => vec![a, b, c, d, e],
            HandRank::OnePair(a, b, c, d) => vec![a, b, c, d],
            HandRank::TwoPair(a, b, c) | HandRank::ThreeOfAKind(a, b, c) => vec![a, b, c],
            HandRank::FullHouse(a, b) | HandRank::FourOfAKind(a, b) => vec![a, b],
            HandRank::Straight(a) | HandRank::StraightFlush(a) => vec![a],
        };
        ranks.into_iter().map(Rank::value).collect()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            HandRank::HighCard(r1, ..) => format!("高牌({})", r1),
            HandRank::OnePair(r1, ..) => format!("一对({})", r1),
            HandRank::TwoPair(r1, r2, ..) => format!("两对({},{})", r1, r2),
            HandRank::ThreeOfAKind(r1, ..) => format!("三条({})", r1),
            HandRank::Straight(r1) => format!("顺子({}高)", r1),
            HandRank::Flush(r1, ..) => format!("同花({}高)", r1),
            HandRank::FullHouse(r1, r2) => format!("葫芦({}带{})", r1, r2),
            HandRank::FourOfAKind(r1, ..) => format!("四条({})", r1),
            HandRank::StraightFlush(Rank::Ace) => "皇家同花顺".to_string(),
            HandRank::StraightFlush(r1) => format!("同花顺({}高)", r1),
        })
    }
}

/// 比较两手牌：类别高者胜，类别相同则逐项比较，全部相同为平局
pub fn compare(a: &HandRank, b: &HandRank) -> Ordering {
    a.cmp(b)
}

// --- 牌型评估逻辑 ---

/// 底牌 + 公共牌的最大牌型
pub fn best_of(hole: &[Card], board: &[Card]) -> HandRank {
    let mut cards = Vec::with_capacity(hole.len() + board.len());
    cards.extend_from_slice(hole);
    cards.extend_from_slice(board);
    evaluate(&cards)
}

/// 从 5 到 7 张牌中找出最优的 5 张牌组合牌力
///
/// 不枚举组合，而是直接统计点数和花色：
/// 同花顺只在同花花色的牌里找顺子，避免把跨花色的顺子和无关的同花拼成同花顺。
///
/// # Panics
/// 如果牌数少于 5 或多于 7，则会 panic。输入的牌必须互不相同。
pub fn evaluate(cards: &[Card]) -> HandRank {
    let card_count = cards.len();
    assert!((5..=7).contains(&card_count), "牌数必须在5到7张之间");
    debug_assert!(
        cards.iter().enumerate().all(|(i, c)| !cards[i + 1..].contains(c)),
        "评估的牌中有重复"
    );

    let tally = Tally::new(cards);

    // 1. 同花 / 同花顺 (7 张牌最多只有一个花色能凑够 5 张)
    let flush_suit = Suit::ALL.into_iter().find(|&s| tally.suit_counts[s as usize] >= 5);
    if let Some(suit) = flush_suit {
        if let Some(high) = straight_high(tally.suit_masks[suit as usize]) {
            return HandRank::StraightFlush(high);
        }
    }

    // 2. 四条
    if let Some(quad) = tally.ranks_with_at_least(4).next() {
        let kicker = tally.kickers(&[quad], 1);
        return HandRank::FourOfAKind(quad, kicker[0]);
    }

    // 3. 葫芦：两个三条时，小的三条当对子用
    if let Some(triple) = tally.ranks_with_at_least(3).next() {
        if let Some(pair) = tally.ranks_with_at_least(2).find(|&r| r != triple) {
            return HandRank::FullHouse(triple, pair);
        }
    }

    // 4. 同花：该花色中最大的 5 张
    if let Some(suit) = flush_suit {
        let top = ranks_desc(tally.suit_masks[suit as usize]);
        return HandRank::Flush(top[0], top[1], top[2], top[3], top[4]);
    }

    // 5. 顺子
    if let Some(high) = straight_high(tally.rank_mask) {
        return HandRank::Straight(high);
    }

    // 6. 三条
    if let Some(triple) = tally.ranks_with_at_least(3).next() {
        let k = tally.kickers(&[triple], 2);
        return HandRank::ThreeOfAKind(triple, k[0], k[1]);
    }

    // 7. 两对 / 一对
    let pairs: Vec<Rank> = tally.ranks_with_at_least(2).collect();
    if pairs.len() >= 2 {
        let k = tally.kickers(&pairs[..2], 1);
        return HandRank::TwoPair(pairs[0], pairs[1], k[0]);
    }
    if let Some(&pair) = pairs.first() {
        let k = tally.kickers(&[pair], 3);
        return HandRank::OnePair(pair, k[0], k[1], k[2]);
    }

    // 8. 高牌
    let top = ranks_desc(tally.rank_mask);
    HandRank::HighCard(top[0], top[1], top[2], top[3], top[4])
}

/// 点数和花色的统计结果
struct Tally {
    rank_counts: [u8; 13],
    rank_mask: u16,
    suit_counts: [u8; 4],
    // 每个花色出现过的点数，按位存放
    suit_masks: [u16; 4],
}

impl Tally {
    fn new(cards: &[Card]) -> Self {
        let mut tally = Tally {
            rank_counts: [0; 13],
            rank_mask: 0,
            suit_counts: [0; 4],
            suit_masks: [0; 4],
        };
        for card in cards {
            let bit = 1u16 << card.rank as u16;
            tally.rank_counts[card.rank as usize] += 1;
            tally.rank_mask |= bit;
            tally.suit_counts[card.suit as usize] += 1;
            tally.suit_masks[card.suit as usize] |= bit;
        }
        tally
    }

    /// 出现次数不少于 `n` 的点数，从大到小
    fn ranks_with_at_least(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        Rank::ALL.into_iter().rev().filter(move |&r| self.rank_counts[r as usize] >= n)
    }

    /// 除 `exclude` 以外最大的 `n` 个点数
    fn kickers(&self, exclude: &[Rank], n: usize) -> Vec<Rank> {
        self.ranks_with_at_least(1)
            .filter(|r| !exclude.contains(r))
            .take(n)
            .collect()
    }
}

/// 位掩码中的点数，从大到小
fn ranks_desc(mask: u16) -> Vec<Rank> {
    Rank::ALL.into_iter().rev().filter(|&r| mask & (1 << r as u16) != 0).collect()
}

/// 位掩码中最大的顺子，返回最高牌
/// A-2-3-4-5 只有在没有更大的顺子时才算，最高牌为 5
fn straight_high(mask: u16) -> Option<Rank> {
    const WINDOW: u16 = 0b1_1111;
    for high in (Rank::Six as u16..=Rank::Ace as u16).rev() {
        let window = WINDOW << (high - 4);
        if mask & window == window {
            return Some(Rank::ALL[high as usize]);
        }
    }

    const WHEEL: u16 = (1 << Rank::Ace as u16) | 0b1111;
    if mask & WHEEL == WHEEL {
        return Some(Rank::Five);
    }
    None
}

// --- 单元测试 ---
