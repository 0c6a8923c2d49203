use crate::card::{Card, Rank, Suit};
use rand::Rng;
use rand::prelude::SliceRandom;

pub const DECK_SIZE: usize = 52;
pub const BOARD_SIZE: usize = 5;

// --- 牌堆与抽样 ---

/// 创建一副完整的 52 张扑克牌
/// 顺序固定：先按花色，再按点数，只作为洗牌前的基准
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &suit in &Suit::ALL {
        for &rank in &Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// 整副牌去掉已知的牌
/// `excluded` 本身有重复也没关系，这里只做精确匹配
pub fn remaining(excluded: &[Card]) -> Vec<Card> {
    full_deck()
        .into_iter()
        .filter(|card| !excluded.contains(card))
        .collect()
}

/// 原地洗牌 (Fisher–Yates)，随机源由调用方注入
pub fn shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}

/// 把公共牌补到 5 张
///
/// 从洗好的牌堆尾部依次取牌，相当于从牌堆顶发牌。
///
/// # Panics
/// 牌堆不够补齐时 panic。正常输入下最多只用到 7 + 2*9 张牌，不会发生。
pub fn complete_board(board: &[Card], shuffled: &mut Vec<Card>) -> Vec<Card> {
    let mut complete = Vec::with_capacity(BOARD_SIZE);
    complete.extend_from_slice(board);
    while complete.len() < BOARD_SIZE {
        let card = shuffled.pop().expect("牌堆已空，无法补齐公共牌");
        complete.push(card);
    }
    complete
}

// --- 单元测试 ---
