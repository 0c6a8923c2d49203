use crate::error::OddsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// --- 核心数据结构定义 ---

/// 花色 (Suit)
/// 序列化为 "hearts" / "diamonds" / "clubs" / "spades"，与前端约定一致
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,   // 红心 ♥
    Diamonds, // 方块 ♦
    Clubs,    // 梅花 ♣
    Spades,   // 黑桃 ♠
}

/// 点数 (Rank)
/// Ace 可以是最大也可以是最小 (在 A-2-3-4-5 顺子中)
/// Ord 的派生让 Ace 默认是最大的
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
}

/// 单张扑克牌 (Card)
/// 相等性就是 (花色, 点数) 的值相等
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Suit {
    /// 牌堆的枚举顺序
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    fn from_char(c: char) -> Option<Suit> {
        match c {
            'h' | 'H' | '♥' => Some(Suit::Hearts),
            'd' | 'D' | '♦' => Some(Suit::Diamonds),
            'c' | 'C' | '♣' => Some(Suit::Clubs),
            's' | 'S' | '♠' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl Rank {
    /// 从小到大
    pub const ALL: [Rank; 13] = [
        Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven,
        Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace,
    ];

    /// 比较用的数值：2..=14，A 为 14
    pub fn value(self) -> u8 {
        self as u8 + 2
    }

    fn from_text(text: &str) -> Option<Rank> {
        match text.to_ascii_uppercase().as_str() {
            "2" => Some(Rank::Two),
            "3" => Some(Rank::Three),
            "4" => Some(Rank::Four),
            "5" => Some(Rank::Five),
            "6" => Some(Rank::Six),
            "7" => Some(Rank::Seven),
            "8" => Some(Rank::Eight),
            "9" => Some(Rank::Nine),
            "T" | "10" => Some(Rank::Ten),
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            "A" => Some(Rank::Ace),
            _ => None,
        }
    }
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { suit, rank }
    }
}

// --- 实现辅助功能 ---

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        })
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "T",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// 解析单张牌，格式为 `<点数><花色>`，例如 `Ah`、`10d`、`T♠`
impl FromStr for Card {
    type Err = OddsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().trim_end_matches('\u{FE0F}');
        let invalid = || OddsError::InvalidCard(s.to_string());

        let suit_char = text.chars().last().ok_or_else(invalid)?;
        let suit = Suit::from_char(suit_char).ok_or_else(invalid)?;
        let rank_text = &text[..text.len() - suit_char.len_utf8()];
        let rank = Rank::from_text(rank_text).ok_or_else(invalid)?;

        Ok(Card { suit, rank })
    }
}

/// 解析一串牌，允许空格或逗号分隔，也允许连写 (`AhKh`)
///
/// `-` 表示没有牌，方便在命令行里占位。
pub fn parse_cards(text: &str) -> Result<Vec<Card>, OddsError> {
    let mut cards = Vec::new();
    for token in text.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() || token == "-" {
            continue;
        }

        let mut buf = String::new();
        for c in token.chars() {
            if c == '\u{FE0F}' {
                continue;
            }
            buf.push(c);
            // 点数里不会出现花色字母，所以遇到花色就是一张牌的结尾
            if Suit::from_char(c).is_some() {
                cards.push(buf.parse()?);
                buf.clear();
            }
        }
        if !buf.is_empty() {
            return Err(OddsError::InvalidCard(buf));
        }
    }
    Ok(cards)
}

// --- 单元测试 ---
