use crate::card::Card;
use thiserror::Error;

/// 胜率计算的输入错误
///
/// 全部在模拟开始之前检查，出现任何一个都不会进行模拟。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OddsError {
    #[error("无法识别的牌: {0}")]
    InvalidCard(String),

    #[error("公共牌最多 5 张，收到 {0} 张")]
    BoardTooLong(usize),

    #[error("{owner} 的底牌最多 2 张，收到 {len} 张")]
    TooManyHoleCards { owner: String, len: usize },

    #[error("座位最多 9 个，收到 {0} 个")]
    TooManySeats(usize),

    #[error("玩家名重复: {0}")]
    DuplicateName(String),

    #[error("玩家名 \"tie\" 是保留字")]
    ReservedName,

    #[error("牌 {0} 出现了不止一次")]
    DuplicateCard(Card),

    #[error("模拟次数必须大于 0")]
    NoTrials,
}
