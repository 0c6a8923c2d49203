//! # 德州扑克胜率计算核心库
//!
//! 这个 `core` crate 包含牌和牌堆的定义、牌型评估与比较、
//! 两人/多人的蒙特卡洛胜率计算，以及客户端-服务器通信消息的定义。
//! 它是纯同步的计算库，与具体实现（如网络服务器、客户端界面）解耦，
//! 可以被任何上层应用复用。

mod card;
mod deck;
mod equity;
mod error;
mod hand;
mod message;

pub use card::*;

pub use deck::*;

pub use equity::*;

pub use error::*;

pub use hand::*;

pub use message::*;
