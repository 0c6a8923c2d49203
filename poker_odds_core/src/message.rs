use crate::equity::{Hand, HeadsUpOdds, MultiWayOdds, Table};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 客户端生成的请求编号，服务器原样带回
pub type RequestId = Uuid;
/// 服务器为每个连接分配的编号
pub type SessionId = Uuid;

// --- 客户端 -> 服务器 的消息 ---
// 每次选牌变化都会发出一个新请求，新请求会取代还没算完的旧请求。

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum ClientMessage {
    /// 两人模式
    HeadsUp { request_id: RequestId, hand: Hand },
    /// 多人模式，最多 9 个座位
    MultiWay { request_id: RequestId, table: Table },
    /// 丢弃所有尚未返回的结果
    Cancel,
}

// --- 服务器 -> 客户端 的消息 ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum ServerMessage {
    /// 连接建立后发送，告知本连接的编号和每次计算的模拟次数
    Welcome { session_id: SessionId, trials: u32 },

    HeadsUpOdds { request_id: RequestId, odds: HeadsUpOdds },

    MultiWayOdds { request_id: RequestId, odds: MultiWayOdds },

    /// 请求无效 (重复的牌等)，或消息无法解析时 `request_id` 为空
    Error { request_id: Option<RequestId>, message: String },
}

impl ClientMessage {
    pub fn request_id(&self) -> Option<RequestId> {
        match self {
            ClientMessage::HeadsUp { request_id, .. } | ClientMessage::MultiWay { request_id, .. } => Some(*request_id),
            ClientMessage::Cancel => None,
        }
    }
}

impl ServerMessage {
    pub fn request_id(&self) -> Option<RequestId> {
        match self {
            ServerMessage::HeadsUpOdds { request_id, .. } | ServerMessage::MultiWayOdds { request_id, .. } => Some(*request_id),
            ServerMessage::Error { request_id, .. } => *request_id,
            ServerMessage::Welcome { .. } => None,
        }
    }
}

impl From<Hand> for ClientMessage {
    fn from(hand: Hand) -> Self {
        ClientMessage::HeadsUp { request_id: Uuid::new_v4(), hand }
    }
}

impl From<Table> for ClientMessage {
    fn from(table: Table) -> Self {
        ClientMessage::MultiWay { request_id: Uuid::new_v4(), table }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::parse_cards;
    use crate::equity::Seat;

    #[test]
    fn test_heads_up_request_wire_format() {
        let json = r#"{"HeadsUp":{"request_id":"67e55044-10b1-426f-9247-bb680e5fe0c8","hand":{
            "hero":[{"suit":"hearts","rank":"A"},{"suit":"hearts","rank":"K"}],
            "villain":[],
            "board":[{"suit":"clubs","rank":"10"}]}}}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        let ClientMessage::HeadsUp { hand, .. } = &msg else { panic!("unexpected {:?}", msg) };
        assert_eq!(hand.hero, parse_cards("AhKh").unwrap());
        assert!(hand.villain.is_empty());
        assert_eq!(hand.board, parse_cards("Tc").unwrap());
        assert!(msg.request_id().is_some());
    }

    #[test]
    fn test_multi_way_request_allows_empty_seats() {
        let table = Table {
            players: vec![None, Some(Seat::new("alice", parse_cards("AhKh").unwrap()))],
            board: vec![],
        };
        let msg = ClientMessage::from(table.clone());
        let back: ClientMessage = serde_json::from_str(&serde_json::to_string(&msg).unwrap()).unwrap();
        assert_eq!(back, msg);
        assert!(matches!(back, ClientMessage::MultiWay { table: t, .. } if t == table));
    }

    #[test]
    fn test_server_message_echoes_request_id() {
        let id = Uuid::new_v4();
        let msg = ServerMessage::Error { request_id: Some(id), message: "x".into() };
        assert_eq!(msg.request_id(), Some(id));
        assert_eq!(ServerMessage::Welcome { session_id: id, trials: 1 }.request_id(), None);
        assert_eq!(ClientMessage::Cancel.request_id(), None);
    }
}
