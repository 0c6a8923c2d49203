use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use poker_odds_core::ServerMessage;
use tokio::sync::{mpsc, Mutex};

/// 单个连接的结果闸门：只有最新请求的结果能发出去
///
/// 每个请求开始时领取一张递增的票 (`Ticket`)，领票即作废之前所有的票。
/// 检查票是否有效和发送结果在同一把锁内完成，
/// 所以无论计算以什么顺序结束，旧结果都不可能排在新结果之后送达。
#[derive(Clone)]
pub struct RequestGate {
    inner: Arc<GateInner>,
}

struct GateInner {
    latest: AtomicU64,
    // 发往该连接 WebSocket 写任务的通道
    sender: Mutex<mpsc::Sender<ServerMessage>>,
}

pub struct Ticket {
    generation: u64,
    inner: Arc<GateInner>,
}

impl RequestGate {
    pub fn new(sender: mpsc::Sender<ServerMessage>) -> Self {
        RequestGate {
            inner: Arc::new(GateInner {
                latest: AtomicU64::new(0),
                sender: Mutex::new(sender),
            }),
        }
    }

    /// 开始一个新请求，之前的票全部失效
    pub fn supersede(&self) -> Ticket {
        let generation = self.inner.latest.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket { generation, inner: self.inner.clone() }
    }

    /// 作废所有已发出的票，不开始新请求
    pub fn cancel(&self) {
        self.inner.latest.fetch_add(1, Ordering::SeqCst);
    }
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.inner.latest.load(Ordering::SeqCst) == self.generation
    }

    /// 票仍有效时发送结果，返回是否真的发出
    pub async fn deliver(self, message: ServerMessage) -> bool {
        let sender = self.inner.sender.lock().await;
        if !self.is_current() {
            return false;
        }
        sender.send(message).await.is_ok()
    }
}
