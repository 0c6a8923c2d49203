use poker_odds_core::{heads_up, multi_way, ClientMessage, EquityOptions, ServerMessage};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::gate::{RequestGate, Ticket};

/// 把客户端请求变成后台计算，并保证“最后一个请求说了算”
///
/// 计算本身是同步的 CPU 任务，放在 `spawn_blocking` 中执行，不阻塞异步运行时。
pub struct Dispatcher {
    gate: RequestGate,
    options: EquityOptions,
    in_flight: Option<JoinHandle<()>>,
}

impl Dispatcher {
    pub fn new(sender: mpsc::Sender<ServerMessage>, options: EquityOptions) -> Self {
        Dispatcher {
            gate: RequestGate::new(sender),
            options,
            in_flight: None,
        }
    }

    /// 处理一条客户端消息，之前还没返回的请求一律作废
    pub fn submit(&mut self, msg: ClientMessage) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }

        let options = self.options;
        match msg {
            ClientMessage::Cancel => {
                debug!("客户端取消了进行中的计算");
                self.gate.cancel();
            }
            ClientMessage::HeadsUp { request_id, hand } => {
                debug!(%request_id, "收到两人请求");
                let ticket = self.gate.supersede();
                self.in_flight = Some(spawn_calculation(ticket, move || {
                    match heads_up(&hand, &options) {
                        Ok(tally) => ServerMessage::HeadsUpOdds { request_id, odds: tally.odds() },
                        Err(e) => ServerMessage::Error { request_id: Some(request_id), message: e.to_string() },
                    }
                }));
            }
            ClientMessage::MultiWay { request_id, table } => {
                debug!(%request_id, seats = table.players.len(), "收到多人请求");
                let ticket = self.gate.supersede();
                self.in_flight = Some(spawn_calculation(ticket, move || {
                    match multi_way(&table, &options) {
                        Ok(tally) => ServerMessage::MultiWayOdds { request_id, odds: tally.odds() },
                        Err(e) => ServerMessage::Error { request_id: Some(request_id), message: e.to_string() },
                    }
                }));
            }
        }
    }

    /// 连接关闭时调用，丢弃还没返回的结果
    pub fn shutdown(&mut self) {
        self.gate.cancel();
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

fn spawn_calculation<F>(ticket: Ticket, compute: F) -> JoinHandle<()>
where
    F: FnOnce() -> ServerMessage + Send + 'static,
{
    tokio::spawn(async move {
        match tokio::task::spawn_blocking(compute).await {
            Ok(message) => {
                let request_id = message.request_id();
                if !ticket.deliver(message).await {
                    debug!(?request_id, "结果已过期，丢弃");
                }
            }
            Err(e) => warn!("计算任务失败: {}", e),
        }
    })
}
