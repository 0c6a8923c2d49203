mod dispatch;
mod gate;

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
    routing::get,
    Router,
};
use clap::{Parser, ValueEnum};
use futures_util::{stream::StreamExt, SinkExt};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use poker_odds_core::{ClientMessage, EquityOptions, ServerMessage, TieRule, DEFAULT_TRIALS};

use crate::dispatch::Dispatcher;

/// 德州扑克胜率计算服务
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 监听地址
    #[arg(long, default_value = "0.0.0.0:25917")]
    addr: SocketAddr,

    /// 每次计算的模拟次数
    #[arg(long, default_value_t = DEFAULT_TRIALS, value_parser = clap::value_parser!(u32).range(1..))]
    trials: u32,

    /// 多人平局的计数方式
    #[arg(long, value_enum, default_value_t = TieRuleArg::PerWinner)]
    tie_rule: TieRuleArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TieRuleArg {
    /// 按平分人数计数
    PerWinner,
    /// 每次平局计 1 次
    PerTrial,
}

impl From<TieRuleArg> for TieRule {
    fn from(arg: TieRuleArg) -> Self {
        match arg {
            TieRuleArg::PerWinner => TieRule::PerWinner,
            TieRuleArg::PerTrial => TieRule::PerTrial,
        }
    }
}

// 服务器全局状态，计算本身不共享任何可变状态
struct AppState {
    options: EquityOptions,
    connections: AtomicUsize,
}

type SharedState = Arc<AppState>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let options = EquityOptions::default()
        .with_trials(args.trials)
        .with_tie_rule(args.tie_rule.into());

    let state = SharedState::new(AppState {
        options,
        connections: AtomicUsize::new(0),
    });

    let app = Router::new()
        .route("/ws", get(websocket_handler))
        .with_state(state);

    info!("服务器正在监听 {}，每次计算 {} 次模拟，平局规则 {:?}", args.addr, options.trials, options.tie_rule);
    let listener = tokio::net::TcpListener::bind(args.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// 处理 WebSocket 连接请求
async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<SharedState>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// 处理单个 WebSocket 连接的生命周期
async fn handle_socket(socket: WebSocket, state: SharedState) {
    let (mut sender, mut receiver) = socket.split();
    let session_id = Uuid::new_v4();
    let open = state.connections.fetch_add(1, Ordering::Relaxed) + 1;
    info!(%session_id, open, "客户端已连接");

    // 创建一个 MPSC 通道，用于从计算任务接收要发送的消息
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(32);

    // 启动一个新任务，专门负责将 MPSC 通道中的消息发送到 WebSocket
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            let payload = match serde_json::to_string(&msg) {
                Ok(payload) => payload,
                Err(e) => {
                    tracing::warn!("序列化消息失败: {}", e);
                    continue;
                }
            };
            if sender.send(Message::Text(payload.into())).await.is_err() {
                // 发送失败，说明客户端已断开，退出任务
                break;
            }
        }
    });

    let _ = tx
        .send(ServerMessage::Welcome { session_id, trials: state.options.trials })
        .await;

    let mut dispatcher = Dispatcher::new(tx.clone(), state.options);

    // 主循环，处理从客户端接收到的消息
    while let Some(Ok(msg)) = receiver.next().await {
        if let Message::Text(text) = msg {
            match serde_json::from_str::<ClientMessage>(text.as_str()) {
                Ok(client_msg) => dispatcher.submit(client_msg),
                Err(e) => {
                    tracing::warn!(%session_id, "解析消息失败: {}", e);
                    let _ = tx
                        .send(ServerMessage::Error { request_id: None, message: format!("无法解析的消息: {}", e) })
                        .await;
                }
            }
        }
    }

    // 客户端断开连接，丢弃还在计算的结果
    dispatcher.shutdown();
    let open = state.connections.fetch_sub(1, Ordering::Relaxed) - 1;
    info!(%session_id, open, "客户端连接关闭");
}
