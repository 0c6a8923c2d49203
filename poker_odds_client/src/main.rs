mod command;

use std::io::Write;
use std::sync::{Arc, Mutex};

use clap::Parser;
use futures_util::{SinkExt, StreamExt};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};
use url::Url;

use poker_odds_core::{ClientMessage, RequestId, ServerMessage};

use crate::command::{parse_command, Command};

/// 德州扑克胜率计算客户端
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 服务器地址
    #[arg(long, default_value = "ws://127.0.0.1:25917/ws")]
    url: Url,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    println!("正在连接到: {}", args.url);
    let (ws_stream, _) = connect_async(args.url.as_str()).await?;
    println!("连接成功!");

    let (mut write, mut read) = ws_stream.split();

    // 最近一次发出的请求，只显示它的结果
    let latest: Arc<Mutex<Option<RequestId>>> = Arc::new(Mutex::new(None));

    // 启动一个任务来处理从服务器接收的消息
    let latest_for_reader = latest.clone();
    tokio::spawn(async move {
        while let Some(msg) = read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    match serde_json::from_str::<ServerMessage>(text.as_str()) {
                        Ok(server_msg) => {
                            let expected = *latest_for_reader.lock().unwrap_or_else(|e| e.into_inner());
                            if is_stale(&server_msg, expected) {
                                continue;
                            }
                            println!("\n{}", render(&server_msg));
                            print!("> "); // 重新显示输入提示符
                            let _ = std::io::stdout().flush();
                        }
                        Err(e) => eprintln!("解析服务器消息失败: {}", e),
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    eprintln!("接收消息时出错: {}", e);
                    break;
                }
            }
        }
    });

    // 主任务处理用户输入
    let mut stdin = BufReader::new(tokio::io::stdin()).lines();

    println!("--- 德州扑克胜率计算 ---");
    println!("牌的写法: 点数(2-9,T,J,Q,K,A) + 花色(h,d,c,s)，例如 Ah Td 9c，- 表示没有牌");
    println!("可用命令:");
    println!("  hu <hero> <villain> [board]         - 两人胜率，例如 hu AhKh 2h2d QhJhTh");
    println!("  multi <board> <名字=底牌>...          - 多人胜率，例如 multi - alice=AsAh bob=KdKc");
    println!("  cancel                              - 取消正在进行的计算");
    println!("  exit                                - 退出");

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = stdin.next_line().await? else { break };
        let client_msg = match parse_command(&line) {
            Ok(Command::Send(msg)) => msg,
            Ok(Command::Empty) => continue,
            Ok(Command::Exit) => {
                println!("正在断开连接...");
                break;
            }
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        *latest.lock().unwrap_or_else(|e| e.into_inner()) = client_msg.request_id();
        let payload = serde_json::to_string(&client_msg)?;
        write.send(Message::Text(payload.into())).await?;
    }

    Ok(())
}

/// 不属于最近一次请求的结果都是过期的
fn is_stale(msg: &ServerMessage, latest: Option<RequestId>) -> bool {
    match msg.request_id() {
        Some(id) => Some(id) != latest,
        None => false,
    }
}

fn render(msg: &ServerMessage) -> String {
    match msg {
        ServerMessage::Welcome { session_id, trials } => {
            format!("<-- 会话 {}，每次计算 {} 次模拟", session_id, trials)
        }
        ServerMessage::HeadsUpOdds { odds, .. } => {
            format!("<-- hero {:.2}%  villain {:.2}%  平局 {:.2}%", odds.hero, odds.villain, odds.tie)
        }
        ServerMessage::MultiWayOdds { odds, .. } => {
            let mut out = String::from("<--");
            for (name, pct) in &odds.players {
                out.push_str(&format!(" {} {:.2}% ", name, pct));
            }
            out.push_str(&format!(" 平局 {:.2}%", odds.tie));
            out
        }
        ServerMessage::Error { message, .. } => format!("<-- [错误] {}", message),
    }
}
