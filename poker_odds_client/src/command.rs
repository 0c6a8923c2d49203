use poker_odds_core::{parse_cards, ClientMessage, Hand, OddsError, Seat, Table};

/// 一行用户输入的解析结果
#[derive(Debug)]
pub enum Command {
    Send(ClientMessage),
    Empty,
    Exit,
}

/// 解析一行命令
///
/// 这里只检查写法；重复的牌等问题交给服务器判断，错误会以消息的形式返回。
pub fn parse_command(line: &str) -> Result<Command, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&command) = parts.first() else {
        return Ok(Command::Empty);
    };

    match command {
        "hu" => {
            if parts.len() < 3 || parts.len() > 4 {
                return Err("用法: hu <hero> <villain> [board]".to_string());
            }
            let hand = Hand {
                hero: cards(parts[1])?,
                villain: cards(parts[2])?,
                board: parts.get(3).map_or(Ok(Vec::new()), |b| cards(b))?,
            };
            Ok(Command::Send(hand.into()))
        }
        "multi" => {
            if parts.len() < 2 {
                return Err("用法: multi <board> <名字=底牌>...".to_string());
            }
            let board = cards(parts[1])?;
            let mut players = Vec::new();
            for spec in &parts[2..] {
                // 单独的 "_" 表示空座位
                if *spec == "_" {
                    players.push(None);
                    continue;
                }
                let (name, hole) = spec
                    .split_once('=')
                    .ok_or_else(|| format!("玩家写法应为 名字=底牌: {}", spec))?;
                players.push(Some(Seat::new(name, cards(hole)?)));
            }
            Ok(Command::Send(Table { players, board }.into()))
        }
        "cancel" => Ok(Command::Send(ClientMessage::Cancel)),
        "exit" | "quit" => Ok(Command::Exit),
        _ => Err(format!("未知命令: {}", line.trim())),
    }
}

fn cards(text: &str) -> Result<Vec<poker_odds_core::Card>, String> {
    parse_cards(text).map_err(|e: OddsError| e.to_string())
}
