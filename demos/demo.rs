//! 用于演示 `lyrics-parser` 库的核心功能。
//!
//! ## 如何运行
//!
//! ```bash
//! cargo run --package lyrics_parser_rs --example demo -- path/to/song.lrc
//! ```
//!
//! 不提供文件路径时会解析内置的示例歌词。

use std::time::Duration;

use lyrics_parser_rs::{LyricsParser, ParserOptions, Result};

use tracing::{Level, info, warn};

const SAMPLE_LYRICS: &str = "[ti:有点甜]
[ar:汪苏泷]
[00:01.00]第一行歌词
[00:03.50][00:20.00]重复的副歌

[00:08.25]第二行歌词
没有时间戳的注释
[坏:时间]格式错误的行
";

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let options = ParserOptions::load().unwrap_or_else(|e| {
        warn!("加载解析器选项失败，将使用默认选项: {}", e);
        ParserOptions::default()
    });
    let parser = LyricsParser::with_options(options);

    let content = match std::env::args().nth(1) {
        Some(path) => {
            info!("正在读取歌词文件 '{}'...", path);
            std::fs::read_to_string(&path)?
        }
        None => {
            info!("未提供歌词文件，将使用内置示例。");
            SAMPLE_LYRICS.to_string()
        }
    };

    let lyrics = parser.parse(&content);
    info!(
        "解析完成: 共 {} 行，其中 {} 行带时间戳。",
        lyrics.len(),
        lyrics.timed_lines().len()
    );

    for (index, line) in lyrics.iter().enumerate() {
        match line.time() {
            Some(time) => println!("{index:>3} [{:>8.2}s] {}", time.as_secs_f64(), line.text()),
            None if line.is_spacer() => println!("{index:>3}"),
            None => println!("{index:>3} [  ------ ] {}", line.text()),
        }
    }

    let position = Duration::from_secs(5);
    match lyrics.current_line_index(position) {
        Some(index) => info!(
            "播放到 {:?} 时应显示第 {} 行: '{}'",
            position,
            index,
            lyrics.lines[index].text()
        ),
        None => info!("播放到 {:?} 时还没有可显示的歌词。", position),
    }

    Ok(())
}
