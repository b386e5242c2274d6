#![warn(missing_docs)]

//! # Lyrics Parser RS
//!
//! 一个小巧的 Rust 库，用于把 LRC 风格的歌词文本解析为可直接显示、可按播放进度同步的歌词行。
//!
//! ## 主要功能
//!
//! - **时间戳解析**: 支持 `[mm:ss.xx]` 形式的时间戳，一行可以带多个时间戳。
//! - **元数据过滤**: 自动丢弃 `[ar:歌手]`、`[ti:标题]` 之类的标签行。
//! - **容错**: 无法解析的时间戳不会导致失败，整行会退化为无时间戳歌词。
//! - **空行保留**: 紧跟在歌词之后的空行会被保留为空白占位行。
//! - **同步**: 根据播放位置查找当前应显示的歌词行。
//!
//! ## 解析歌词
//!
//! ```rust
//! use std::time::Duration;
//! use lyrics_parser_rs::parse_lyrics;
//!
//! let lyrics = parse_lyrics("[ar:Someone]\n[00:01.00]Hello\n[00:02.50]World\nUntimed credits");
//!
//! assert_eq!(lyrics.len(), 3);
//! assert_eq!(lyrics.lines[0].text(), "Hello");
//! assert_eq!(lyrics.lines[0].time(), Some(Duration::from_secs(1)));
//! assert_eq!(lyrics.current_line_index(Duration::from_secs(2)), Some(0));
//! ```
//!
//! ## 自定义选项
//!
//! ```rust
//! use lyrics_parser_rs::{LyricsParser, ParserOptions};
//!
//! let parser = LyricsParser::with_options(ParserOptions {
//!     offset_ms: 500,
//!     ..Default::default()
//! });
//! let lyrics = parser.parse("[00:01.00]Hello");
//! assert_eq!(lyrics.lines[0].time().map(|t| t.as_millis()), Some(1500));
//! ```
pub mod config;
pub mod error;
pub mod model;
pub mod parser;

pub use crate::{
    config::ParserOptions,
    error::{LyricsParserError, Result},
    model::{LyricLine, ParseResult},
    parser::{LyricsParser, parse_lyrics},
};
