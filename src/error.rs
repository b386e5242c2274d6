//! 定义了整个 `lyrics-parser` 库的错误类型 `LyricsParserError`。

use std::io;
use thiserror::Error;

/// `lyrics-parser` 库的通用错误枚举。
///
/// 歌词解析本身永远不会失败，这里的错误只会出现在时间戳解析
/// （由解析器内部消化）以及配置文件读写中。
#[derive(Error, Debug)]
pub enum LyricsParserError {
    /// 无效的时间戳字符串
    #[error("无效的时间格式: '{0}'")]
    InvalidTime(String),

    /// JSON 解析失败 (源自 `serde_json::Error`)
    #[error("JSON 解析失败: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O 错误 (源自 `io::Error`)
    #[error("I/O 错误: {0}")]
    Io(#[from] io::Error),

    /// 找不到用户配置目录
    #[error("无法找到用户配置目录")]
    ConfigDirNotFound,
}

/// `LyricsParserError` 的 `Result` 类型别名，方便在函数签名中使用。
pub type Result<T> = std::result::Result<T, LyricsParserError>;
