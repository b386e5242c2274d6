//! 定义了解析结果中的单行歌词 `LyricLine`。

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// 一行可显示的歌词。
///
/// `time` 为 `None` 时表示这是一行无时间戳的歌词，它总是会被显示，不参与同步。
/// 文本为空的无时间戳行是空白占位行，用于保留原文中的空行间距。
///
/// 一旦创建便不可修改，两行歌词相等当且仅当时间和文本都相等。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LyricLine {
    time: Option<Duration>,
    text: String,
}

impl LyricLine {
    /// 创建一行带时间戳的歌词。
    #[must_use]
    pub fn timed(time: Duration, text: impl Into<String>) -> Self {
        Self {
            time: Some(time),
            text: text.into(),
        }
    }

    /// 创建一行无时间戳的歌词。
    #[must_use]
    pub fn untimed(text: impl Into<String>) -> Self {
        Self {
            time: None,
            text: text.into(),
        }
    }

    /// 创建一行空白占位行。
    #[must_use]
    pub fn spacer() -> Self {
        Self::untimed(String::new())
    }

    /// 相对于歌曲开始的时间偏移。
    #[must_use]
    pub fn time(&self) -> Option<Duration> {
        self.time
    }

    /// 要显示的文本。
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 是否带有时间戳。
    #[must_use]
    pub fn is_timed(&self) -> bool {
        self.time.is_some()
    }

    /// 是否为空白占位行。
    #[must_use]
    pub fn is_spacer(&self) -> bool {
        self.time.is_none() && self.text.is_empty()
    }
}
