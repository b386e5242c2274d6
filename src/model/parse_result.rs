//! 定义了歌词解析的输出 `ParseResult`。

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::lyric_line::LyricLine;

/// 一次解析得到的有序歌词行序列。
///
/// 所有带时间戳的行按时间升序排在最前，其后是按原文顺序排列的无时间戳行
/// （包括空白占位行）。两类行永远不会交错。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// 解析出的所有歌词行。
    pub lines: Vec<LyricLine>,
}

impl ParseResult {
    /// 歌词行数。
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// 是否没有任何歌词行。
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 按顺序遍历所有歌词行。
    pub fn iter(&self) -> std::slice::Iter<'_, LyricLine> {
        self.lines.iter()
    }

    /// 消耗自身，返回内部的歌词行向量。
    #[must_use]
    pub fn into_lines(self) -> Vec<LyricLine> {
        self.lines
    }

    /// 带时间戳的行，它们总是位于序列开头。
    #[must_use]
    pub fn timed_lines(&self) -> &[LyricLine] {
        &self.lines[..self.timed_count()]
    }

    /// 无时间戳的行（包括空白占位行）。
    #[must_use]
    pub fn untimed_lines(&self) -> &[LyricLine] {
        &self.lines[self.timed_count()..]
    }

    /// 根据播放位置找出当前应高亮的行。
    ///
    /// 返回时间不晚于 `position` 的最后一个带时间戳的行的下标。
    /// 播放位置早于第一行，或者根本没有带时间戳的行时返回 `None`。
    #[must_use]
    pub fn current_line_index(&self, position: Duration) -> Option<usize> {
        let passed = self
            .timed_lines()
            .partition_point(|line| line.time().is_some_and(|time| time <= position));
        passed.checked_sub(1)
    }

    fn timed_count(&self) -> usize {
        self.lines.partition_point(LyricLine::is_timed)
    }
}

impl From<Vec<LyricLine>> for ParseResult {
    fn from(lines: Vec<LyricLine>) -> Self {
        Self { lines }
    }
}

impl IntoIterator for ParseResult {
    type Item = LyricLine;
    type IntoIter = std::vec::IntoIter<LyricLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParseResult {
    type Item = &'a LyricLine;
    type IntoIter = std::slice::Iter<'a, LyricLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
