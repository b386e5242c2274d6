//! # LRC 风格歌词解析器
//!
//! 把一整段歌词文本解析为有序的 [`LyricLine`] 序列。
//!
//! 每一行按以下规则分类：
//!
//! - 空行：单独出现时跳过。
//! - 标签行（以 `[ar:` 这样的小写键开头、以 `]` 结尾的元数据行）：直接丢弃。
//! - 不以 `[` 开头或不含 `]` 的行：无时间戳歌词，原样保留。
//! - 以时间戳开头的行：每个时间戳各产生一行带时间戳的歌词，文本为最后一个 `]` 之后的内容。
//!   只要有一个方括号内的内容无法解析为时间，整行都按无时间戳歌词处理，并保留完整原文。
//!
//! 每产生一行歌词后，紧跟其后的空行会被作为空白占位行收集到无时间戳歌词中。
//!
//! 最终结果中，带时间戳的行按时间升序排在前面（时间相同时按文本降序），
//! 其后是按原文顺序排列的无时间戳行。

pub(crate) mod line_cursor;
pub mod time;

use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{debug, warn};

use crate::{
    config::ParserOptions,
    model::{LyricLine, ParseResult},
    parser::{line_cursor::LineCursor, time::parse_lyrics_time},
};

/// 用于匹配以 `[key:` 开头、以 `]` 结尾的元数据标签行，标签值中允许出现方括号
static TAG_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[[a-z]+:.*\]\s*$").expect("未能编译 TAG_LINE_REGEX"));

/// 用于提取行内每一个最短的 `[...]` 片段
static BRACKET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]").expect("未能编译 BRACKET_REGEX"));

/// 歌词解析器。
///
/// 解析器本身不持有任何可变状态，可以在多个线程间共享。
#[derive(Debug, Clone, Default)]
pub struct LyricsParser {
    options: ParserOptions,
}

impl LyricsParser {
    /// 使用默认选项创建解析器。
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定选项创建解析器。
    #[must_use]
    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    /// 当前使用的选项。
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// 解析一整段歌词文本。
    ///
    /// 此函数不会失败：无法识别的内容会退化为无时间戳歌词。
    #[must_use]
    pub fn parse(&self, text: &str) -> ParseResult {
        let mut timed_lines: Vec<LyricLine> = Vec::new();
        let mut untimed_lines: Vec<LyricLine> = Vec::new();
        let mut cursor = LineCursor::new(text);

        while let Some(line) = cursor.next_line() {
            if line.is_empty() || TAG_LINE_REGEX.is_match(line) {
                continue;
            }

            let Some(last_bracket) = closing_bracket_index(line) else {
                untimed_lines.push(LyricLine::untimed(line));
                self.capture_spacers(&mut cursor, &mut untimed_lines);
                continue;
            };

            match parse_timestamps(line) {
                Some(times) => {
                    let lyric_text = &line[last_bracket + 1..];
                    for time in times {
                        timed_lines.push(LyricLine::timed(
                            self.options.apply_offset(time),
                            lyric_text,
                        ));
                        self.capture_spacers(&mut cursor, &mut untimed_lines);
                    }
                }
                None => {
                    warn!(
                        "第 {} 行含有无法解析的时间戳，将整行作为无时间戳歌词: '{}'",
                        cursor.line_number(),
                        line
                    );
                    untimed_lines.push(LyricLine::untimed(line));
                    self.capture_spacers(&mut cursor, &mut untimed_lines);
                }
            }
        }

        // 时间相同的行按文本降序排列
        timed_lines.sort_by(|a, b| {
            a.time()
                .cmp(&b.time())
                .then_with(|| b.text().cmp(a.text()))
        });

        debug!(
            "歌词解析完成: {} 行带时间戳, {} 行无时间戳",
            timed_lines.len(),
            untimed_lines.len()
        );

        timed_lines.append(&mut untimed_lines);
        ParseResult::from(timed_lines)
    }

    /// 收集紧跟在当前行之后的所有空行。
    fn capture_spacers(&self, cursor: &mut LineCursor<'_>, untimed_lines: &mut Vec<LyricLine>) {
        while cursor.peek_line().is_some_and(str::is_empty) {
            cursor.next_line();
            if self.options.preserve_spacers {
                untimed_lines.push(LyricLine::spacer());
            }
        }
    }
}

/// 使用默认选项解析一整段歌词文本。
#[must_use]
pub fn parse_lyrics(text: &str) -> ParseResult {
    LyricsParser::new().parse(text)
}

/// 如果行以 `[` 开头并且之后还有 `]`，返回最后一个 `]` 的位置。
fn closing_bracket_index(line: &str) -> Option<usize> {
    if !line.starts_with('[') {
        return None;
    }
    line.rfind(']')
}

/// 解析行内所有方括号中的时间戳，任意一个失败都返回 `None`。
fn parse_timestamps(line: &str) -> Option<Vec<Duration>> {
    BRACKET_REGEX
        .find_iter(line)
        .map(|m| parse_lyrics_time(m.as_str().trim_matches(|c| c == '[' || c == ']')))
        .collect::<Result<Vec<_>, _>>()
        .ok()
}
