//! # 时间戳解析

use std::time::Duration;

use crate::error::{LyricsParserError, Result};

const FRACTION_DIGITS: usize = 9;

/// 解析形如 `mm:ss.xx` 的歌词时间戳（不含方括号）。
///
/// 分钟和秒只接受 ASCII 数字，秒必须小于 60。小数部分可省略，
/// 按十进制小数理解（`12.5` 为 12.5 秒，`12.34` 为 12.34 秒），最多 9 位。
///
/// # 返回
///
/// * `Ok(Duration)` - 解析成功的时间偏移。
/// * `Err(LyricsParserError::InvalidTime)` - 任意部分格式不正确。
pub fn parse_lyrics_time(token: &str) -> Result<Duration> {
    let invalid = || LyricsParserError::InvalidTime(token.to_string());

    let (minutes_str, rest) = token.split_once(':').ok_or_else(invalid)?;
    let (seconds_str, fraction_str) = match rest.split_once('.') {
        Some((seconds, fraction)) => (seconds, Some(fraction)),
        None => (rest, None),
    };

    let minutes = parse_digits(minutes_str).ok_or_else(invalid)?;
    let seconds = parse_digits(seconds_str).ok_or_else(invalid)?;
    if seconds >= 60 {
        return Err(invalid());
    }

    let nanos = match fraction_str {
        Some(fraction) => parse_fraction_nanos(fraction).ok_or_else(invalid)?,
        None => 0,
    };

    let total_seconds = minutes
        .checked_mul(60)
        .and_then(|s| s.checked_add(seconds))
        .ok_or_else(invalid)?;

    Ok(Duration::new(total_seconds, nanos))
}

fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// 把小数部分补齐到纳秒精度，例如 "34" -> 340_000_000。
fn parse_fraction_nanos(fraction: &str) -> Option<u32> {
    if fraction.len() > FRACTION_DIGITS {
        return None;
    }
    let value = parse_digits(fraction)?;
    let scale = 10u64.pow((FRACTION_DIGITS - fraction.len()) as u32);
    u32::try_from(value * scale).ok()
}
