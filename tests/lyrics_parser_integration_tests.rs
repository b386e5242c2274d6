use lyrics_parser_rs::{LyricLine, LyricsParser, ParseResult, parse_lyrics};

use std::path::Path;
use std::time::Duration;

fn load_test_data(filename: &str) -> String {
    let path = Path::new("tests/test_data").join(filename);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("读取测试文件 '{:?}' 失败: {}", path, e))
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// 把解析结果渲染成便于快照比较的文本，每行一条歌词。
fn render(result: &ParseResult) -> String {
    result
        .iter()
        .map(|line| {
            let time = match line.time() {
                Some(t) => {
                    let total_ms = t.as_millis();
                    format!(
                        "{:02}:{:02}.{:03}",
                        total_ms / 60_000,
                        (total_ms / 1000) % 60,
                        total_ms % 1000
                    )
                }
                None => "--:--.---".to_string(),
            };
            format!("{time} {:?}", line.text())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_empty_input_yields_nothing() {
    assert!(parse_lyrics("").is_empty());
    assert!(parse_lyrics("\n\n\n").is_empty(), "只有空行的文本不应产生任何歌词");
}

#[test]
fn test_single_timestamp_line() {
    let result = parse_lyrics("[00:12.34]Hello");
    assert_eq!(result.lines, vec![LyricLine::timed(ms(12_340), "Hello")]);
}

#[test]
fn test_timed_lines_come_before_untimed() {
    let result = parse_lyrics("Intro text\n[00:12.34]Hello");
    assert_eq!(
        result.lines,
        vec![
            LyricLine::timed(ms(12_340), "Hello"),
            LyricLine::untimed("Intro text"),
        ]
    );
}

#[test]
fn test_multiple_timestamps_repeat_text() {
    let result = parse_lyrics("[00:12.34][00:45.00]Hello\n[00:30.00]Middle");
    assert_eq!(
        result.lines,
        vec![
            LyricLine::timed(ms(12_340), "Hello"),
            LyricLine::timed(ms(30_000), "Middle"),
            LyricLine::timed(ms(45_000), "Hello"),
        ]
    );
}

#[test]
fn test_unparsable_timestamp_keeps_whole_line() {
    let result = parse_lyrics("[bad:ts]Hello");
    assert_eq!(result.lines, vec![LyricLine::untimed("[bad:ts]Hello")]);
}

#[test]
fn test_one_bad_timestamp_invalidates_all() {
    let result = parse_lyrics("[00:01.00][00:99.00]Hello");
    assert_eq!(
        result.lines,
        vec![LyricLine::untimed("[00:01.00][00:99.00]Hello")],
        "不应保留部分时间戳"
    );
}

#[test]
fn test_metadata_tag_is_dropped() {
    assert!(parse_lyrics("[ar: Artist Name]").is_empty());
}

#[test]
fn test_metadata_tag_with_nested_brackets_is_dropped() {
    assert!(parse_lyrics("[ti:Song [Live]]").is_empty());
    assert!(parse_lyrics("[ar:Artist] [ti:Song]").is_empty());
}

#[test]
fn test_equal_times_sort_by_descending_text() {
    let result = parse_lyrics("[00:10.00]A\n[00:10.00]B");
    assert_eq!(
        result.lines,
        vec![
            LyricLine::timed(ms(10_000), "B"),
            LyricLine::timed(ms(10_000), "A"),
        ]
    );
}

#[test]
fn test_blank_lines_become_spacers_after_timed_lines() {
    let result = parse_lyrics("plain one\n\n\nplain two\n[00:01.00]timed");
    assert_eq!(
        result.lines,
        vec![
            LyricLine::timed(ms(1000), "timed"),
            LyricLine::untimed("plain one"),
            LyricLine::spacer(),
            LyricLine::spacer(),
            LyricLine::untimed("plain two"),
        ]
    );
}

#[test]
fn test_text_is_taken_verbatim() {
    let result = parse_lyrics("[00:01.00]  padded text  \n   indented plain line");
    assert_eq!(
        result.lines,
        vec![
            LyricLine::timed(ms(1000), "  padded text  "),
            LyricLine::untimed("   indented plain line"),
        ]
    );
}

#[test]
fn test_mixed_sample_file() {
    let content = load_test_data("mixed_sample.lrc");
    let result = parse_lyrics(&content);

    insta::assert_snapshot!(render(&result), @r#"
    00:05.000 "Chorus line"
    00:10.000 "First verse line"
    00:10.000 "Alpha at ten"
    00:15.200 "Second verse line"
    00:20.000 "Zeta at twenty"
    00:20.000 "Beta at twenty"
    00:45.000 "Chorus line"
    --:--.--- ""
    --:--.--- "This line has no timestamp"
    --:--.--- ""
    --:--.--- ""
    --:--.--- "[0a:10.00]Broken timestamp line"
    --:--.--- "Credits: Someone"
    "#);
}

#[test]
fn test_crlf_input_matches_lf_input() {
    let content = load_test_data("mixed_sample.lrc");
    let crlf_content = content.replace("\r\n", "\n").replace('\n', "\r\n");

    assert_eq!(parse_lyrics(&crlf_content), parse_lyrics(&content));
}

#[test]
fn test_parsing_is_deterministic() {
    let content = load_test_data("mixed_sample.lrc");
    assert_eq!(parse_lyrics(&content), parse_lyrics(&content));
}

#[test]
fn test_parser_can_be_shared_between_threads() {
    let content = load_test_data("mixed_sample.lrc");
    let parser = LyricsParser::new();
    let expected = parser.parse(&content);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| parser.parse(&content)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_current_line_follows_playback() {
    let content = load_test_data("mixed_sample.lrc");
    let result = parse_lyrics(&content);

    assert_eq!(result.timed_lines().len(), 7);
    assert_eq!(result.untimed_lines().len(), 6);

    assert_eq!(result.current_line_index(ms(4_999)), None);
    assert_eq!(result.current_line_index(ms(5_000)), Some(0));
    assert_eq!(result.current_line_index(ms(12_000)), Some(2));
    assert_eq!(result.current_line_index(ms(20_000)), Some(5));
    assert_eq!(result.current_line_index(ms(300_000)), Some(6));
}

#[test]
fn test_lyric_line_serializes_to_json() {
    let line = LyricLine::timed(ms(12_340), "Hello");
    let json = serde_json::to_value(&line).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "time": { "secs": 12, "nanos": 340_000_000 },
            "text": "Hello",
        })
    );
}
