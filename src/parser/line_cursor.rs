//! 支持向前查看一行的逐行读取器。

/// 按行遍历文本的游标，可以在不前进的情况下查看下一行。
///
/// `\r\n`、`\n` 和单独的 `\r` 都被视为换行符。末尾的换行符不会产生额外的空行。
pub(crate) struct LineCursor<'a> {
    lines: Vec<&'a str>,
    position: usize,
}

impl<'a> LineCursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            lines: split_lines(text),
            position: 0,
        }
    }

    /// 读取下一行并前进。
    pub(crate) fn next_line(&mut self) -> Option<&'a str> {
        let line = self.peek_line()?;
        self.position += 1;
        Some(line)
    }

    /// 查看下一行，但不前进。
    pub(crate) fn peek_line(&self) -> Option<&'a str> {
        self.lines.get(self.position).copied()
    }

    /// 当前（最近一次读取的）行的行号，从 1 开始。
    pub(crate) fn line_number(&self) -> usize {
        self.position
    }
}

fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < bytes.len() {
        lines.push(&text[start..]);
    }

    lines
}
