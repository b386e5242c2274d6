//! 定义了解析器输出的数据模型。

pub mod lyric_line;
pub mod parse_result;

pub use lyric_line::LyricLine;
pub use parse_result::ParseResult;
