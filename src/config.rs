//! 负责处理解析器的选项及其持久化配置。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::error::{LyricsParserError, Result};

const OPTIONS_FILE_NAME: &str = "parser_options.json";

/// 歌词解析器的选项。
///
/// 默认值与标准的解析行为完全一致。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// 应用到每个时间戳上的偏移量（毫秒）。
    ///
    /// 正数表示延迟歌词，负数表示提前歌词，结果最小为零。
    pub offset_ms: i64,
    /// 是否保留紧跟在歌词行之后的空行作为空白占位行。
    pub preserve_spacers: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            offset_ms: 0,
            preserve_spacers: true,
        }
    }
}

impl ParserOptions {
    /// 从指定的 JSON 文件加载选项。
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let options: Self = serde_json::from_str(&content)?;
        info!("已从 {:?} 加载解析器选项。", path);
        Ok(options)
    }

    /// 将选项序列化为 JSON 并保存到指定文件。
    ///
    /// 目标文件所在的目录不存在时会自动创建。
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!("已将解析器选项保存到 {:?}。", path);
        Ok(())
    }

    /// 从用户配置目录加载选项。
    ///
    /// 配置文件不存在时返回默认选项。
    pub fn load() -> Result<Self> {
        let path = get_config_file_path(OPTIONS_FILE_NAME)?;
        match Self::load_from_path(&path) {
            Ok(options) => Ok(options),
            Err(LyricsParserError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("解析器配置文件不存在，将使用默认选项。");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// 将选项保存到用户配置目录。
    pub fn save(&self) -> Result<()> {
        let path = get_config_file_path(OPTIONS_FILE_NAME)?;
        self.save_to_path(&path)
    }

    /// 对一个时间戳应用 `offset_ms`。
    pub(crate) fn apply_offset(&self, time: Duration) -> Duration {
        if self.offset_ms == 0 {
            return time;
        }
        let offset = Duration::from_millis(self.offset_ms.unsigned_abs());
        if self.offset_ms > 0 {
            time.saturating_add(offset)
        } else {
            time.saturating_sub(offset)
        }
    }
}

/// 获取应用配置目录下指定文件的完整路径。
///
/// # 参数
/// * `filename` - 目标配置文件的名称，例如 "parser_options.json"。
///
/// 只计算路径，不会创建目录。
pub(crate) fn get_config_file_path(filename: &str) -> Result<PathBuf> {
    let mut config_dir = dirs::config_dir().ok_or(LyricsParserError::ConfigDirNotFound)?;
    config_dir.push("lyrics-parser");
    config_dir.push(filename);
    Ok(config_dir)
}
