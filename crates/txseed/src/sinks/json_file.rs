//! JSON 文件输出
//!
//! 将一批用户写为缩进 4 空格的 JSON 数组，时间字段为 ISO-8601 字符串。
//! 输出目录不存在时自动创建，同名文件直接覆盖。

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;
use txseed_shared::error::Result;

use crate::models::User;

const INDENT: &[u8] = b"    ";

/// JSON 文件输出器
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    directory: PathBuf,
    default_filename: String,
}

impl JsonFileSink {
    pub fn new(directory: impl Into<PathBuf>, default_filename: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            default_filename: default_filename.into(),
        }
    }

    /// 解析输出文件名
    ///
    /// 未提供或为空时使用默认文件名；没有扩展名时补上 `.json`
    pub fn resolve_filename(&self, filename: Option<&str>) -> String {
        let name = filename
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.default_filename);

        if Path::new(name).extension().is_some() {
            name.to_string()
        } else {
            format!("{}.json", name)
        }
    }

    /// 写入用户列表，返回文件路径
    pub fn write(&self, users: &[User], filename: Option<&str>) -> Result<PathBuf> {
        fs::create_dir_all(&self.directory)?;

        let path = self.directory.join(self.resolve_filename(filename));
        fs::write(&path, render(users)?)?;

        info!(path = %path.display(), count = users.len(), "数据已输出到文件");
        Ok(path)
    }
}

/// 以 4 空格缩进渲染为 JSON
pub fn render<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(buf)
}

/// 渲染单个用户，用于控制台预览
pub fn pretty_user(user: &User) -> Result<String> {
    let bytes = render(user)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;
    use chrono::{TimeZone, Utc};

    fn sample_users() -> Vec<User> {
        vec![User {
            consumer_id: "123456789012345678".to_string(),
            age: 42,
            exact_distance: 2000,
            score: 500,
            seller_id: "654321".to_string(),
            transactions: vec![Transaction {
                transaction_id: "876543210987654321".to_string(),
                seller_id: "221512".to_string(),
                seller_name: "SELLER0".to_string(),
                mcc: 5422,
                mcc_category: "AÇOUGUEIRO".to_string(),
                value: 99.5,
                date: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
                transaction_type: "QRCODE".to_string(),
            }],
        }]
    }

    #[test]
    fn test_resolve_filename() {
        let sink = JsonFileSink::new("out", "users.json");

        assert_eq!(sink.resolve_filename(None), "users.json");
        assert_eq!(sink.resolve_filename(Some("")), "users.json");
        assert_eq!(sink.resolve_filename(Some("dados")), "dados.json");
        assert_eq!(sink.resolve_filename(Some("dados.json")), "dados.json");
        assert_eq!(sink.resolve_filename(Some(" batch1 ")), "batch1.json");
    }

    #[test]
    fn test_write_creates_directory_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonFileSink::new(dir.path().join("nested/output_json"), "users.json");

        let path = sink.write(&sample_users(), Some("batch")).unwrap();
        assert_eq!(path, dir.path().join("nested/output_json/batch.json"));
        assert!(path.exists());

        // 第二次写入空列表覆盖原文件
        sink.write(&[], Some("batch")).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_render_format() {
        let text = String::from_utf8(render(&sample_users()).unwrap()).unwrap();

        // 4 空格缩进
        assert!(text.starts_with("[\n    {\n        \"consumer_id\""));
        // 非 ASCII 字符原样保留
        assert!(text.contains("AÇOUGUEIRO"));
        assert!(text.contains("\"date\": \"2024-05-01T08:00:00Z\""));
    }

    #[test]
    fn test_pretty_user() {
        let users = sample_users();
        let text = pretty_user(&users[0]).unwrap();

        let parsed: User = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, users[0]);
    }

    #[test]
    fn test_write_into_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        // 目录位置被普通文件占用
        let sink = JsonFileSink::new(&blocker, "users.json");
        assert!(sink.write(&sample_users(), None).is_err());
    }
}
