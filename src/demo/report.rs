// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::BTreeMap;
use std::fmt;

/// 场景执行报告
///
/// 按执行顺序记录 `标签 = 结果`
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioReport {
    pub name: String,
    pub lines: Vec<(String, String)>,
}

impl ScenarioReport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }

    /// 记录一条结果
    pub fn record(&mut self, label: &str, value: impl fmt::Display) {
        self.lines.push((label.to_string(), value.to_string()));
    }

    /// 查找标签对应的结果
    pub fn value(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn labels(&self) -> Vec<&str> {
        self.lines.iter().map(|(l, _)| l.as_str()).collect()
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.name)?;
        for (label, value) in &self.lines {
            writeln!(f, "{} = {}", label, value)?;
        }
        Ok(())
    }
}

/// `[a, b, c]`
pub fn format_list<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: fmt::Display,
{
    let parts: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

/// `{k1=v1, k2=v2}`
pub fn format_map(entries: &BTreeMap<String, String>) -> String {
    let parts: Vec<String> = entries.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
    format!("{{{}}}", parts.join(", "))
}

/// 空值输出为 `nil`
pub fn format_optional<T: fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "nil".to_string(),
    }
}
