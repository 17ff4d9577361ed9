// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 上游 JSON 的防御式访问
//!
//! 上游接口没有文档，任何字段都可能缺失或类型不符。这里的访问器
//! 只返回 `Option` 或默认值，从不 panic。

use serde_json::Value;

/// 沿对象键路径向下查找
pub fn at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| current.get(*key))
}

/// 读取字符串字段，数字转为字符串，其余情况返回空串
pub fn str_at(value: &Value, path: &[&str]) -> String {
    at(value, path).map(scalar_to_string).unwrap_or_default()
}

/// 读取数组字段，缺失或类型不符时返回空切片
pub fn array_at<'a>(value: &'a Value, path: &[&str]) -> &'a [Value] {
    at(value, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// 读取整数字段，接受数字或数字字符串
pub fn i64_at(value: &Value, path: &[&str]) -> Option<i64> {
    match at(value, path)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// 数组字段存在且非空
pub fn has_entries(value: &Value, path: &[&str]) -> bool {
    !array_at(value, path).is_empty()
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
