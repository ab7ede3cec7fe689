// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::infrastructure::cache::executor::CommandExecutor;
use crate::infrastructure::cache::expiry::push_timeout;
use crate::infrastructure::cache::template::RedisTemplate;
use crate::infrastructure::cache::zset_ops::format_score;
use crate::utils::errors::StoreResult;

/// 字符串操作
pub struct ValueOperations<'a, E> {
    template: &'a RedisTemplate<E>,
}

impl<'a, E: CommandExecutor> ValueOperations<'a, E> {
    pub(crate) fn new(template: &'a RedisTemplate<E>) -> Self {
        Self { template }
    }

    /// 设置键值对
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `value` - 值
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 设置成功
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value);
        self.template.query_ok(cmd).await
    }

    /// 设置键值对并指定过期时间
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `value` - 值
    /// * `timeout` - 过期时长，至少 1 毫秒
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 设置成功
    /// * `Err(StoreError::InvalidArgument)` - 时长不足 1 毫秒，命令不会发送
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn set_with_timeout(&self, key: &str, value: &str, timeout: Duration) -> StoreResult<()> {
        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value);
        push_timeout(&mut cmd, timeout)?;
        self.template.query_ok(cmd).await
    }

    /// 获取键的值，不存在时返回 None
    ///
    /// # 参数
    ///
    /// * `key` - 键
    ///
    /// # 返回值
    ///
    /// * `Ok(Option<String>)` - 键对应的值，如果不存在则返回None
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut cmd = redis::cmd("GET");
        cmd.arg(key);
        self.template.query(cmd).await
    }

    /// 设置新值并返回旧值
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `value` - 值
    ///
    /// # 返回值
    ///
    /// * `Ok(Option<String>)` - 旧值，键原先不存在时为None
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn get_and_set(&self, key: &str, value: &str) -> StoreResult<Option<String>> {
        let mut cmd = redis::cmd("GETSET");
        cmd.arg(key).arg(value);
        self.template.query(cmd).await
    }

    /// 按增量增加数值，返回增加后的值
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `delta` - 增量，负数表示减少
    ///
    /// # 返回值
    ///
    /// * `Ok(i64)` - 增加后的值
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn increment(&self, key: &str, delta: i64) -> StoreResult<i64> {
        let mut cmd = redis::cmd("INCRBY");
        cmd.arg(key).arg(delta);
        self.template.query(cmd).await
    }

    /// 按浮点增量增加数值
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `delta` - 增量，负数表示减少
    ///
    /// # 返回值
    ///
    /// * `Ok(f64)` - 增加后的值
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn increment_float(&self, key: &str, delta: f64) -> StoreResult<f64> {
        let mut cmd = redis::cmd("INCRBYFLOAT");
        cmd.arg(key).arg(format_score(delta));
        self.template.query(cmd).await
    }

    /// 按增量减少数值，返回减少后的值
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `delta` - 减量
    ///
    /// # 返回值
    ///
    /// * `Ok(i64)` - 减少后的值
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn decrement(&self, key: &str, delta: i64) -> StoreResult<i64> {
        let mut cmd = redis::cmd("DECRBY");
        cmd.arg(key).arg(delta);
        self.template.query(cmd).await
    }

    /// 仅当键存在时设置，返回是否设置成功
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `value` - 值
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 键存在且已设置
    /// * `Ok(false)` - 键不存在，未设置
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn set_if_present(&self, key: &str, value: &str) -> StoreResult<bool> {
        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value).arg("XX");
        self.template.query(cmd).await
    }

    /// 仅当键不存在时设置，返回是否设置成功
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `value` - 值
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 键不存在且已设置
    /// * `Ok(false)` - 键已存在，未设置
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn set_if_absent(&self, key: &str, value: &str) -> StoreResult<bool> {
        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value).arg("NX");
        self.template.query(cmd).await
    }

    /// 仅当键不存在时设置并指定过期时间
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `value` - 值
    /// * `timeout` - 过期时长，至少 1 毫秒
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 键不存在且已设置
    /// * `Ok(false)` - 键已存在，未设置
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn set_if_absent_with_timeout(
        &self,
        key: &str,
        value: &str,
        timeout: Duration,
    ) -> StoreResult<bool> {
        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value).arg("NX");
        push_timeout(&mut cmd, timeout)?;
        self.template.query(cmd).await
    }

    /// 批量设置键值对
    ///
    /// # 参数
    ///
    /// * `pairs` - 键值对
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 全部设置成功，空输入不发送命令
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn multi_set<K: AsRef<str>, V: AsRef<str>>(&self, pairs: &[(K, V)]) -> StoreResult<()> {
        if pairs.is_empty() {
            return Ok(());
        }

        let mut cmd = redis::cmd("MSET");
        for (key, value) in pairs {
            cmd.arg(key.as_ref()).arg(value.as_ref());
        }
        self.template.query_ok(cmd).await
    }

    /// 批量获取，结果与键一一对应
    ///
    /// # 参数
    ///
    /// * `keys` - 键列表
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<Option<String>>)` - 与键顺序一致，缺失的键为None
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn multi_get<S: AsRef<str>>(&self, keys: &[S]) -> StoreResult<Vec<Option<String>>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let mut cmd = redis::cmd("MGET");
        for key in keys {
            cmd.arg(key.as_ref());
        }
        self.template.query(cmd).await
    }

    /// 追加内容，返回追加后的长度
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `value` - 值
    ///
    /// # 返回值
    ///
    /// * `Ok(i64)` - 追加后的长度
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn append(&self, key: &str, value: &str) -> StoreResult<i64> {
        let mut cmd = redis::cmd("APPEND");
        cmd.arg(key).arg(value);
        self.template.query(cmd).await
    }

    /// 获取值的长度
    ///
    /// # 参数
    ///
    /// * `key` - 键
    ///
    /// # 返回值
    ///
    /// * `Ok(i64)` - 值的字节长度，键不存在时为 0
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn size(&self, key: &str) -> StoreResult<i64> {
        let mut cmd = redis::cmd("STRLEN");
        cmd.arg(key);
        self.template.query(cmd).await
    }

    /// 将对象序列化为JSON后存储
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `value` - 值
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 存储成功
    /// * `Err(StoreError::Serialization)` - 序列化失败
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let text = serde_json::to_string(value)?;
        self.set(key, &text).await
    }

    /// 读取JSON文本并反序列化
    ///
    /// # 参数
    ///
    /// * `key` - 键
    ///
    /// # 返回值
    ///
    /// * `Ok(Option<T>)` - 反序列化后的对象，键不存在时为None
    /// * `Err(StoreError::Serialization)` - 文本不是合法的JSON
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        match self.get(key).await? {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }
}
