// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::{BTreeMap, BTreeSet};

use crate::infrastructure::cache::executor::CommandExecutor;
use crate::infrastructure::cache::template::RedisTemplate;
use crate::infrastructure::cache::zset_ops::format_score;
use crate::utils::errors::StoreResult;

/// 哈希操作
pub struct HashOperations<'a, E> {
    template: &'a RedisTemplate<E>,
}

impl<'a, E: CommandExecutor> HashOperations<'a, E> {
    pub(crate) fn new(template: &'a RedisTemplate<E>) -> Self {
        Self { template }
    }

    /// 设置单个字段
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `field` - 字段名
    /// * `value` - 值
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 设置成功
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn put(&self, key: &str, field: &str, value: &str) -> StoreResult<()> {
        let mut cmd = redis::cmd("HSET");
        cmd.arg(key).arg(field).arg(value);
        self.template.query::<i64>(cmd).await?;
        Ok(())
    }

    /// 设置多个字段，空映射不发送命令
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `entries` - 字段与值
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 设置成功
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn put_all<'m, I>(&self, key: &str, entries: I) -> StoreResult<()>
    where
        I: IntoIterator<Item = (&'m String, &'m String)>,
    {
        let mut cmd = redis::cmd("HSET");
        cmd.arg(key);
        let mut count = 0usize;
        for (field, value) in entries {
            cmd.arg(field.as_str()).arg(value.as_str());
            count += 1;
        }
        if count == 0 {
            return Ok(());
        }

        self.template.query::<i64>(cmd).await?;
        Ok(())
    }

    /// 仅当字段不存在时设置
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `field` - 字段名
    /// * `value` - 值
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 字段不存在且已设置
    /// * `Ok(false)` - 字段已存在
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn put_if_absent(&self, key: &str, field: &str, value: &str) -> StoreResult<bool> {
        let mut cmd = redis::cmd("HSETNX");
        cmd.arg(key).arg(field).arg(value);
        self.template.query(cmd).await
    }

    /// 获取指定字段的值
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `field` - 字段名
    ///
    /// # 返回值
    ///
    /// * `Ok(Option<String>)` - 字段的值，不存在时为None
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn get(&self, key: &str, field: &str) -> StoreResult<Option<String>> {
        let mut cmd = redis::cmd("HGET");
        cmd.arg(key).arg(field);
        self.template.query(cmd).await
    }

    /// 批量获取字段的值
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `fields` - 字段名列表
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<Option<String>>)` - 与字段顺序一致，缺失的字段为None
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn multi_get<S: AsRef<str>>(
        &self,
        key: &str,
        fields: &[S],
    ) -> StoreResult<Vec<Option<String>>> {
        if fields.is_empty() {
            return Ok(Vec::new());
        }

        let mut cmd = redis::cmd("HMGET");
        cmd.arg(key);
        for field in fields {
            cmd.arg(field.as_ref());
        }
        self.template.query(cmd).await
    }

    /// 获取所有字段名
    ///
    /// # 参数
    ///
    /// * `key` - 键
    ///
    /// # 返回值
    ///
    /// * `Ok(BTreeSet<String>)` - 字段名集合
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn keys(&self, key: &str) -> StoreResult<BTreeSet<String>> {
        let mut cmd = redis::cmd("HKEYS");
        cmd.arg(key);
        self.template.query(cmd).await
    }

    /// 获取所有字段值
    ///
    /// # 参数
    ///
    /// * `key` - 键
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<String>)` - 字段值列表
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn values(&self, key: &str) -> StoreResult<Vec<String>> {
        let mut cmd = redis::cmd("HVALS");
        cmd.arg(key);
        self.template.query(cmd).await
    }

    /// 获取所有字段和值
    ///
    /// # 参数
    ///
    /// * `key` - 键
    ///
    /// # 返回值
    ///
    /// * `Ok(BTreeMap<String, String>)` - 字段到值的映射
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn entries(&self, key: &str) -> StoreResult<BTreeMap<String, String>> {
        let mut cmd = redis::cmd("HGETALL");
        cmd.arg(key);
        self.template.query(cmd).await
    }

    /// 字段数值自增/自减
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `field` - 字段名
    /// * `delta` - 增量，负数表示减少
    ///
    /// # 返回值
    ///
    /// * `Ok(i64)` - 变化后的值
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn increment(&self, key: &str, field: &str, delta: i64) -> StoreResult<i64> {
        let mut cmd = redis::cmd("HINCRBY");
        cmd.arg(key).arg(field).arg(delta);
        self.template.query(cmd).await
    }

    /// 字段数值按浮点增量变化
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `field` - 字段名
    /// * `delta` - 增量，负数表示减少
    ///
    /// # 返回值
    ///
    /// * `Ok(f64)` - 变化后的值
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn increment_float(&self, key: &str, field: &str, delta: f64) -> StoreResult<f64> {
        let mut cmd = redis::cmd("HINCRBYFLOAT");
        cmd.arg(key).arg(field).arg(format_score(delta));
        self.template.query(cmd).await
    }

    /// 删除字段，返回实际删除的数量
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `fields` - 字段名列表
    ///
    /// # 返回值
    ///
    /// * `Ok(i64)` - 实际删除的字段数量
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn delete<S: AsRef<str>>(&self, key: &str, fields: &[S]) -> StoreResult<i64> {
        if fields.is_empty() {
            return Ok(0);
        }

        let mut cmd = redis::cmd("HDEL");
        cmd.arg(key);
        for field in fields {
            cmd.arg(field.as_ref());
        }
        self.template.query(cmd).await
    }

    /// 判断字段是否存在
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `field` - 字段名
    ///
    /// # 返回值
    ///
    /// * `Ok(bool)` - 字段是否存在
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn has_key(&self, key: &str, field: &str) -> StoreResult<bool> {
        let mut cmd = redis::cmd("HEXISTS");
        cmd.arg(key).arg(field);
        self.template.query(cmd).await
    }

    /// 字段数量
    ///
    /// # 参数
    ///
    /// * `key` - 键
    ///
    /// # 返回值
    ///
    /// * `Ok(i64)` - 字段数量，键不存在时为 0
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn size(&self, key: &str) -> StoreResult<i64> {
        let mut cmd = redis::cmd("HLEN");
        cmd.arg(key);
        self.template.query(cmd).await
    }
}
