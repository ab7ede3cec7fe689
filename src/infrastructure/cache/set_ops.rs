// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::BTreeSet;

use crate::infrastructure::cache::executor::CommandExecutor;
use crate::infrastructure::cache::template::RedisTemplate;
use crate::utils::errors::StoreResult;

/// 集合操作
///
/// 服务器端集合无序，返回结果按字典序排列
pub struct SetOperations<'a, E> {
    template: &'a RedisTemplate<E>,
}

impl<'a, E: CommandExecutor> SetOperations<'a, E> {
    pub(crate) fn new(template: &'a RedisTemplate<E>) -> Self {
        Self { template }
    }

    /// 添加元素，返回新增的数量
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `members` - 成员列表
    ///
    /// # 返回值
    ///
    /// * `Ok(i64)` - 新增的元素数量
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn add<S: AsRef<str>>(&self, key: &str, members: &[S]) -> StoreResult<i64> {
        if members.is_empty() {
            return Ok(0);
        }

        let mut cmd = redis::cmd("SADD");
        cmd.arg(key);
        for member in members {
            cmd.arg(member.as_ref());
        }
        self.template.query(cmd).await
    }

    /// 判断元素是否在集合中
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `member` - 成员
    ///
    /// # 返回值
    ///
    /// * `Ok(bool)` - 是否为成员
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn is_member(&self, key: &str, member: &str) -> StoreResult<bool> {
        let mut cmd = redis::cmd("SISMEMBER");
        cmd.arg(key).arg(member);
        self.template.query(cmd).await
    }

    /// 获取全部元素
    ///
    /// # 参数
    ///
    /// * `key` - 键
    ///
    /// # 返回值
    ///
    /// * `Ok(BTreeSet<String>)` - 全部元素
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn members(&self, key: &str) -> StoreResult<BTreeSet<String>> {
        let mut cmd = redis::cmd("SMEMBERS");
        cmd.arg(key);
        self.template.query(cmd).await
    }

    /// 交集
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `other_key` - 另一个集合的键
    ///
    /// # 返回值
    ///
    /// * `Ok(BTreeSet<String>)` - 两个集合的交集
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn intersect(&self, key: &str, other_key: &str) -> StoreResult<BTreeSet<String>> {
        self.combine("SINTER", key, other_key).await
    }

    /// 并集
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `other_key` - 另一个集合的键
    ///
    /// # 返回值
    ///
    /// * `Ok(BTreeSet<String>)` - 两个集合的并集
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn union(&self, key: &str, other_key: &str) -> StoreResult<BTreeSet<String>> {
        self.combine("SUNION", key, other_key).await
    }

    /// 差集
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `other_key` - 另一个集合的键
    ///
    /// # 返回值
    ///
    /// * `Ok(BTreeSet<String>)` - 只在 `key` 中出现的元素
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn difference(&self, key: &str, other_key: &str) -> StoreResult<BTreeSet<String>> {
        self.combine("SDIFF", key, other_key).await
    }

    async fn combine(&self, command: &str, key: &str, other_key: &str) -> StoreResult<BTreeSet<String>> {
        let mut cmd = redis::cmd(command);
        cmd.arg(key).arg(other_key);
        self.template.query(cmd).await
    }

    /// 删除元素，返回实际删除的数量
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `members` - 成员列表
    ///
    /// # 返回值
    ///
    /// * `Ok(i64)` - 实际删除的数量
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn remove<S: AsRef<str>>(&self, key: &str, members: &[S]) -> StoreResult<i64> {
        if members.is_empty() {
            return Ok(0);
        }

        let mut cmd = redis::cmd("SREM");
        cmd.arg(key);
        for member in members {
            cmd.arg(member.as_ref());
        }
        self.template.query(cmd).await
    }

    /// 集合大小
    ///
    /// # 参数
    ///
    /// * `key` - 键
    ///
    /// # 返回值
    ///
    /// * `Ok(i64)` - 元素数量
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn size(&self, key: &str) -> StoreResult<i64> {
        let mut cmd = redis::cmd("SCARD");
        cmd.arg(key);
        self.template.query(cmd).await
    }

    /// 随机弹出一个元素
    ///
    /// # 参数
    ///
    /// * `key` - 键
    ///
    /// # 返回值
    ///
    /// * `Ok(Option<String>)` - 弹出的元素，集合为空时为None
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn pop(&self, key: &str) -> StoreResult<Option<String>> {
        let mut cmd = redis::cmd("SPOP");
        cmd.arg(key);
        self.template.query(cmd).await
    }
}
