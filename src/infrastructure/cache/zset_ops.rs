// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::cache::executor::CommandExecutor;
use crate::infrastructure::cache::template::RedisTemplate;
use crate::utils::errors::StoreResult;

/// 有序集合操作
///
/// 成员按分值升序排列，分值相同时按字典序
pub struct ZSetOperations<'a, E> {
    template: &'a RedisTemplate<E>,
}

impl<'a, E: CommandExecutor> ZSetOperations<'a, E> {
    pub(crate) fn new(template: &'a RedisTemplate<E>) -> Self {
        Self { template }
    }

    /// 添加成员，成员已存在时只更新分值并返回 false
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `member` - 成员
    /// * `score` - 分值
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 新增成员
    /// * `Ok(false)` - 成员已存在，只更新了分值
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn add(&self, key: &str, member: &str, score: f64) -> StoreResult<bool> {
        let mut cmd = redis::cmd("ZADD");
        cmd.arg(key).arg(format_score(score)).arg(member);
        self.template.query(cmd).await
    }

    /// 按下标范围查询，包含两端
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `start` - 起始下标
    /// * `end` - 结束下标，包含在内
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<String>)` - 按分值升序的成员
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn range(&self, key: &str, start: i64, end: i64) -> StoreResult<Vec<String>> {
        let mut cmd = redis::cmd("ZRANGE");
        cmd.arg(key).arg(start).arg(end);
        self.template.query(cmd).await
    }

    /// 按下标范围查询并返回分值
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `start` - 起始下标
    /// * `end` - 结束下标，包含在内
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<(String, f64)>)` - 成员与分值，按分值升序
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn range_with_scores(
        &self,
        key: &str,
        start: i64,
        end: i64,
    ) -> StoreResult<Vec<(String, f64)>> {
        let mut cmd = redis::cmd("ZRANGE");
        cmd.arg(key).arg(start).arg(end).arg("WITHSCORES");
        self.template.query(cmd).await
    }

    /// 按分值降序的下标范围查询
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `start` - 起始下标
    /// * `end` - 结束下标，包含在内
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<String>)` - 按分值降序的成员
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn reverse_range(&self, key: &str, start: i64, end: i64) -> StoreResult<Vec<String>> {
        let mut cmd = redis::cmd("ZREVRANGE");
        cmd.arg(key).arg(start).arg(end);
        self.template.query(cmd).await
    }

    /// 按分值区间查询，包含两端
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `min` - 最小分值
    /// * `max` - 最大分值
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<String>)` - 分值区间内的成员
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn range_by_score(&self, key: &str, min: f64, max: f64) -> StoreResult<Vec<String>> {
        let mut cmd = redis::cmd("ZRANGEBYSCORE");
        cmd.arg(key).arg(format_score(min)).arg(format_score(max));
        self.template.query(cmd).await
    }

    /// 分值区间内的成员数量
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `min` - 最小分值
    /// * `max` - 最大分值
    ///
    /// # 返回值
    ///
    /// * `Ok(i64)` - 区间内的成员数量
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn count(&self, key: &str, min: f64, max: f64) -> StoreResult<i64> {
        let mut cmd = redis::cmd("ZCOUNT");
        cmd.arg(key).arg(format_score(min)).arg(format_score(max));
        self.template.query(cmd).await
    }

    /// 成员数量
    ///
    /// # 参数
    ///
    /// * `key` - 键
    ///
    /// # 返回值
    ///
    /// * `Ok(i64)` - 成员数量
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn z_card(&self, key: &str) -> StoreResult<i64> {
        let mut cmd = redis::cmd("ZCARD");
        cmd.arg(key);
        self.template.query(cmd).await
    }

    /// 成员数量，同 `z_card`
    ///
    /// # 参数
    ///
    /// * `key` - 键
    ///
    /// # 返回值
    ///
    /// * `Ok(i64)` - 成员数量
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn size(&self, key: &str) -> StoreResult<i64> {
        self.z_card(key).await
    }

    /// 删除成员，返回实际删除的数量
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

        let mut cmd = redis::cmd("ZREM");
        cmd.arg(key);
        for member in members {
            cmd.arg(member.as_ref());
        }
        self.template.query(cmd).await
    }

    /// 查询成员的分值
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `member` - 成员
    ///
    /// # 返回值
    ///
    /// * `Ok(Option<f64>)` - 分值，成员不存在时为None
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn score(&self, key: &str, member: &str) -> StoreResult<Option<f64>> {
        let mut cmd = redis::cmd("ZSCORE");
        cmd.arg(key).arg(member);
        self.template.query(cmd).await
    }

    /// 增加/减少成员的分值，返回新的分值
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `member` - 成员
    /// * `delta` - 增量，负数表示减少
    ///
    /// # 返回值
    ///
    /// * `Ok(f64)` - 新的分值
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn increment_score(&self, key: &str, member: &str, delta: f64) -> StoreResult<f64> {
        let mut cmd = redis::cmd("ZINCRBY");
        cmd.arg(key).arg(format_score(delta)).arg(member);
        self.template.query(cmd).await
    }

    /// 成员的升序排名
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `member` - 成员
    ///
    /// # 返回值
    ///
    /// * `Ok(Option<i64>)` - 从 0 开始的排名，成员不存在时为None
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn rank(&self, key: &str, member: &str) -> StoreResult<Option<i64>> {
        let mut cmd = redis::cmd("ZRANK");
        cmd.arg(key).arg(member);
        self.template.query(cmd).await
    }

    /// 成员的降序排名
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `member` - 成员
    ///
    /// # 返回值
    ///
    /// * `Ok(Option<i64>)` - 从 0 开始的排名，成员不存在时为None
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn reverse_rank(&self, key: &str, member: &str) -> StoreResult<Option<i64>> {
        let mut cmd = redis::cmd("ZREVRANK");
        cmd.arg(key).arg(member);
        self.template.query(cmd).await
    }
}

/// 浮点参数的文本形式，整数值不带小数点，无穷大写作 `+inf`/`-inf`
pub(crate) fn format_score(score: f64) -> String {
    if score == f64::INFINITY {
        "+inf".to_string()
    } else if score == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        score.to_string()
    }
}
