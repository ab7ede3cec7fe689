// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::cache::executor::CommandExecutor;
use crate::infrastructure::cache::template::RedisTemplate;
use crate::utils::errors::StoreResult;

/// 列表操作
///
/// 下标从 0 开始，负数表示从尾部倒数
pub struct ListOperations<'a, E> {
    template: &'a RedisTemplate<E>,
}

impl<'a, E: CommandExecutor> ListOperations<'a, E> {
    pub(crate) fn new(template: &'a RedisTemplate<E>) -> Self {
        Self { template }
    }

    /// 从左侧插入一个元素，返回列表长度
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `value` - 值
    ///
    /// # 返回值
    ///
    /// * `Ok(i64)` - 插入后的列表长度
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn left_push(&self, key: &str, value: &str) -> StoreResult<i64> {
        self.push("LPUSH", key, &[value]).await
    }

    /// 从左侧依次插入多个元素
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `values` - 依次插入的元素
    ///
    /// # 返回值
    ///
    /// * `Ok(i64)` - 插入后的列表长度，空输入时为当前长度
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn left_push_all<S: AsRef<str>>(&self, key: &str, values: &[S]) -> StoreResult<i64> {
        self.push("LPUSH", key, values).await
    }

    /// 从右侧插入一个元素
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `value` - 值
    ///
    /// # 返回值
    ///
    /// * `Ok(i64)` - 插入后的列表长度
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn right_push(&self, key: &str, value: &str) -> StoreResult<i64> {
        self.push("RPUSH", key, &[value]).await
    }

    /// 从右侧依次插入多个元素
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `values` - 依次插入的元素
    ///
    /// # 返回值
    ///
    /// * `Ok(i64)` - 插入后的列表长度，空输入时为当前长度
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn right_push_all<S: AsRef<str>>(&self, key: &str, values: &[S]) -> StoreResult<i64> {
        self.push("RPUSH", key, values).await
    }

    async fn push<S: AsRef<str>>(&self, command: &str, key: &str, values: &[S]) -> StoreResult<i64> {
        // 没有元素时 LPUSH/RPUSH 会报错，直接返回当前长度
        if values.is_empty() {
            return self.size(key).await;
        }

        let mut cmd = redis::cmd(command);
        cmd.arg(key);
        for value in values {
            cmd.arg(value.as_ref());
        }
        self.template.query(cmd).await
    }

    /// 设置指定位置的元素，越界时由服务器返回错误
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `index` - 下标，负数从尾部倒数
    /// * `value` - 值
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 设置成功
    /// * `Err(StoreError::Redis)` - 下标越界或键不存在
    pub async fn set(&self, key: &str, index: i64, value: &str) -> StoreResult<()> {
        let mut cmd = redis::cmd("LSET");
        cmd.arg(key).arg(index).arg(value);
        self.template.query_ok(cmd).await
    }

    /// 列表长度
    ///
    /// # 参数
    ///
    /// * `key` - 键
    ///
    /// # 返回值
    ///
    /// * `Ok(i64)` - 列表长度
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn size(&self, key: &str) -> StoreResult<i64> {
        let mut cmd = redis::cmd("LLEN");
        cmd.arg(key);
        self.template.query(cmd).await
    }

    /// 范围查询，包含两端
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `start` - 起始下标
    /// * `end` - 结束下标，包含在内
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<String>)` - 范围内的元素
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn range(&self, key: &str, start: i64, end: i64) -> StoreResult<Vec<String>> {
        let mut cmd = redis::cmd("LRANGE");
        cmd.arg(key).arg(start).arg(end);
        self.template.query(cmd).await
    }

    /// 获取指定位置的元素
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `index` - 下标，负数从尾部倒数
    ///
    /// # 返回值
    ///
    /// * `Ok(Option<String>)` - 元素，越界时为None
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn index(&self, key: &str, index: i64) -> StoreResult<Option<String>> {
        let mut cmd = redis::cmd("LINDEX");
        cmd.arg(key).arg(index);
        self.template.query(cmd).await
    }

    /// 弹出左侧第一个元素
    ///
    /// # 参数
    ///
    /// * `key` - 键
    ///
    /// # 返回值
    ///
    /// * `Ok(Option<String>)` - 弹出的元素，列表为空时为None
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn left_pop(&self, key: &str) -> StoreResult<Option<String>> {
        let mut cmd = redis::cmd("LPOP");
        cmd.arg(key);
        self.template.query(cmd).await
    }

    /// 弹出右侧第一个元素
    ///
    /// # 参数
    ///
    /// * `key` - 键
    ///
    /// # 返回值
    ///
    /// * `Ok(Option<String>)` - 弹出的元素，列表为空时为None
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn right_pop(&self, key: &str) -> StoreResult<Option<String>> {
        let mut cmd = redis::cmd("RPOP");
        cmd.arg(key);
        self.template.query(cmd).await
    }

    /// 删除元素
    ///
    /// count 为 0 删除全部，正数从左侧开始删除，负数从右侧开始删除
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `count` - 删除数量，0 表示全部，负数从右侧开始
    /// * `value` - 值
    ///
    /// # 返回值
    ///
    /// * `Ok(i64)` - 实际删除的数量
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn remove(&self, key: &str, count: i64, value: &str) -> StoreResult<i64> {
        let mut cmd = redis::cmd("LREM");
        cmd.arg(key).arg(count).arg(value);
        self.template.query(cmd).await
    }

    /// 只保留指定范围内的元素
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `start` - 起始下标
    /// * `end` - 结束下标，包含在内
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 裁剪成功
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn trim(&self, key: &str, start: i64, end: i64) -> StoreResult<()> {
        let mut cmd = redis::cmd("LTRIM");
        cmd.arg(key).arg(start).arg(end);
        self.template.query_ok(cmd).await
    }
}
