// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use redis::{Cmd, FromRedisValue};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::infrastructure::cache::executor::{command_name, CommandExecutor, RedisExecutor};
use crate::infrastructure::cache::expiry::{expire_command, KeyExpiry, TimeUnit};
use crate::infrastructure::cache::hash_ops::HashOperations;
use crate::infrastructure::cache::list_ops::ListOperations;
use crate::infrastructure::cache::set_ops::SetOperations;
use crate::infrastructure::cache::value_ops::ValueOperations;
use crate::infrastructure::cache::zset_ops::ZSetOperations;
use crate::utils::errors::{StoreError, StoreResult};

/// Redis模板
///
/// 按数据结构分组提供客户端操作，每个操作只构建一条命令并解码响应。
/// 克隆开销很小，所有克隆共享同一个执行器。
pub struct RedisTemplate<E> {
    executor: Arc<E>,
}

impl<E> Clone for RedisTemplate<E> {
    fn clone(&self) -> Self {
        Self {
            executor: Arc::clone(&self.executor),
        }
    }
}

impl RedisTemplate<RedisExecutor> {
    /// 连接到Redis并创建模板
    ///
    /// # 参数
    ///
    /// * `redis_url` - Redis连接URL
    ///
    /// # 返回值
    ///
    /// * `Ok(RedisTemplate)` - 模板实例
    /// * `Err(StoreError)` - 连接过程中出现的错误
    pub async fn connect(redis_url: &str) -> StoreResult<Self> {
        let executor = RedisExecutor::connect(redis_url).await?;
        Ok(Self::new(executor))
    }
}

impl<E: CommandExecutor> RedisTemplate<E> {
    /// 使用给定的执行器创建模板
    ///
    /// # 参数
    ///
    /// * `executor` - 命令执行器，模板取得其所有权
    pub fn new(executor: E) -> Self {
        Self::with_executor(Arc::new(executor))
    }

    /// 使用共享的执行器创建模板
    ///
    /// # 参数
    ///
    /// * `executor` - 已被其他组件持有的执行器
    pub fn with_executor(executor: Arc<E>) -> Self {
        Self { executor }
    }

    /// 底层执行器
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// 字符串操作
    pub fn ops_for_value(&self) -> ValueOperations<'_, E> {
        ValueOperations::new(self)
    }

    /// 哈希操作
    pub fn ops_for_hash(&self) -> HashOperations<'_, E> {
        HashOperations::new(self)
    }

    /// 列表操作
    pub fn ops_for_list(&self) -> ListOperations<'_, E> {
        ListOperations::new(self)
    }

    /// 集合操作
    pub fn ops_for_set(&self) -> SetOperations<'_, E> {
        SetOperations::new(self)
    }

    /// 有序集合操作
    pub fn ops_for_zset(&self) -> ZSetOperations<'_, E> {
        ZSetOperations::new(self)
    }

    /// 执行命令并按目标类型解码响应
    ///
    /// 解码交给客户端库的 `FromRedisValue`，RESP2 与 RESP3 的响应形态都能处理
    ///
    /// # 返回值
    ///
    /// * `Ok(T)` - 解码后的值
    /// * `Err(StoreError::UnexpectedReply)` - 响应无法转换为目标类型
    pub(crate) async fn query<T: FromRedisValue>(&self, cmd: Cmd) -> StoreResult<T> {
        let command = command_name(&cmd);
        let value = self.executor.execute(cmd).await?;
        redis::from_redis_value(value).map_err(|err| StoreError::unexpected(&command, err))
    }

    /// 执行命令并要求响应为 `OK` 状态
    pub(crate) async fn query_ok(&self, cmd: Cmd) -> StoreResult<()> {
        let command = command_name(&cmd);
        let status: String = self.query(cmd).await?;
        if status.eq_ignore_ascii_case("OK") {
            Ok(())
        } else {
            Err(StoreError::unexpected(&command, status))
        }
    }

    /// 设置键的过期时间
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `timeout` - 过期时长，至少 1 毫秒
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 设置成功
    /// * `Ok(false)` - 键不存在
    /// * `Err(StoreError::InvalidArgument)` - 时长不足 1 毫秒，命令不会发送
    pub async fn expire(&self, key: &str, timeout: Duration) -> StoreResult<bool> {
        let cmd = expire_command(key, timeout)?;
        self.query(cmd).await
    }

    /// 以指定单位设置键的过期时间
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `amount` - 时长数值
    /// * `unit` - 时间单位
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 设置成功
    /// * `Ok(false)` - 键不存在
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn expire_with_unit(&self, key: &str, amount: u64, unit: TimeUnit) -> StoreResult<bool> {
        self.expire(key, unit.to_duration(amount)).await
    }

    /// 获取键的剩余生存时间
    ///
    /// # 参数
    ///
    /// * `key` - 键
    ///
    /// # 返回值
    ///
    /// * `Ok(KeyExpiry)` - 键不存在、永不过期或剩余时长
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn get_expire(&self, key: &str) -> StoreResult<KeyExpiry> {
        let mut cmd = redis::cmd("TTL");
        cmd.arg(key);
        let ttl: i64 = self.query(cmd).await?;
        Ok(KeyExpiry::from_ttl_seconds(ttl))
    }

    /// 以指定单位获取剩余生存时间，-1 和 -2 原样返回
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `unit` - 时间单位
    ///
    /// # 返回值
    ///
    /// * `Ok(i64)` - 换算后的剩余时间，向下取整
    /// * `Ok(-1)` - 永不过期
    /// * `Ok(-2)` - 键不存在
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn get_expire_with_unit(&self, key: &str, unit: TimeUnit) -> StoreResult<i64> {
        let mut cmd = redis::cmd("PTTL");
        cmd.arg(key);
        let millis: i64 = self.query(cmd).await?;
        if millis < 0 {
            return Ok(millis);
        }
        Ok(unit.convert_millis(millis))
    }

    /// 移除键的过期时间
    ///
    /// # 参数
    ///
    /// * `key` - 键
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 已移除过期时间
    /// * `Ok(false)` - 键不存在或本就没有过期时间
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn persist(&self, key: &str) -> StoreResult<bool> {
        let mut cmd = redis::cmd("PERSIST");
        cmd.arg(key);
        self.query(cmd).await
    }

    /// 删除键，键存在时返回 true
    ///
    /// # 参数
    ///
    /// * `key` - 键
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 键存在并已删除
    /// * `Ok(false)` - 键不存在
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn delete(&self, key: &str) -> StoreResult<bool> {
        Ok(self.delete_many(&[key]).await? > 0)
    }

    /// 批量删除键，返回实际删除的数量
    ///
    /// # 参数
    ///
    /// * `keys` - 键列表
    ///
    /// # 返回值
    ///
    /// * `Ok(i64)` - 实际删除的数量，空输入不发送命令
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn delete_many<S: AsRef<str>>(&self, keys: &[S]) -> StoreResult<i64> {
        if keys.is_empty() {
            return Ok(0);
        }

        let mut cmd = redis::cmd("DEL");
        for key in keys {
            cmd.arg(key.as_ref());
        }
        self.query(cmd).await
    }

    /// 判断键是否存在
    ///
    /// # 参数
    ///
    /// * `key` - 键
    ///
    /// # 返回值
    ///
    /// * `Ok(bool)` - 键是否存在
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn has_key(&self, key: &str) -> StoreResult<bool> {
        let mut cmd = redis::cmd("EXISTS");
        cmd.arg(key);
        self.query(cmd).await
    }

    /// 获取键的数据类型
    ///
    /// # 参数
    ///
    /// * `key` - 键
    ///
    /// # 返回值
    ///
    /// * `Ok(DataType)` - 键的类型，不存在时为 `DataType::None`
    /// * `Err(StoreError)` - 命令执行或响应解码失败
    pub async fn key_type(&self, key: &str) -> StoreResult<DataType> {
        let mut cmd = redis::cmd("TYPE");
        cmd.arg(key);
        let name: String = self.query(cmd).await?;
        Ok(DataType::from_name(&name))
    }

    /// 重命名键
    ///
    /// # 参数
    ///
    /// * `old_key` - 原键名
    /// * `new_key` - 新键名
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 重命名成功
    /// * `Err(StoreError::Redis)` - 原键不存在
    pub async fn rename(&self, old_key: &str, new_key: &str) -> StoreResult<()> {
        let mut cmd = redis::cmd("RENAME");
        cmd.arg(old_key).arg(new_key);
        self.query_ok(cmd).await
    }
}

/// 键的数据类型
///
/// 键不存在时为 `None`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    None,
    String,
    List,
    Set,
    ZSet,
    Hash,
    Stream,
    Other(String),
}

impl DataType {
    /// 解析 TYPE 命令返回的类型名，不区分大小写
    ///
    /// # 参数
    ///
    /// * `name` - 类型名，如 `string`、`zset`
    ///
    /// # 返回值
    ///
    /// 已知类型对应的变体，未知类型保留为 `Other`
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "none" => DataType::None,
            "string" => DataType::String,
            "list" => DataType::List,
            "set" => DataType::Set,
            "zset" => DataType::ZSet,
            "hash" => DataType::Hash,
            "stream" => DataType::Stream,
            other => DataType::Other(other.to_string()),
        }
    }

    /// 类型名，与 TYPE 命令的返回一致
    pub fn name(&self) -> &str {
        match self {
            DataType::None => "none",
            DataType::String => "string",
            DataType::List => "list",
            DataType::Set => "set",
            DataType::ZSet => "zset",
            DataType::Hash => "hash",
            DataType::Stream => "stream",
            DataType::Other(name) => name,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
