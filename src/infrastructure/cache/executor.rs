// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{Cmd, Value};
use tracing::debug;

use crate::utils::errors::StoreResult;

/// 命令执行器
///
/// 发送单条命令并返回原始响应。连接管理、编码和协议细节都由客户端库负责。
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// 执行一条命令
    ///
    /// # 参数
    ///
    /// * `cmd` - 已构建好的命令
    ///
    /// # 返回值
    ///
    /// * `Ok(Value)` - 服务器的原始响应
    /// * `Err(StoreError)` - 客户端库返回的错误
    async fn execute(&self, cmd: Cmd) -> StoreResult<Value>;
}

/// 基于 redis 多路复用连接的执行器
#[derive(Clone)]
pub struct RedisExecutor {
    connection: MultiplexedConnection,
}

impl RedisExecutor {
    /// 打开客户端并建立多路复用连接
    ///
    /// # 参数
    ///
    /// * `redis_url` - Redis连接URL
    pub async fn connect(redis_url: &str) -> StoreResult<Self> {
        let client = redis::Client::open(redis_url)?;
        let connection = client.get_multiplexed_async_connection().await?;
        Ok(Self { connection })
    }
}

#[async_trait]
impl CommandExecutor for RedisExecutor {
    async fn execute(&self, cmd: Cmd) -> StoreResult<Value> {
        let args = command_args(&cmd);
        debug!(
            command = args.first().map(String::as_str).unwrap_or_default(),
            key = args.get(1).map(String::as_str).unwrap_or_default(),
            "Executing redis command"
        );

        // 多路复用连接的克隆共享同一个底层连接
        let mut connection = self.connection.clone();
        let value: Value = cmd.query_async(&mut connection).await?;
        Ok(value)
    }
}

/// 以文本形式取出命令的全部参数，命令名在首位
pub fn command_args(cmd: &Cmd) -> Vec<String> {
    cmd.args_iter()
        .filter_map(|arg| match arg {
            redis::Arg::Simple(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
            _ => None,
        })
        .collect()
}

/// 命令名，即命令的首个参数
pub fn command_name(cmd: &Cmd) -> String {
    match cmd.args_iter().next() {
        Some(redis::Arg::Simple(bytes)) => String::from_utf8_lossy(bytes).into_owned(),
        _ => String::new(),
    }
}
