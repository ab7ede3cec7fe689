// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;
use thiserror::Error;

/// 存储客户端错误类型
///
/// 客户端库抛出的错误原样向上传递，不做重试或转换
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Redis错误: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("意外的响应: {command} 返回 {reply}")]
    UnexpectedReply { command: String, reply: String },

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("无效参数: {0}")]
    InvalidArgument(String),
}

impl StoreError {
    pub(crate) fn unexpected(command: &str, reply: impl fmt::Display) -> Self {
        StoreError::UnexpectedReply {
            command: command.to_string(),
            reply: reply.to_string(),
        }
    }
}

/// 存储操作结果
pub type StoreResult<T> = Result<T, StoreError>;
