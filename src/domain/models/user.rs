// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::utils::errors::StoreResult;

/// 用户实体
///
/// 演示对象存储用的载荷，所有字段均可为空，没有任何校验。
/// 序列化时会省略为空的字段。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// 用户ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    /// 用户名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// 密码
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl User {
    /// 创建用户构建器
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    /// 序列化为JSON文本
    pub fn to_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// 从JSON文本反序列化
    pub fn from_json(text: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// 用户构建器
#[derive(Debug, Default)]
pub struct UserBuilder {
    id: Option<i32>,
    username: Option<String>,
    password: Option<String>,
}

impl UserBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn build(self) -> User {
        User {
            id: self.id,
            username: self.username,
            password: self.password,
        }
    }
}
