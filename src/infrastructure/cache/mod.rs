// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 缓存模块
///
/// 对外部Redis客户端的薄封装，按数据结构分组提供操作
pub mod executor;
pub mod expiry;
pub mod hash_ops;
pub mod list_ops;
pub mod set_ops;
pub mod template;
pub mod value_ops;
pub mod zset_ops;
