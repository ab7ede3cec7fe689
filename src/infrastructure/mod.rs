// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 负责与外部Redis的交互。连接管理、协议编码和数据结构实现
/// 都由客户端库和服务器完成，这里只做命令构建与响应解码。
///
/// 包含的子模块：
/// - 缓存（cache）：Redis模板及各数据结构的操作
pub mod cache;
