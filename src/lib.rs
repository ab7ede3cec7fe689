// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 演示模块
///
/// 按数据结构分组的演示场景
pub mod demo;

/// 领域模块
///
/// 包含演示用的实体
pub mod domain;

/// 基础设施模块
///
/// 提供Redis客户端的封装
pub mod infrastructure;

/// 工具模块
///
/// 提供错误类型和日志等通用功能
pub mod utils;
