// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 演示模块
///
/// 按数据结构分组调用客户端并收集结果
pub mod report;
pub mod scenarios;
