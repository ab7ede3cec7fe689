// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod list_ops_test;
pub mod template_test;
pub mod zset_ops_test;
