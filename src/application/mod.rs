// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含 HTTP 接口使用的数据传输对象
/// 将请求格式与领域模型分离
pub mod dto;
