// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 搜索服务（search_service）：并发查询两个上游服务并拼接归一化结果
/// - 摘要服务（digest_service）：将结果列表渲染为 HTML 并通过邮件发送
pub mod digest_service;
pub mod search_service;
