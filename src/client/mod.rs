// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 客户端模块
///
/// - API 客户端（api_client）：调用 `/search` 与 `/send-email`
/// - 搜索会话（session）：持有查询、结果、排序与邮件状态的视图模型
pub mod api_client;
pub mod session;

pub use api_client::{ApiClient, ApiClientError};
pub use session::{SearchSession, SessionError, SessionState};
