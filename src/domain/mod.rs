// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：统一的搜索结果记录与排序规则
/// - 搜索源接口（search）：上游搜索服务的抽象
/// - 服务（services）：结果聚合与摘要邮件发送
///
/// 领域层不依赖于任何外部实现，上游 API 与邮件传输
/// 都通过 trait 注入。
pub mod models;
pub mod search;
pub mod services;
