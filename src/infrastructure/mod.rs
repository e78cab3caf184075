// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统与外部服务交互的技术实现：
/// - 邮件（mail）：基于 SMTP 的邮件发送实现
/// - 搜索（search）：上游搜索 API 客户端
///
/// 基础设施层依赖于领域层的抽象接口（`SearchSource`、`Mailer`），
/// 确保领域层保持纯粹的业务逻辑。
pub mod mail;
pub mod search;
