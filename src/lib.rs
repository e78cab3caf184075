// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含请求/响应数据传输对象
pub mod application;

/// 客户端模块
///
/// 提供 HTTP API 客户端以及搜索会话的视图模型
pub mod client;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体、搜索源接口和领域服务
pub mod domain;

/// 基础设施模块
///
/// 提供外部服务集成，如上游搜索 API 与 SMTP 邮件发送
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由、处理器和错误映射
pub mod presentation;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
