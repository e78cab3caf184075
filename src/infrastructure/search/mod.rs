// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索服务模块
///
/// 提供上游搜索 API 的客户端实现：
/// Stack Overflow（问答）与 Reddit（讨论），以及构建它们的工厂
pub mod factory;
pub mod reddit;
pub mod stackoverflow;

pub use factory::SearchSourceFactory;
