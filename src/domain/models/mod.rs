// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 结果记录（result_record）：两个上游服务归一化后的统一结构
/// - 排序规则（sort）：结果列表的排序方式
pub mod result_record;
pub mod sort;

pub use result_record::ResultRecord;
pub use sort::SortCriteria;
