// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json, Query};
use std::sync::Arc;
use validator::Validate;

use crate::{
    application::dto::search_request::SearchQueryDto,
    domain::{
        models::{result_record::ResultRecord, sort::SortCriteria},
        services::search_service::SearchService,
    },
    presentation::errors::AppError,
};

/// 处理搜索请求
///
/// # 参数
///
/// * `service` - 搜索聚合服务
/// * `params` - 查询参数（`query`，可选 `sort`）
///
/// # 返回值
///
/// 成功时返回问答结果在前、讨论结果在后的结果记录数组
///
/// # 错误
///
/// - 查询为空或排序参数无效时返回 400
/// - 任一上游请求失败时返回 500 与固定错误消息
pub async fn search(
    Extension(service): Extension<Arc<SearchService>>,
    Query(params): Query<SearchQueryDto>,
) -> Result<Json<Vec<ResultRecord>>, AppError> {
    params.validate()?;

    let sort = match params.sort.as_deref() {
        Some(raw) => raw
            .parse::<SortCriteria>()
            .map_err(|e| AppError::BadRequest(e.to_string()))?,
        None => SortCriteria::default(),
    };

    let results = service.search(&params.query, sort).await?;
    Ok(Json(results))
}
