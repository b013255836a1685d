//! Pods API - listing, sorting and counting the pods of the served namespace

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::{IntoParams, ToSchema};

use crate::api::AppState;
use crate::error::AppResult;
use crate::models::{sort_pods, PodSortDirection, PodSortMethod, PodView};

/// Query parameters for `/pods`
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PodListQuery {
    /// `name`, `age` or `restarts`; no sorting when omitted
    pub sort: Option<String>,
    /// `asc` (default) or `desc`; ignored without `sort`
    pub order: Option<String>,
}

impl PodListQuery {
    /// Build from raw query pairs. Only the first value of a repeated key
    /// counts; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "sort" => &mut query.sort,
                "order" => &mut query.order,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// The requested ordering, or `None` when the pods keep the source order
    pub fn ordering(&self) -> AppResult<Option<(PodSortMethod, PodSortDirection)>> {
        let Some(sort) = non_empty(&self.sort) else {
            return Ok(None);
        };
        let method = PodSortMethod::parse(sort)?;
        let direction = match non_empty(&self.order) {
            Some(order) => PodSortDirection::parse(order)?,
            None => PodSortDirection::default(),
        };
        Ok(Some((method, direction)))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Failure body of `/npods`
#[derive(Debug, Serialize, ToSchema)]
pub struct CountErrorResponse {
    pub error: String,
}

/// List the pods of the served namespace
#[utoipa::path(
    get,
    path = "/pods",
    tag = "pods",
    params(PodListQuery),
    responses(
        (status = 200, description = "Pods in the namespace", body = Vec<PodView>),
        (status = 400, description = "Invalid sort option or direction", body = crate::error::ErrorMessage),
        (status = 500, description = "Pod source unavailable", body = crate::error::ErrorMessage)
    )
)]
pub async fn list_pods(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<Json<Vec<PodView>>> {
    let ordering = PodListQuery::from_pairs(params).ordering()?;
    let mut pods = state.pods.list_views(state.namespace()).await?;

    if let Some((method, direction)) = ordering {
        sort_pods(&mut pods, method, direction);
    }

    Ok(Json(pods))
}

/// Number of pods in the served namespace, as a bare integer
#[utoipa::path(
    get,
    path = "/npods",
    tag = "pods",
    responses(
        (status = 200, description = "Pod count", body = String, content_type = "text/plain"),
        (status = 500, description = "Pod source unavailable", body = CountErrorResponse)
    )
)]
pub async fn count_pods(State(state): State<AppState>) -> Response {
    match state.pods.count(state.namespace()).await {
        Ok(count) => count.to_string().into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(CountErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn query(sort: Option<&str>, order: Option<&str>) -> PodListQuery {
        PodListQuery {
            sort: sort.map(String::from),
            order: order.map(String::from),
        }
    }

    #[test]
    fn test_no_sort_ignores_order() {
        assert_eq!(query(None, None).ordering().unwrap(), None);
        assert_eq!(query(None, Some("bogus")).ordering().unwrap(), None);
        assert_eq!(query(Some(""), Some("desc")).ordering().unwrap(), None);
    }

    #[test]
    fn test_order_defaults_to_ascending() {
        assert_eq!(
            query(Some("age"), None).ordering().unwrap(),
            Some((PodSortMethod::Age, PodSortDirection::Asc))
        );
        assert_eq!(
            query(Some("Restarts"), Some("DESC")).ordering().unwrap(),
            Some((PodSortMethod::Restarts, PodSortDirection::Desc))
        );
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_pairs_keeps_first_value() {
        let query = PodListQuery::from_pairs(pairs(&[
            ("sort", "name"),
            ("sort", "age"),
            ("limit", "5"),
            ("order", "desc"),
            ("order", "bogus"),
        ]));
        assert_eq!(query.sort.as_deref(), Some("name"));
        assert_eq!(query.order.as_deref(), Some("desc"));
        assert_eq!(
            query.ordering().unwrap(),
            Some((PodSortMethod::Name, PodSortDirection::Desc))
        );
    }

    #[test]
    fn test_from_pairs_keys_are_case_sensitive() {
        let query = PodListQuery::from_pairs(pairs(&[("SORT", "name")]));
        assert_eq!(query.sort, None);
        assert_eq!(query.ordering().unwrap(), None);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            query(Some("bogus"), None).ordering(),
            Err(AppError::InvalidSortParameter(_))
        ));
        assert!(matches!(
            query(Some("name"), Some("bogus")).ordering(),
            Err(AppError::InvalidSortDirection(_))
        ));
    }
}
