//! Ordering of pod views by name, age or restart count

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::models::PodView;

/// Field a pod list can be sorted by
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PodSortMethod {
    Name,
    Age,
    Restarts,
}

/// Direction of a pod sort
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, AsRefStr, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PodSortDirection {
    #[default]
    Asc,
    Desc,
}

impl PodSortMethod {
    /// Parse a user-supplied `sort` query value
    pub fn parse(value: &str) -> Result<Self, AppError> {
        Self::from_str(value).map_err(|_| AppError::InvalidSortParameter(value.to_string()))
    }
}

impl PodSortDirection {
    /// Parse a user-supplied `order` query value
    pub fn parse(value: &str) -> Result<Self, AppError> {
        Self::from_str(value).map_err(|_| AppError::InvalidSortDirection(value.to_string()))
    }
}

/// Reorder `pods` in place.
///
/// `Name` and `Restarts` sort smaller-first when ascending. `Age` compares
/// creation timestamps with the opposite sense: ascending puts the most
/// recently created pod first, descending puts the oldest first.
pub fn sort_pods(pods: &mut [PodView], method: PodSortMethod, direction: PodSortDirection) {
    pods.sort_by(|a, b| compare(a, b, method, direction));
}

/// Same as [`sort_pods`] for a raw key; an unrecognised key leaves the
/// order untouched.
pub fn sort_pods_by_key(pods: &mut [PodView], key: &str, direction: PodSortDirection) {
    if let Ok(method) = PodSortMethod::from_str(key) {
        sort_pods(pods, method, direction);
    }
}

fn compare(a: &PodView, b: &PodView, method: PodSortMethod, direction: PodSortDirection) -> Ordering {
    let ascending = match method {
        PodSortMethod::Name => a.name.cmp(&b.name),
        PodSortMethod::Age => b.created_ts.cmp(&a.created_ts),
        PodSortMethod::Restarts => a.restarts.cmp(&b.restarts),
    };
    match direction {
        PodSortDirection::Asc => ascending,
        PodSortDirection::Desc => ascending.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 2, 15, 0, 0, 0).unwrap()
    }

    fn view(name: &str, created_offset_hours: i64, restarts: u64) -> PodView {
        PodView {
            name: name.to_string(),
            age: String::new(),
            created_ts: base() + Duration::hours(created_offset_hours),
            restarts,
        }
    }

    fn names(pods: &[PodView]) -> Vec<&str> {
        pods.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_parse_method() {
        assert_eq!(PodSortMethod::parse("name").unwrap(), PodSortMethod::Name);
        assert_eq!(PodSortMethod::parse("AGE").unwrap(), PodSortMethod::Age);
        assert_eq!(PodSortMethod::parse("Restarts").unwrap(), PodSortMethod::Restarts);
        assert!(matches!(
            PodSortMethod::parse("bogus"),
            Err(AppError::InvalidSortParameter(v)) if v == "bogus"
        ));
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!(PodSortDirection::parse("asc").unwrap(), PodSortDirection::Asc);
        assert_eq!(PodSortDirection::parse("DESC").unwrap(), PodSortDirection::Desc);
        assert_eq!(PodSortDirection::default(), PodSortDirection::Asc);
        assert!(matches!(
            PodSortDirection::parse("bogus"),
            Err(AppError::InvalidSortDirection(_))
        ));
    }

    #[test]
    fn test_display_matches_query_values() {
        assert_eq!(PodSortMethod::Restarts.to_string(), "restarts");
        assert_eq!(PodSortDirection::Desc.as_ref(), "desc");
    }

    #[test]
    fn test_sort_by_name() {
        let mut pods = vec![view("pod2", 0, 0), view("pod1", 0, 0)];
        sort_pods(&mut pods, PodSortMethod::Name, PodSortDirection::Asc);
        assert_eq!(names(&pods), ["pod1", "pod2"]);

        sort_pods(&mut pods, PodSortMethod::Name, PodSortDirection::Desc);
        assert_eq!(names(&pods), ["pod2", "pod1"]);
    }

    #[test]
    fn test_sort_by_restarts() {
        let mut pods = vec![view("a", 0, 5), view("b", 0, 1), view("c", 0, 3)];
        sort_pods(&mut pods, PodSortMethod::Restarts, PodSortDirection::Asc);
        let restarts: Vec<u64> = pods.iter().map(|p| p.restarts).collect();
        assert_eq!(restarts, [1, 3, 5]);

        sort_pods(&mut pods, PodSortMethod::Restarts, PodSortDirection::Desc);
        let restarts: Vec<u64> = pods.iter().map(|p| p.restarts).collect();
        assert_eq!(restarts, [5, 3, 1]);
    }

    #[test]
    fn test_sort_by_age_ascending_puts_newest_first() {
        let mut pods = vec![view("old", 0, 0), view("new", 10, 0), view("mid", 5, 0)];
        sort_pods(&mut pods, PodSortMethod::Age, PodSortDirection::Asc);
        assert_eq!(names(&pods), ["new", "mid", "old"]);
    }

    #[test]
    fn test_sort_by_age_descending_puts_oldest_first() {
        let mut pods = vec![view("mid", 5, 0), view("new", 10, 0), view("old", 0, 0)];
        sort_pods(&mut pods, PodSortMethod::Age, PodSortDirection::Desc);
        assert_eq!(names(&pods), ["old", "mid", "new"]);
    }

    #[test]
    fn test_sort_by_age_ignores_formatted_age() {
        let mut newer = view("newer", 10, 0);
        newer.age = "9 days".into();
        let mut older = view("older", 0, 0);
        older.age = "1.00 hours".into();

        let mut pods = vec![older, newer];
        sort_pods(&mut pods, PodSortMethod::Age, PodSortDirection::Asc);
        assert_eq!(names(&pods), ["newer", "older"]);
    }

    #[test]
    fn test_unknown_key_is_noop() {
        let mut pods = vec![view("pod2", 0, 9), view("pod3", 0, 1), view("pod1", 0, 4)];
        let before = pods.clone();

        sort_pods_by_key(&mut pods, "bogus", PodSortDirection::Asc);
        assert_eq!(pods, before);

        sort_pods_by_key(&mut pods, "name", PodSortDirection::Asc);
        assert_eq!(names(&pods), ["pod1", "pod2", "pod3"]);
    }

    #[test]
    fn test_sort_keeps_all_items() {
        let mut pods = vec![view("b", 1, 2), view("a", 2, 2), view("c", 0, 2)];
        sort_pods(&mut pods, PodSortMethod::Restarts, PodSortDirection::Desc);
        assert_eq!(pods.len(), 3);
        let mut sorted = names(&pods);
        sorted.sort();
        assert_eq!(sorted, ["a", "b", "c"]);
    }
}
