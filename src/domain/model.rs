use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Untyped attribute bag as delivered by the upstream API.
pub type Attributes = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Municipality,
    Region,
}

impl LocationKind {
    pub fn as_filter_type(&self) -> &'static str {
        match self {
            Self::Municipality => "municipality",
            Self::Region => "region",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub id: String,
    pub kind: LocationKind,
    /// Canonical table name the input matched.
    pub name: String,
}

/// One `{type, value}` predicate in the search payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(rename = "type")]
    pub filter_type: String,
    pub value: String,
}

impl Filter {
    pub fn new(filter_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            filter_type: filter_type.into(),
            value: value.into(),
        }
    }

    pub fn freetext(term: &str) -> Self {
        Self::new("freetext", term)
    }

    pub fn location(location: &ResolvedLocation) -> Self {
        Self::new(location.kind.as_filter_type(), location.id.clone())
    }
}

impl std::str::FromStr for Filter {
    type Err = String;

    /// Parses `type=value`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok(Filter::new(key.trim(), value.trim()))
            }
            _ => Err(format!("expected type=value, got '{}'", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchCriteria {
    pub term: String,
    pub location: Option<ResolvedLocation>,
    pub extra_filters: Vec<Filter>,
    /// Upper bound on accumulated items; 0 means unlimited.
    pub max_items: usize,
    pub page_size: usize,
}

impl SearchCriteria {
    /// Freetext first, then location, then extras in the order supplied.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::with_capacity(2 + self.extra_filters.len());
        filters.push(Filter::freetext(&self.term));
        if let Some(location) = &self.location {
            filters.push(Filter::location(location));
        }
        filters.extend(self.extra_filters.iter().cloned());
        filters
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawItem {
    pub id: String,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl RawItem {
    /// Items without a string `id` cannot be deduplicated or enriched and yield `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(mut attributes) = value else {
            return None;
        };
        let id = match attributes.remove("id") {
            Some(Value::String(id)) if !id.is_empty() => id,
            _ => return None,
        };
        Some(Self { id, attributes })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedItem {
    pub id: String,
    pub detail: Attributes,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationResult {
    /// Completion order of the enrichment stage; not stable across runs.
    pub items: Vec<EnrichedItem>,
    pub total_raw_found: usize,
    pub total_enriched: usize,
    pub total_enrichment_failures: usize,
    /// Enriched items removed afterwards by an analysis-driven post filter.
    pub total_filtered_out: usize,
}

/// Structured reading of a natural-language job query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryAnalysis {
    pub job: String,
    pub municipality: String,
    pub work_extent: Option<String>,
    pub remote: bool,
    pub driving_license: Option<bool>,
    pub requires_experience: Option<bool>,
}

impl QueryAnalysis {
    pub fn extra_filters(&self) -> Vec<Filter> {
        let mut filters = Vec::new();
        if let Some(extent) = self.work_extent.as_deref().filter(|e| !e.is_empty()) {
            filters.push(Filter::new("workExtent", extent));
        }
        if self.remote {
            filters.push(Filter::new("remote", "true"));
        }
        if self.driving_license == Some(false) {
            filters.push(Filter::new("drivingLicenseRequired", "false"));
        }
        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filters_order() {
        let criteria = SearchCriteria {
            term: "snickare".to_string(),
            location: Some(ResolvedLocation {
                id: "PVZL_BQT_XtL".to_string(),
                kind: LocationKind::Municipality,
                name: "Göteborg".to_string(),
            }),
            extra_filters: vec![Filter::new("remote", "true"), Filter::new("workExtent", "full")],
            max_items: 10,
            page_size: 5,
        };

        let types: Vec<_> = criteria
            .filters()
            .into_iter()
            .map(|f| f.filter_type)
            .collect();
        assert_eq!(types, vec!["freetext", "municipality", "remote", "workExtent"]);
    }

    #[test]
    fn test_filter_serializes_as_type_value() {
        let value = serde_json::to_value(Filter::new("region", "zupA_8Nt_xcD")).unwrap();
        assert_eq!(value, json!({"type": "region", "value": "zupA_8Nt_xcD"}));
    }

    #[test]
    fn test_filter_from_str() {
        let filter: Filter = "remote=true".parse().unwrap();
        assert_eq!(filter, Filter::new("remote", "true"));
        assert!("remote".parse::<Filter>().is_err());
        assert!("=true".parse::<Filter>().is_err());
    }

    #[test]
    fn test_raw_item_requires_string_id() {
        let item = RawItem::from_value(json!({"id": "abc", "title": "Kock"})).unwrap();
        assert_eq!(item.id, "abc");
        assert_eq!(item.attributes["title"], "Kock");

        assert!(RawItem::from_value(json!({"title": "no id"})).is_none());
        assert!(RawItem::from_value(json!({"id": 42})).is_none());
        assert!(RawItem::from_value(json!({"id": ""})).is_none());
        assert!(RawItem::from_value(json!("abc")).is_none());
    }

    #[test]
    fn test_analysis_filters() {
        let analysis = QueryAnalysis {
            job: "lärare".to_string(),
            work_extent: Some("PART_TIME".to_string()),
            remote: true,
            driving_license: Some(false),
            ..Default::default()
        };
        assert_eq!(
            analysis.extra_filters(),
            vec![
                Filter::new("workExtent", "PART_TIME"),
                Filter::new("remote", "true"),
                Filter::new("drivingLicenseRequired", "false"),
            ]
        );
        assert!(QueryAnalysis::default().extra_filters().is_empty());
    }
}
