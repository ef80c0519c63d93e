use folio_generator::{GenerationRequest, LocaleRegistry};
use folio_http::error::AppError;
use folio_kernel::settings::GenerationSettings;
use serde::Deserialize;
use thiserror::Error;

/// Query string accepted by the list and export endpoints.
///
/// Missing parameters fall back to the catalogue defaults
/// (seed 42, 5 likes, 3 reviews, first 20 records).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookQuery {
    pub locale: Option<String>,
    pub seed: u64,
    pub average_likes: f64,
    pub average_reviews: f64,
    pub start: u64,
    /// Signed so that `count=-1` is a range violation rather than a parse error.
    pub count: i64,
}

impl Default for BookQuery {
    fn default() -> Self {
        let defaults = GenerationRequest::default();
        Self {
            locale: None,
            seed: defaults.seed,
            average_likes: defaults.average_likes,
            average_reviews: defaults.average_reviews,
            start: defaults.start,
            count: i64::from(defaults.count),
        }
    }
}

/// A single rejected query parameter.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field}: {reason}")]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

impl FieldError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    fn detail(&self) -> serde_json::Value {
        serde_json::json!({
            "field": self.field,
            "error": "out_of_range",
            "message": self.reason,
        })
    }
}

/// Collects every field error into one 422 response.
pub fn validation_error(errors: Vec<FieldError>) -> AppError {
    let message = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    AppError::validation(errors.iter().map(FieldError::detail).collect(), message)
}

impl BookQuery {
    /// Range-check the query against the configured limits.
    pub fn validate(self, limits: &GenerationSettings) -> Result<GenerationRequest, Vec<FieldError>> {
        let mut errors = Vec::new();

        let max_count = i64::from(limits.max_count);
        if !(1..=max_count).contains(&self.count) {
            errors.push(FieldError::new(
                "count",
                format!("must be between 1 and {max_count}"),
            ));
        }

        if !self.average_likes.is_finite()
            || !(0.0..=limits.max_average_likes).contains(&self.average_likes)
        {
            errors.push(FieldError::new(
                "averageLikes",
                format!("must be between 0 and {}", limits.max_average_likes),
            ));
        }

        if !self.average_reviews.is_finite()
            || !(0.0..=limits.max_average_reviews).contains(&self.average_reviews)
        {
            errors.push(FieldError::new(
                "averageReviews",
                format!("must be between 0 and {}", limits.max_average_reviews),
            ));
        }

        // Only meaningful once count is known to be in range.
        let count = u32::try_from(self.count).ok().filter(|_| errors.is_empty());
        if let Some(count) = count {
            if self.start.checked_add(u64::from(count)).is_none() {
                errors.push(FieldError::new("start", "start + count exceeds the index space"));
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let locale = self
            .locale
            .map(|locale| locale.trim().to_string())
            .filter(|locale| !locale.is_empty())
            .unwrap_or_else(|| limits.default_locale.clone());

        if !LocaleRegistry::builtin().contains(&locale) {
            tracing::debug!(
                locale = %locale,
                fallback = LocaleRegistry::builtin().fallback_tag(),
                "unknown locale requested; using fallback templates"
            );
        }

        Ok(GenerationRequest {
            locale,
            seed: self.seed,
            average_likes: self.average_likes,
            average_reviews: self.average_reviews,
            start: self.start,
            count: count.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> GenerationSettings {
        GenerationSettings::default()
    }

    #[test]
    fn defaults_match_catalogue_defaults() {
        let request = BookQuery::default().validate(&limits()).unwrap();
        assert_eq!(request, GenerationRequest::default());
    }

    #[test]
    fn count_bounds_are_inclusive() {
        for count in [1, 50] {
            let query = BookQuery {
                count,
                ..BookQuery::default()
            };
            assert_eq!(query.validate(&limits()).unwrap().count as i64, count);
        }

        for count in [0, -1, 51] {
            let query = BookQuery {
                count,
                ..BookQuery::default()
            };
            let errors = query.validate(&limits()).unwrap_err();
            assert_eq!(errors[0].field, "count");
        }
    }

    #[test]
    fn rates_must_be_finite_and_in_range() {
        let query = BookQuery {
            average_likes: 10.5,
            average_reviews: f64::NAN,
            ..BookQuery::default()
        };
        let fields: Vec<_> = query
            .validate(&limits())
            .unwrap_err()
            .into_iter()
            .map(|error| error.field)
            .collect();
        assert_eq!(fields, vec!["averageLikes", "averageReviews"]);

        let query = BookQuery {
            average_reviews: -0.1,
            ..BookQuery::default()
        };
        assert!(query.validate(&limits()).is_err());

        let query = BookQuery {
            average_likes: 0.0,
            average_reviews: 100.0,
            ..BookQuery::default()
        };
        assert!(query.validate(&limits()).is_ok());
    }

    #[test]
    fn start_plus_count_must_not_overflow() {
        let query = BookQuery {
            start: u64::MAX - 5,
            count: 10,
            ..BookQuery::default()
        };
        let errors = query.validate(&limits()).unwrap_err();
        assert_eq!(errors[0].field, "start");

        let query = BookQuery {
            start: u64::MAX - 10,
            count: 10,
            ..BookQuery::default()
        };
        assert!(query.validate(&limits()).is_ok());
    }

    #[test]
    fn blank_locale_uses_configured_default() {
        let settings = GenerationSettings {
            default_locale: "de-DE".to_string(),
            ..GenerationSettings::default()
        };
        let query = BookQuery {
            locale: Some("  ".to_string()),
            ..BookQuery::default()
        };
        assert_eq!(query.validate(&settings).unwrap().locale, "de-DE");
    }

    #[test]
    fn unknown_locale_passes_through() {
        let query = BookQuery {
            locale: Some("fr-FR".to_string()),
            ..BookQuery::default()
        };
        assert_eq!(query.validate(&limits()).unwrap().locale, "fr-FR");
    }

    #[test]
    fn field_errors_become_validation_details() {
        let error = validation_error(vec![FieldError::new("count", "must be between 1 and 50")]);
        match error {
            AppError::Validation { details, message, .. } => {
                assert_eq!(details[0]["field"], "count");
                assert_eq!(message, "count: must be between 1 and 50");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
