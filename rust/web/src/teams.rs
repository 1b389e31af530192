use crate::convocations::{ConvocationSource, SourceError};
use crate::errors::IntoErrorResponse;
use chrono::{DateTime, Utc};
use convoca_engine::seed::hash_seed;
use convoca_engine::split::{split_teams, TeamSplit};
use serde::Serialize;
use thiserror::Error;
use warp::http::StatusCode;

/// Body of `GET /api/convocations/{id}/teams`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamsResponse {
    pub convocation_id: String,
    pub team_name: String,
    pub scheduled_at: DateTime<Utc>,
    pub teams: TeamSplit,
}

#[derive(Debug, Error)]
pub enum TeamsError {
    #[error("Convocation not found: {0}")]
    NotFound(String),
    #[error("Method {0} not allowed; use GET")]
    MethodNotAllowed(String),
    #[error("No convocation source configured")]
    ConfigurationMissing,
    #[error("Convocation source unavailable: {0}")]
    Unavailable(#[from] SourceError),
}

impl IntoErrorResponse for TeamsError {
    fn status_code(&self) -> StatusCode {
        match self {
            TeamsError::NotFound(_) => StatusCode::NOT_FOUND,
            TeamsError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            TeamsError::ConfigurationMissing => StatusCode::INTERNAL_SERVER_ERROR,
            TeamsError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            TeamsError::NotFound(_) => "convocation_not_found",
            TeamsError::MethodNotAllowed(_) => "method_not_allowed",
            TeamsError::ConfigurationMissing => "configuration_missing",
            TeamsError::Unavailable(_) => "source_unavailable",
        }
    }

    fn error_message(&self) -> String {
        self.to_string()
    }

    fn error_details(&self) -> Option<serde_json::Value> {
        match self {
            TeamsError::NotFound(id) => Some(serde_json::json!({ "convocation_id": id })),
            _ => None,
        }
    }

    fn allowed_methods(&self) -> Option<&'static str> {
        match self {
            TeamsError::MethodNotAllowed(_) => Some("GET"),
            _ => None,
        }
    }
}

/// Looks up the convocation and splits its confirmed roster, seeded by the
/// convocation id.
pub fn resolve_teams(
    source: Option<&dyn ConvocationSource>,
    convocation_id: &str,
) -> Result<TeamsResponse, TeamsError> {
    let source = source.ok_or(TeamsError::ConfigurationMissing)?;
    let convocation = source
        .convocation(convocation_id)?
        .ok_or_else(|| TeamsError::NotFound(convocation_id.to_string()))?;

    let teams = split_teams(&convocation.roster, &convocation.id);

    tracing::info!(
        convocation_id = %convocation.id,
        players = convocation.roster.len(),
        seed_hash = hash_seed(&convocation.id),
        shirts = teams.shirts.len(),
        vests = teams.vests.len(),
        "teams split"
    );

    Ok(TeamsResponse {
        convocation_id: convocation.id,
        team_name: convocation.team_name,
        scheduled_at: convocation.scheduled_at,
        teams,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convocations::{Convocation, InMemoryConvocations};
    use chrono::TimeZone;
    use convoca_engine::roster::Player;

    fn store() -> InMemoryConvocations {
        let store = InMemoryConvocations::new();
        store
            .insert(Convocation {
                id: "conv-123".into(),
                team_name: "Quinta FC".into(),
                scheduled_at: Utc.with_ymd_and_hms(2025, 3, 6, 21, 0, 0).unwrap(),
                roster: ["a", "b", "c", "d", "e"]
                    .iter()
                    .map(|id| Player::new(*id, id.to_uppercase()))
                    .collect(),
            })
            .unwrap();
        store
    }

    #[test]
    fn resolves_and_splits_with_convocation_seed() {
        let store = store();
        let response = resolve_teams(Some(&store), "conv-123").unwrap();
        let shirts: Vec<_> = response.teams.shirts.iter().map(|p| p.id.as_str()).collect();
        let vests: Vec<_> = response.teams.vests.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(shirts, vec!["e", "b", "d"]);
        assert_eq!(vests, vec!["a", "c"]);
        assert_eq!(response.team_name, "Quinta FC");
    }

    #[test]
    fn unknown_convocation_is_not_found() {
        let store = store();
        let err = resolve_teams(Some(&store), "conv-999").unwrap_err();
        assert!(matches!(err, TeamsError::NotFound(ref id) if id == "conv-999"));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn missing_source_is_a_configuration_error() {
        let err = resolve_teams(None, "conv-123").unwrap_err();
        assert!(matches!(err, TeamsError::ConfigurationMissing));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[derive(Debug)]
    struct PoisonedSource;

    impl ConvocationSource for PoisonedSource {
        fn convocation(&self, _id: &str) -> Result<Option<Convocation>, SourceError> {
            Err(SourceError::StoragePoisoned)
        }
    }

    #[test]
    fn failing_source_is_unavailable() {
        let err = resolve_teams(Some(&PoisonedSource), "conv-123").unwrap_err();
        assert!(matches!(
            err,
            TeamsError::Unavailable(SourceError::StoragePoisoned)
        ));
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.error_code(), "source_unavailable");
    }

    #[test]
    fn response_serializes_camel_case_with_coletes() {
        let store = store();
        let response = resolve_teams(Some(&store), "conv-123").unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["convocationId"], "conv-123");
        assert_eq!(json["teamName"], "Quinta FC");
        assert_eq!(json["scheduledAt"], "2025-03-06T21:00:00Z");
        assert_eq!(json["teams"]["shirts"].as_array().unwrap().len(), 3);
        assert_eq!(json["teams"]["coletes"].as_array().unwrap().len(), 2);
    }
}
