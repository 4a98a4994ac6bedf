// src/api/dto/recruitment_dto.rs

use crate::domain::status::{
    ApplicationStatus, CandidateStatus, CvSource, InterviewType, JobPostingStatus,
};
use crate::domain::{
    application_model, candidate_language_model, candidate_model, interview_model,
    job_posting_model, offer_model,
};
use crate::types::PaginationQuery;
use crate::utils::validation;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// --- 求人 ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobPostingRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    pub department_id: i32,

    pub position_id: Option<i32>,

    pub closing_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateJobPostingRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,

    pub position_id: Option<i32>,

    pub status: Option<JobPostingStatus>,

    pub closing_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPostingQuery {
    pub status: Option<JobPostingStatus>,
    pub department_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPostingResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub department_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_id: Option<i32>,
    pub status: JobPostingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<job_posting_model::Model> for JobPostingResponse {
    fn from(m: job_posting_model::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            department_id: m.department_id,
            position_id: m.position_id,
            status: m.status,
            published_at: m.published_at,
            closing_date: m.closing_date,
            created_by_id: m.created_by_id,
            created_at: m.created_at,
        }
    }
}

// --- 候補者 ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CandidateLanguageRequest {
    #[validate(length(min = 1, max = 50, message = "Language must be between 1 and 50 characters"))]
    pub language: String,

    #[validate(range(min = 1, max = 5, message = "Reading level must be between 1 and 5"))]
    pub reading: i32,

    #[validate(range(min = 1, max = 5, message = "Writing level must be between 1 and 5"))]
    pub writing: i32,

    #[validate(range(min = 1, max = 5, message = "Speaking level must be between 1 and 5"))]
    pub speaking: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCandidateRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,

    #[validate(custom(function = validation::validate_national_id))]
    pub national_id: Option<String>,

    pub city_id: Option<i32>,

    #[serde(default)]
    pub cv_source: CvSource,

    #[validate(length(max = 500, message = "CV path must be at most 500 characters"))]
    pub cv_path: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub languages: Vec<CandidateLanguageRequest>,
}

/// `languages` を渡した場合は全置換
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCandidateRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"))]
    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,

    pub city_id: Option<i32>,

    pub status: Option<CandidateStatus>,

    pub cv_source: Option<CvSource>,

    #[validate(length(max = 500, message = "CV path must be at most 500 characters"))]
    pub cv_path: Option<String>,

    #[validate(nested)]
    pub languages: Option<Vec<CandidateLanguageRequest>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateListQuery {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<CandidateStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateLanguageResponse {
    pub language: String,
    pub reading: i32,
    pub writing: i32,
    pub speaking: i32,
}

impl From<candidate_language_model::Model> for CandidateLanguageResponse {
    fn from(m: candidate_language_model::Model) -> Self {
        Self {
            language: m.language,
            reading: m.reading,
            writing: m.writing,
            speaking: m.speaking,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_id: Option<i32>,
    pub status: CandidateStatus,
    pub cv_source: CvSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv_path: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<CandidateLanguageResponse>,
    pub created_at: DateTime<Utc>,
}

impl CandidateResponse {
    pub fn with_languages(
        candidate: candidate_model::Model,
        languages: Vec<candidate_language_model::Model>,
    ) -> Self {
        let mut response = Self::from(candidate);
        response.languages = languages.into_iter().map(Into::into).collect();
        response
    }
}

impl From<candidate_model::Model> for CandidateResponse {
    fn from(m: candidate_model::Model) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            phone: m.phone,
            national_id: m.national_id,
            city_id: m.city_id,
            status: m.status,
            cv_source: m.cv_source,
            cv_path: m.cv_path,
            languages: Vec::new(),
            created_at: m.created_at,
        }
    }
}

// --- 応募 ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApplyRequest {
    pub candidate_id: i32,

    #[validate(length(max = 5000, message = "Cover letter must be at most 5000 characters"))]
    pub cover_letter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeApplicationStatusRequest {
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationQuery {
    pub status: Option<ApplicationStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationResponse {
    pub id: i32,
    pub job_posting_id: i32,
    pub candidate_id: i32,
    pub status: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decided_by_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<application_model::Model> for ApplicationResponse {
    fn from(m: application_model::Model) -> Self {
        Self {
            id: m.id,
            job_posting_id: m.job_posting_id,
            candidate_id: m.candidate_id,
            status: m.status,
            cover_letter: m.cover_letter,
            decided_by_id: m.decided_by_id,
            decided_at: m.decided_at,
            created_at: m.created_at,
        }
    }
}

// --- 面接 ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScheduleInterviewRequest {
    pub interviewer_id: i32,

    pub interview_type: InterviewType,

    pub scheduled_at: DateTime<Utc>,

    #[validate(range(min = 5, max = 480, message = "Duration must be between 5 and 480 minutes"))]
    pub duration_minutes: i32,

    #[validate(length(max = 200, message = "Location must be at most 200 characters"))]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InterviewFeedbackRequest {
    #[validate(range(min = 1, max = 10, message = "Score must be between 1 and 10"))]
    pub score: i32,

    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewResponse {
    pub id: i32,
    pub application_id: i32,
    pub interviewer_id: i32,
    pub interview_type: InterviewType,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<interview_model::Model> for InterviewResponse {
    fn from(m: interview_model::Model) -> Self {
        Self {
            id: m.id,
            application_id: m.application_id,
            interviewer_id: m.interviewer_id,
            interview_type: m.interview_type,
            scheduled_at: m.scheduled_at,
            duration_minutes: m.duration_minutes,
            location: m.location,
            score: m.score,
            notes: m.notes,
        }
    }
}

// --- オファー ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOfferRequest {
    #[validate(range(min = 1, message = "Salary must be positive"))]
    pub salary: i64,

    pub start_date: NaiveDate,

    pub expires_at: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferDecisionRequest {
    pub accept: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferResponse {
    pub id: i32,
    pub application_id: i32,
    pub salary: i64,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_accepted: Option<bool>,
    pub decided_by_id: i32,
    pub created_at: DateTime<Utc>,
}

impl From<offer_model::Model> for OfferResponse {
    fn from(m: offer_model::Model) -> Self {
        Self {
            id: m.id,
            application_id: m.application_id,
            salary: m.salary,
            start_date: m.start_date,
            expires_at: m.expires_at,
            is_accepted: m.is_accepted,
            decided_by_id: m.decided_by_id,
            created_at: m.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate_request() -> CreateCandidateRequest {
        CreateCandidateRequest {
            first_name: "Mehmet".to_string(),
            last_name: "Demir".to_string(),
            email: "mehmet.demir@example.com".to_string(),
            phone: None,
            national_id: None,
            city_id: None,
            cv_source: CvSource::Auto,
            cv_path: None,
            languages: vec![CandidateLanguageRequest {
                language: "English".to_string(),
                reading: 4,
                writing: 3,
                speaking: 3,
            }],
        }
    }

    #[test]
    fn test_candidate_language_levels_are_validated() {
        assert!(candidate_request().validate().is_ok());

        let mut request = candidate_request();
        request.languages[0].speaking = 6;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_candidate_defaults() {
        let request: CreateCandidateRequest = serde_json::from_str(
            r#"{"first_name":"A","last_name":"B","email":"a@example.com"}"#,
        )
        .unwrap();
        assert_eq!(request.cv_source, CvSource::Auto);
        assert!(request.languages.is_empty());
    }

    #[test]
    fn test_offer_salary_must_be_positive() {
        let request = CreateOfferRequest {
            salary: 0,
            start_date: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
            expires_at: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_interview_score_range() {
        assert!(InterviewFeedbackRequest { score: 10, notes: None }.validate().is_ok());
        assert!(InterviewFeedbackRequest { score: 0, notes: None }.validate().is_err());
    }
}
