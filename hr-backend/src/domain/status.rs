// src/domain/status.rs
//
// 状態列はすべて DB 側の CHECK 制約と同じ値集合に閉じている

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 休暇申請の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum LeaveStatus {
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Approved")]
    Approved,
    #[sea_orm(string_value = "Rejected")]
    Rejected,
}

/// zimmet 在庫の承認状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum StockApprovalStatus {
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Approved")]
    Approved,
    #[sea_orm(string_value = "Rejected")]
    Rejected,
}

/// zimmet 貸与の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum CustodyStatus {
    #[sea_orm(string_value = "Assigned")]
    Assigned,
    #[sea_orm(string_value = "Returned")]
    Returned,
}

/// 出退勤イベントの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, Default)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ClockEventType {
    #[default]
    #[sea_orm(string_value = "Normal")]
    Normal,
    #[sea_orm(string_value = "Overtime")]
    Overtime,
    #[sea_orm(string_value = "Weekend")]
    Weekend,
}

/// 研修割当の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TrainingAssignmentStatus {
    #[sea_orm(string_value = "Assigned")]
    Assigned,
    #[sea_orm(string_value = "InProgress")]
    InProgress,
    #[sea_orm(string_value = "Completed")]
    Completed,
}

impl TrainingAssignmentStatus {
    /// 視聴率から状態を決める
    pub fn from_watched_percent(percent: i32) -> Self {
        match percent {
            p if p >= 100 => Self::Completed,
            p if p > 0 => Self::InProgress,
            _ => Self::Assigned,
        }
    }
}

/// 求人の状態 (1..=4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum JobPostingStatus {
    #[sea_orm(num_value = 1)]
    Draft,
    #[sea_orm(num_value = 2)]
    Published,
    #[sea_orm(num_value = 3)]
    Closed,
    #[sea_orm(num_value = 4)]
    Cancelled,
}

/// 候補者の状態 (1..=13)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum CandidateStatus {
    #[sea_orm(num_value = 1)]
    New,
    #[sea_orm(num_value = 2)]
    Screening,
    #[sea_orm(num_value = 3)]
    PhoneInterview,
    #[sea_orm(num_value = 4)]
    TechnicalInterview,
    #[sea_orm(num_value = 5)]
    HrInterview,
    #[sea_orm(num_value = 6)]
    ManagerInterview,
    #[sea_orm(num_value = 7)]
    Reference,
    #[sea_orm(num_value = 8)]
    OfferPending,
    #[sea_orm(num_value = 9)]
    OfferSent,
    #[sea_orm(num_value = 10)]
    Hired,
    #[sea_orm(num_value = 11)]
    Rejected,
    #[sea_orm(num_value = 12)]
    Withdrawn,
    #[sea_orm(num_value = 13)]
    Blacklisted,
}

/// 応募の状態 (1..=10)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum ApplicationStatus {
    #[sea_orm(num_value = 1)]
    Submitted,
    #[sea_orm(num_value = 2)]
    UnderReview,
    #[sea_orm(num_value = 3)]
    Shortlisted,
    #[sea_orm(num_value = 4)]
    InterviewScheduled,
    #[sea_orm(num_value = 5)]
    Interviewed,
    #[sea_orm(num_value = 6)]
    OfferExtended,
    #[sea_orm(num_value = 7)]
    Accepted,
    #[sea_orm(num_value = 8)]
    Rejected,
    #[sea_orm(num_value = 9)]
    Withdrawn,
    #[sea_orm(num_value = 10)]
    OnHold,
}

impl ApplicationStatus {
    /// 決定者と決定日時を記録する終端状態
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected | Self::Withdrawn)
    }
}

/// 面接の種別 (1..=5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum InterviewType {
    #[sea_orm(num_value = 1)]
    Phone,
    #[sea_orm(num_value = 2)]
    Video,
    #[sea_orm(num_value = 3)]
    InPerson,
    #[sea_orm(num_value = 4)]
    Technical,
    #[sea_orm(num_value = 5)]
    Panel,
}

/// CV の出所
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, Default)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum CvSource {
    #[default]
    #[sea_orm(string_value = "Auto")]
    Auto,
    #[sea_orm(string_value = "Uploaded")]
    Uploaded,
}
