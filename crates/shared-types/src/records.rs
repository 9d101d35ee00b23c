use serde::{Deserialize, Serialize};

use crate::models::Specialization;

/// Scheduling state of an appointment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
    InProgress,
}

impl AppointmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::InProgress => "in progress",
        }
    }
}

/// An upcoming consultation shown on the patient dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub doctor: String,
    pub specialization: Specialization,
    pub date: String,
    pub time: String,
    pub status: AppointmentStatus,
}

/// Review state of an uploaded scan or lab report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Reviewed,
    PendingReview,
}

impl ReviewStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReviewStatus::Reviewed => "reviewed",
            ReviewStatus::PendingReview => "pending review",
        }
    }
}

/// A scan or lab result listed on the patient dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanReport {
    pub kind: String,
    pub date: String,
    pub status: ReviewStatus,
    pub findings: String,
}

/// A vital-sign reading shown in the patient metrics grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthMetric {
    pub label: String,
    pub value: String,
}

/// A booked slot on the doctor's daily schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoctorAppointment {
    pub patient: String,
    pub time: String,
    pub kind: String,
    pub status: AppointmentStatus,
}

/// Urgency of a review or inquiry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// A scan report awaiting the doctor's review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanReview {
    pub patient: String,
    pub scan_type: String,
    pub priority: Priority,
    pub submitted: String,
}

/// Live state of an entry in the front-desk appointment queue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueueStatus {
    Waiting,
    InProgress,
    Delayed,
}

impl QueueStatus {
    pub fn label(&self) -> &'static str {
        match self {
            QueueStatus::Waiting => "waiting",
            QueueStatus::InProgress => "in progress",
            QueueStatus::Delayed => "delayed",
        }
    }
}

/// A patient currently in the front-desk appointment queue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueueEntry {
    pub patient: String,
    pub doctor: String,
    pub scheduled: String,
    pub estimated: String,
    pub status: QueueStatus,
}

/// A support request received by the front desk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Inquiry {
    pub patient: String,
    pub topic: String,
    pub urgency: Priority,
    pub received: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_replace_underscores() {
        assert_eq!(AppointmentStatus::InProgress.label(), "in progress");
        assert_eq!(ReviewStatus::PendingReview.label(), "pending review");
        assert_eq!(QueueStatus::InProgress.label(), "in progress");
    }

    #[test]
    fn appointment_serialization_roundtrip() {
        let appointment = Appointment {
            doctor: "Dr. Sarah Johnson".into(),
            specialization: Specialization::Cardiology,
            date: "2024-01-25".into(),
            time: "10:30 AM".into(),
            status: AppointmentStatus::Confirmed,
        };

        let json = serde_json::to_string(&appointment).unwrap();
        let parsed: Appointment = serde_json::from_str(&json).unwrap();
        assert_eq!(appointment, parsed);
    }

    #[test]
    fn queue_status_uses_snake_case_on_the_wire() {
        let json = serde_json::to_string(&QueueStatus::InProgress).unwrap();
        assert_eq!(json, r#""in_progress""#);
    }
}
