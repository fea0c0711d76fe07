//! Demo dataset loaded by `manpower seed` and by fresh databases.

use crate::domain::{
    Candidate, Decision, HrAction, Interview, InterviewStatus, InterviewType, JobOffer,
    JobOfferStatus, NewNotification, NotificationKind, Stage,
};
use chrono::{NaiveDate, TimeZone, Utc};
use std::sync::Arc;

struct Row {
    name: &'static str,
    position: &'static str,
    job_ref: &'static str,
    nationality: &'static str,
    age: u32,
    score: u8,
    experience: &'static str,
    degree: &'static str,
    skills: &'static [&'static str],
    hr_action: HrAction,
    stage: Stage,
}

const ROWS: &[Row] = &[
    Row {
        name: "Amina Diallo",
        position: "Education Program Officer",
        job_ref: "ICESCO-2024-001",
        nationality: "Senegal",
        age: 31,
        score: 92,
        experience: "7 years",
        degree: "Master",
        skills: &["Curriculum design", "Monitoring & evaluation", "French"],
        hr_action: HrAction::Shortlist,
        stage: Stage::Interview,
    },
    Row {
        name: "Youssef El Amrani",
        position: "Education Program Officer",
        job_ref: "ICESCO-2024-001",
        nationality: "Morocco",
        age: 28,
        score: 78,
        experience: "4 years",
        degree: "Master",
        skills: &["Project management", "Arabic", "English"],
        hr_action: HrAction::UnderReview,
        stage: Stage::UnderReview,
    },
    Row {
        name: "Fatima Rahman",
        position: "Data Analyst",
        job_ref: "ICESCO-2024-002",
        nationality: "Bangladesh",
        age: 26,
        score: 88,
        experience: "3 years",
        degree: "Bachelor",
        skills: &["SQL", "Python", "Power BI"],
        hr_action: HrAction::Shortlist,
        stage: Stage::Offer,
    },
    Row {
        name: "Omar Haddad",
        position: "Data Analyst",
        job_ref: "ICESCO-2024-002",
        nationality: "Jordan",
        age: 34,
        score: 64,
        experience: "9 years",
        degree: "Bachelor",
        skills: &["Excel", "Statistics"],
        hr_action: HrAction::Reject,
        stage: Stage::UnderReview,
    },
    Row {
        name: "Aisha Bello",
        position: "Communication Specialist",
        job_ref: "ICESCO-2024-003",
        nationality: "Nigeria",
        age: 29,
        score: 81,
        experience: "5 years",
        degree: "Master",
        skills: &["Media relations", "Copywriting", "Social media"],
        hr_action: HrAction::NotReviewed,
        stage: Stage::New,
    },
    Row {
        name: "Karim Benali",
        position: "Communication Specialist",
        job_ref: "ICESCO-2024-003",
        nationality: "Algeria",
        age: 37,
        score: 73,
        experience: "11 years",
        degree: "Bachelor",
        skills: &["Public speaking", "Arabic", "French"],
        hr_action: HrAction::UnderReview,
        stage: Stage::UnderReview,
    },
    Row {
        name: "Nur Aisyah Binti Hassan",
        position: "Science Program Specialist",
        job_ref: "ICESCO-2024-004",
        nationality: "Malaysia",
        age: 33,
        score: 95,
        experience: "8 years",
        degree: "PhD",
        skills: &["Research", "Grant writing", "Malay", "English"],
        hr_action: HrAction::Shortlist,
        stage: Stage::Hired,
    },
    Row {
        name: "Mehmet Yilmaz",
        position: "Science Program Specialist",
        job_ref: "ICESCO-2024-004",
        nationality: "Turkey",
        age: 41,
        score: 70,
        experience: "15 years",
        degree: "PhD",
        skills: &["Laboratory management", "Turkish"],
        hr_action: HrAction::NotReviewed,
        stage: Stage::New,
    },
    Row {
        name: "Sara Ahmed",
        position: "Data Analyst",
        job_ref: "ICESCO-2024-002",
        nationality: "Egypt",
        age: 24,
        score: 58,
        experience: "1 year",
        degree: "Bachelor",
        skills: &["Python", "Tableau"],
        hr_action: HrAction::NotReviewed,
        stage: Stage::New,
    },
    Row {
        name: "Ibrahim Toure",
        position: "Education Program Officer",
        job_ref: "ICESCO-2024-001",
        nationality: "Mali",
        age: 39,
        score: 85,
        experience: "12 years",
        degree: "Master",
        skills: &["Teacher training", "French", "Bambara"],
        hr_action: HrAction::Shortlist,
        stage: Stage::Interview,
    },
    Row {
        name: "Layla Karimova",
        position: "Communication Specialist",
        job_ref: "ICESCO-2024-003",
        nationality: "Azerbaijan",
        age: 27,
        score: 67,
        experience: "3 years",
        degree: "Bachelor",
        skills: &["Design", "Video editing"],
        hr_action: HrAction::Reject,
        stage: Stage::New,
    },
    Row {
        name: "Hassan Al-Farsi",
        position: "Science Program Specialist",
        job_ref: "ICESCO-2024-004",
        nationality: "Oman",
        age: 30,
        score: 76,
        experience: "6 years",
        degree: "Master",
        skills: &["Environmental science", "Arabic"],
        hr_action: HrAction::UnderReview,
        stage: Stage::UnderReview,
    },
];

pub fn demo_candidates() -> Vec<Arc<Candidate>> {
    ROWS.iter()
        .enumerate()
        .map(|(i, row)| {
            let decision = match row.stage {
                Stage::Hired => Decision::Hired,
                _ if row.hr_action == HrAction::Reject => Decision::Rejected,
                _ => Decision::UnderReview,
            };
            Arc::new(Candidate {
                id: (i + 1).to_string(),
                reference: format!("CAND-{:03}", i + 1),
                name: row.name.to_string(),
                position: row.position.to_string(),
                job_ref: row.job_ref.to_string(),
                nationality: row.nationality.to_string(),
                avatar: None,
                flag: None,
                age: row.age,
                matching_score: row.score,
                experience: row.experience.to_string(),
                skills: row.skills.iter().map(|s| s.to_string()).collect(),
                degree: row.degree.to_string(),
                education: format!("{} degree", row.degree),
                hr_action: row.hr_action,
                decision,
                decision_reason: None,
                stage: row.stage,
            })
        })
        .collect()
}

pub fn demo_job_offers() -> Vec<JobOffer> {
    let date = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap_or_default();
    vec![
        JobOffer {
            reference: "ICESCO-2024-001".into(),
            title: "Education Program Officer".into(),
            department: "Education Sector".into(),
            business_unit: Some("Basic Education".into()),
            status: JobOfferStatus::Active,
            posted_on: date(2, 1),
            deadline: Some(date(3, 15)),
        },
        JobOffer {
            reference: "ICESCO-2024-002".into(),
            title: "Data Analyst".into(),
            department: "Strategy & Planning".into(),
            business_unit: None,
            status: JobOfferStatus::Active,
            posted_on: date(2, 10),
            deadline: Some(date(3, 31)),
        },
        JobOffer {
            reference: "ICESCO-2024-003".into(),
            title: "Communication Specialist".into(),
            department: "Media & Communication".into(),
            business_unit: None,
            status: JobOfferStatus::Draft,
            posted_on: date(3, 1),
            deadline: None,
        },
        JobOffer {
            reference: "ICESCO-2024-004".into(),
            title: "Science Program Specialist".into(),
            department: "Science & Technology Sector".into(),
            business_unit: Some("Research".into()),
            status: JobOfferStatus::Closed,
            posted_on: date(1, 5),
            deadline: Some(date(2, 5)),
        },
    ]
}

pub fn demo_interviews() -> Vec<Interview> {
    let at = |d, h| {
        Utc.with_ymd_and_hms(2024, 4, d, h, 0, 0)
            .single()
            .unwrap_or_default()
    };
    vec![
        Interview {
            id: "INT-001".into(),
            candidate_ref: "CAND-001".into(),
            candidate_name: "Amina Diallo".into(),
            interviewer: "Dr. Salim Al-Malik".into(),
            scheduled_at: at(8, 10),
            status: InterviewStatus::Scheduled,
            kind: InterviewType::Technical,
        },
        Interview {
            id: "INT-002".into(),
            candidate_ref: "CAND-010".into(),
            candidate_name: "Ibrahim Toure".into(),
            interviewer: "HR Committee".into(),
            scheduled_at: at(9, 14),
            status: InterviewStatus::Proposed,
            kind: InterviewType::Committee,
        },
        Interview {
            id: "INT-003".into(),
            candidate_ref: "CAND-003".into(),
            candidate_name: "Fatima Rahman".into(),
            interviewer: "Ms. Leila Hamdi".into(),
            scheduled_at: at(2, 11),
            status: InterviewStatus::Completed,
            kind: InterviewType::Final,
        },
        Interview {
            id: "INT-004".into(),
            candidate_ref: "CAND-007".into(),
            candidate_name: "Nur Aisyah Binti Hassan".into(),
            interviewer: "Ms. Leila Hamdi".into(),
            scheduled_at: at(1, 9),
            status: InterviewStatus::Completed,
            kind: InterviewType::Hr,
        },
        Interview {
            id: "INT-005".into(),
            candidate_ref: "CAND-002".into(),
            candidate_name: "Youssef El Amrani".into(),
            interviewer: "Dr. Salim Al-Malik".into(),
            scheduled_at: at(5, 15),
            status: InterviewStatus::Cancelled,
            kind: InterviewType::Hr,
        },
    ]
}

pub fn demo_notifications() -> Vec<NewNotification> {
    vec![
        NewNotification {
            kind: NotificationKind::ApplicationStatus,
            title: "Application shortlisted".into(),
            message: "Amina Diallo was shortlisted for Education Program Officer".into(),
            action_url: Some("/hr/candidates/CAND-001".into()),
        },
        NewNotification {
            kind: NotificationKind::Interview,
            title: "Interview proposed".into(),
            message: "Committee interview proposed for Ibrahim Toure".into(),
            action_url: Some("/hr/interviews".into()),
        },
        NewNotification {
            kind: NotificationKind::General,
            title: "New vacancy draft".into(),
            message: "Communication Specialist is waiting for approval".into(),
            action_url: None,
        },
    ]
}
