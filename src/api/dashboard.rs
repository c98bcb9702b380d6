//! Dashboard data endpoints
//! Mission: Serve the informational feeds behind the dashboard widgets
//!
//! Everything here is a stateless transformation over the user store or a
//! fixed payload standing in for an external integration. No endpoint in
//! this module mutates anything.

use crate::api::AppState;
use crate::auth::models::UserRole;
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_users: usize,
    pub active_sessions: u32,
    pub sales: u32,
}

/// Real-time dashboard figures - GET /stats (any authenticated role).
///
/// Session and sales counts are randomized placeholders; only the user
/// count reflects actual state.
pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let mut rng = rand::thread_rng();

    Json(StatsResponse {
        total_users: state.store.len(),
        active_sessions: rng.gen_range(0..100),
        sales: rng.gen_range(0..1000),
    })
}

#[derive(Debug, Serialize)]
pub struct ReportData {
    pub users: usize,
    pub sales: u32,
    pub notifications: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub report_date: DateTime<Utc>,
    pub summary: &'static str,
    pub data: ReportData,
}

/// Generated summary report - GET /reports (Admin only)
pub async fn reports(State(state): State<AppState>) -> Json<Report> {
    Json(Report {
        report_date: Utc::now(),
        summary: "Automatically generated summary report.",
        data: ReportData {
            users: state.store.len(),
            sales: 500,
            notifications: 5,
        },
    })
}

#[derive(Debug, Serialize)]
pub struct CalendarEvent {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
}

/// Scheduled events - GET /calendar (any authenticated role)
pub async fn calendar() -> Json<Vec<CalendarEvent>> {
    Json(vec![
        CalendarEvent {
            id: 1,
            title: "Meeting",
            date: "2025-04-01",
        },
        CalendarEvent {
            id: 2,
            title: "Maintenance",
            date: "2025-04-05",
        },
    ])
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub id: u32,
    pub sender: &'static str,
    pub message: &'static str,
}

/// Live-support transcript - GET /chat (any authenticated role)
pub async fn chat() -> Json<Vec<ChatMessage>> {
    Json(vec![
        ChatMessage {
            id: 1,
            sender: "Support",
            message: "Hello, how can we help you today?",
        },
        ChatMessage {
            id: 2,
            sender: "User",
            message: "I need help with my account.",
        },
    ])
}

#[derive(Debug, Serialize)]
pub struct Payment {
    pub id: u32,
    pub user: &'static str,
    pub amount: u32,
    pub status: &'static str,
}

/// Payment gateway snapshot - GET /payments (Admin only)
pub async fn payments() -> Json<Vec<Payment>> {
    Json(vec![
        Payment {
            id: 1,
            user: "User",
            amount: 100,
            status: "Completed",
        },
        Payment {
            id: 2,
            user: "Alice",
            amount: 250,
            status: "Pending",
        },
    ])
}

#[derive(Debug, Serialize)]
pub struct SocialPost {
    pub id: u32,
    pub platform: &'static str,
    pub content: &'static str,
    pub date: &'static str,
}

/// Social feed - GET /social (public)
pub async fn social_feed() -> Json<Vec<SocialPost>> {
    Json(vec![
        SocialPost {
            id: 1,
            platform: "Twitter",
            content: "Sample tweet from the product feed",
            date: "2025-03-14",
        },
        SocialPost {
            id: 2,
            platform: "Instagram",
            content: "Latest post has been uploaded",
            date: "2025-03-15",
        },
    ])
}

#[derive(Debug, Serialize)]
pub struct WeatherReport {
    pub location: &'static str,
    pub temperature: &'static str,
    pub condition: &'static str,
}

/// Weather integration stand-in - GET /weather (public)
pub async fn weather() -> Json<WeatherReport> {
    Json(WeatherReport {
        location: "Jakarta",
        temperature: "32°C",
        condition: "Sunny",
    })
}

/// Reduced user view for unauthenticated dashboards.
#[derive(Debug, Serialize)]
pub struct PublicProfile {
    pub name: String,
    pub role: UserRole,
}

/// Limited user listing - GET /public/users (public)
pub async fn public_users(State(state): State<AppState>) -> Json<Vec<PublicProfile>> {
    let profiles = state
        .store
        .list(None)
        .into_iter()
        .map(|u| PublicProfile {
            name: u.name,
            role: u.role,
        })
        .collect();

    Json(profiles)
}
