use serde::Serialize;
use utoipa::ToSchema;

use crate::message::application::domain::entities::Message;

pub const RECENT_MESSAGE_LIMIT: u64 = 5;

/// Figures shown on the admin landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DashboardStats {
    pub total_projects: u64,
    pub total_messages: u64,
    pub unread_messages: u64,
    pub total_subscribers: u64,
    pub total_skills: u64,
    pub recent_messages: Vec<Message>,
}
