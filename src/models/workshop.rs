use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkshopStatus {
    #[default]
    Upcoming,
    Open,
    Completed,
    Cancelled,
}

impl FromStr for WorkshopStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upcoming" => Ok(Self::Upcoming),
            "open" => Ok(Self::Open),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for WorkshopStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upcoming => write!(f, "upcoming"),
            Self::Open => write!(f, "open"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Workshop {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub date: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub max_participants: Option<i64>,
    pub registrations: i64,
    pub status: WorkshopStatus,
    pub price: Option<f64>,
    pub instructors: Vec<String>,
    pub images: Vec<WorkshopImage>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkshopImage {
    pub id: i64,
    pub workshop_id: i64,
    pub image_path: String,
    pub created_at: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateWorkshop {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub max_participants: Option<i64>,
    pub registrations: Option<i64>,
    pub status: Option<String>,
    pub price: Option<f64>,
    pub instructors: Option<serde_json::Value>,
    pub images: Option<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateWorkshop {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub max_participants: Option<i64>,
    pub registrations: Option<i64>,
    pub status: Option<String>,
    pub price: Option<f64>,
    pub instructors: Option<serde_json::Value>,
    pub images: Option<serde_json::Value>,
}
