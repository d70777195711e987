//! Property catalog types.

use serde::{Deserialize, Serialize};

/// Sale status of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyStatus {
    #[serde(rename = "available")]
    Available,
    #[serde(rename = "sold")]
    Sold,
    #[serde(rename = "coming-soon")]
    ComingSoon,
}

impl std::fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyStatus::Available => write!(f, "Available"),
            PropertyStatus::Sold => write!(f, "Sold"),
            PropertyStatus::ComingSoon => write!(f, "Coming Soon"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub location: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub price: f64,
    pub status: PropertyStatus,
    pub units: u32,
    pub acres: f64,
    #[serde(rename = "completionDate")]
    pub completion_date: String,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

/// Payload for admin create/update of a listing.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyInput {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub location: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub price: f64,
    pub status: PropertyStatus,
    pub units: u32,
    pub acres: f64,
    #[serde(rename = "completionDate")]
    pub completion_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_property() {
        let json = r#"{
            "id": "p-1",
            "title": "Haven Gardens Phase 2",
            "slug": "haven-gardens-phase-2",
            "description": "Serviced plots with perimeter fencing",
            "location": "Epe, Lagos",
            "imageUrl": "https://cdn.haven.test/p-1.jpg",
            "price": 12500000,
            "status": "coming-soon",
            "units": 120,
            "acres": 15.5,
            "completionDate": "2027-06-01"
        }"#;
        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.status, PropertyStatus::ComingSoon);
        assert_eq!(property.units, 120);
        assert!(property.features.is_none());
        assert_eq!(property.status.to_string(), "Coming Soon");
    }
}
