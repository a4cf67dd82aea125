//! Wire Types
//!
//! Entities exchanged with the Farmunity REST API. Field names follow the
//! backend's JSON casing, so most structs rename to camelCase.

use serde::{Deserialize, Serialize};

/// A user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    pub fn is_farmer(&self) -> bool {
        self.role.eq_ignore_ascii_case("farmer")
    }

    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case("admin")
    }
}

/// A crop listing in the marketplace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    pub id: String,
    /// Seller id, needed to start a chat. Old seed data may lack it.
    #[serde(default)]
    pub owner_id: Option<String>,
    pub farmer: String,
    pub crop: String,
    pub quantity: String,
    pub price: f64,
    pub location: String,
    pub quality: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Daily rental pricing for a piece of equipment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RentalPrice {
    #[serde(default)]
    pub day: f64,
    #[serde(default)]
    pub week: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentOwner {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentLocation {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl EquipmentLocation {
    /// "City, State" with graceful fallback when either part is missing.
    pub fn display(&self) -> String {
        match (self.city.as_deref(), self.state.as_deref()) {
            (Some(c), Some(s)) => format!("{}, {}", c, s),
            (Some(c), None) => c.to_string(),
            (None, Some(s)) => s.to_string(),
            (None, None) => "—".to_string(),
        }
    }
}

/// An equipment listing in the rental hub.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub owner: EquipmentOwner,
    #[serde(default)]
    pub location: EquipmentLocation,
    #[serde(default)]
    pub price: RentalPrice,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub certification: Option<Certification>,
}

/// A certification document (invoice or certificate scan).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CertDocument {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub url: String,
}

/// Certification block attached to equipment.
/// Status is one of: pending | certified | rejected | expired.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub certificate_no: Option<String>,
    #[serde(default)]
    pub issue_date: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub documents: Vec<CertDocument>,
    #[serde(default)]
    pub verified_by: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Certification {
    pub fn document(&self, doc_type: &str) -> Option<&CertDocument> {
        self.documents.iter().find(|d| d.doc_type == doc_type)
    }
}

/// Preview of the newest message in a conversation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastMessage {
    pub text: String,
    pub sender_id: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A two-person buyer/seller conversation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    #[serde(default)]
    pub crop_id: Option<String>,
    #[serde(default)]
    pub peer: Option<User>,
    #[serde(default)]
    pub last_message: Option<LastMessage>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub text: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationMeta {
    #[serde(default)]
    pub requester_id: Option<String>,
}

/// A notification shown in the header bell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub metadata: NotificationMeta,
}

impl Notification {
    /// Equipment-interest notifications carry the requester to reply to.
    pub fn reply_target(&self) -> Option<&str> {
        if self.kind.as_deref() == Some("equipment_interest") {
            self.metadata.requester_id.as_deref()
        } else {
            None
        }
    }
}

/// One row of today's price snapshot. The snapshot endpoint keeps
/// snake_case field names, unlike the rest of the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceRow {
    pub crop: String,
    #[serde(default)]
    pub price_per_qt: Option<f64>,
    #[serde(default)]
    pub change_pct: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

/// Current weather conditions for the advisory tab.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherNow {
    pub location: String,
    pub temperature_c: f64,
    pub condition: String,
    #[serde(default)]
    pub humidity_pct: Option<f64>,
    #[serde(default)]
    pub rainfall_mm: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherAdvisory {
    pub advisory: String,
    #[serde(default)]
    pub issued_at: Option<String>,
}

/// A community forum reply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: String,
    pub author: String,
    pub text: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A community forum discussion thread.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discussion {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub replies: Vec<Reply>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One turn in an AI assistant session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiMessage {
    pub role: String,
    pub text: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A stored AI assistant session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSession {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub messages: Vec<AiMessage>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Farmer dashboard headline numbers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default)]
    pub crops_count: u64,
    #[serde(default)]
    pub earnings: f64,
    #[serde(default)]
    pub equipment_rented: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_roles_compare_case_insensitively() {
        let mut u = User {
            id: "1".into(),
            name: "Raj".into(),
            email: "raj@example.com".into(),
            role: "Farmer".into(),
            location: None,
            phone: None,
            rating: None,
            created_at: None,
        };
        assert!(u.is_farmer());
        assert!(!u.is_admin());

        u.role = "ADMIN".into();
        assert!(u.is_admin());
    }

    #[test]
    fn crop_deserializes_camel_case_with_missing_owner() {
        let json = r#"{
            "id": "abc",
            "farmer": "Raj Kumar",
            "crop": "Organic Wheat",
            "quantity": "500 quintals",
            "price": 2200.0,
            "location": "Ludhiana, Punjab",
            "quality": "Grade A",
            "createdAt": "2026-08-01T10:00:00Z"
        }"#;
        let crop: Crop = serde_json::from_str(json).unwrap();
        assert_eq!(crop.owner_id, None);
        assert_eq!(crop.created_at.as_deref(), Some("2026-08-01T10:00:00Z"));
    }

    #[test]
    fn equipment_location_display_falls_back() {
        let full = EquipmentLocation {
            city: Some("Ludhiana".into()),
            state: Some("Punjab".into()),
        };
        assert_eq!(full.display(), "Ludhiana, Punjab");

        let city_only = EquipmentLocation {
            city: Some("Bengaluru".into()),
            state: None,
        };
        assert_eq!(city_only.display(), "Bengaluru");

        assert_eq!(EquipmentLocation::default().display(), "—");
    }

    #[test]
    fn notification_reply_target_requires_interest_kind() {
        let n = Notification {
            id: "n1".into(),
            title: None,
            message: None,
            kind: Some("equipment_interest".into()),
            is_read: false,
            created_at: None,
            metadata: NotificationMeta {
                requester_id: Some("u9".into()),
            },
        };
        assert_eq!(n.reply_target(), Some("u9"));

        let other = Notification {
            kind: Some("system".into()),
            ..n.clone()
        };
        assert_eq!(other.reply_target(), None);
    }

    #[test]
    fn certification_finds_document_by_type() {
        let cert = Certification {
            status: Some("certified".into()),
            documents: vec![
                CertDocument {
                    doc_type: "invoice".into(),
                    url: "/uploads/invoices/1.pdf".into(),
                },
                CertDocument {
                    doc_type: "certificate".into(),
                    url: "/uploads/certs/1.pdf".into(),
                },
            ],
            ..Default::default()
        };
        assert_eq!(
            cert.document("certificate").map(|d| d.url.as_str()),
            Some("/uploads/certs/1.pdf")
        );
        assert!(cert.document("warranty").is_none());
    }
}
