//! Data models for the solicitudes/quejas backend

use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

pub mod auth;
pub use auth::*;

/// User model
///
/// The password is only ever stored as a bcrypt hash; `UserResponse` is the
/// sanitized projection returned by the API.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
        }
    }
}

/// Catalog row: an organizational area a solicitud is directed to
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Area {
    pub id_area: i32,
    pub nombre: String,
}

/// Catalog row: the type of a solicitud
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct TipoSolicitud {
    pub id_tipo_solicitud: i32,
    pub nombre: String,
}

/// Catalog row: the processing state of a solicitud
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct EstadoSolicitud {
    pub id_estado: i32,
    pub nombre: String,
}

/// A request record submitted by a user
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Solicitud {
    pub id_solicitud: i32,
    pub id_area: i32,
    pub id_tipo_solicitud: i32,
    pub id_estado: i32,
    pub descripcion: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A complaint record submitted by a user
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Queja {
    pub id_queja: i32,
    pub descripcion: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a solicitud
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSolicitudRequest {
    pub id_area: i32,
    pub id_tipo_solicitud: i32,
    pub id_estado: i32,
    #[validate(length(min = 1, message = "descripcion must not be empty"))]
    pub descripcion: String,
}

/// Request body for creating a queja
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuejaRequest {
    #[validate(length(min = 1, message = "descripcion must not be empty"))]
    pub descripcion: String,
}

/// Dashboard counters
#[derive(Debug, Serialize, Deserialize)]
pub struct MetadataResponse {
    pub solicitudes_count: i64,
    pub quejas_count: i64,
}

/// Outcome classification for user-facing messages
///
/// An explicit tag, so clients never have to infer success or failure by
/// substring-matching on the message text.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Success,
    Error,
}

/// Tagged message envelope for create operations
#[derive(Debug, Serialize)]
pub struct ApiMessage<T: Serialize> {
    pub status: MessageStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiMessage<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: MessageStatus::Success,
            message: message.into(),
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MessageStatus::Success).unwrap(),
            "\"success\""
        );
        assert_eq!(
            serde_json::to_string(&MessageStatus::Error).unwrap(),
            "\"error\""
        );
    }

    #[test]
    fn test_api_message_success_envelope() {
        let msg = ApiMessage::success("Queja creada correctamente", 42);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "Queja creada correctamente");
        assert_eq!(json["data"], 42);
    }

    #[test]
    fn test_create_queja_request_validation() {
        let valid = CreateQuejaRequest {
            descripcion: "El ascensor no funciona".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty = CreateQuejaRequest {
            descripcion: String::new(),
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_create_solicitud_request_validation() {
        let valid = CreateSolicitudRequest {
            id_area: 1,
            id_tipo_solicitud: 2,
            id_estado: 1,
            descripcion: "Solicitud de certificado".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty = CreateSolicitudRequest {
            id_area: 1,
            id_tipo_solicitud: 2,
            id_estado: 1,
            descripcion: String::new(),
        };
        assert!(empty.validate().is_err());
    }
}
