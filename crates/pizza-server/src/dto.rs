use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Records
//
// Handlers pass records through as loose JSON maps; these types describe the
// documented shape for OpenAPI and typed clients. Absent fields stay absent.
// ---------------------------------------------------------------------------

/// A login attempt from the admin or client app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[schema(as = Auth)]
pub struct AuthorizationRecord {
    /// Server-generated id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "g8hj_fr4")]
    pub id: Option<String>,
    /// Login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "test@mail.ru")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "qwerty12345")]
    pub password: Option<String>,
    /// Application type (admin, client)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "admin")]
    pub app: Option<String>,
}

/// A pizza order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[schema(as = Order)]
pub struct OrderRecord {
    /// Server-generated id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "d5fE_asz")]
    pub id: Option<String>,
    /// Customer name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Ivan Ivanov")]
    pub name: Option<String>,
    /// Delivery address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Sesame Street")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "4444 4444 4444 4444")]
    pub card_number: Option<String>,
    /// Payment system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "visa")]
    pub payment: Option<String>,
    /// Pizza size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "30")]
    pub size: Option<String>,
    /// Dough type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "thick")]
    pub dough: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = json!(["mayo"]))]
    pub sauces: Option<Vec<String>>,
    /// Topping names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = json!(["cucumber", "salami", "bacon"]))]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "319")]
    pub price: Option<String>,
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub store: &'static str,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
