//! `Connections.SendRequest` directives that hand the user over to the Alexa
//! purchase flow.
//!
//! Alexa routes the result of the purchase back to the skill as a
//! `Connections.Response` request carrying the same `token`.
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const SEND_REQUEST: &str = "Connections.SendRequest";

/// Token sent when [`CorrelationToken::Literal`] is configured.
pub const LITERAL_TOKEN: &str = "correlationToken";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum ConnectionName {
    Buy,
    Upsell,
}

/// How the correlation token of a directive is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CorrelationToken {
    /// A fresh v4 uuid for every directive.
    Unique,
    /// Always `"correlationToken"`, for integrations that match on it.
    Literal,
}

impl CorrelationToken {
    pub fn issue(self) -> String {
        match self {
            CorrelationToken::Unique => Uuid::new_v4().to_string(),
            CorrelationToken::Literal => LITERAL_TOKEN.to_owned(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Directive {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: ConnectionName,
    pub payload: Payload,
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Payload {
    #[serde(rename = "InSkillProduct")]
    pub in_skill_product: InSkillProduct,
    #[serde(
        rename = "upsellMessage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub upsell_message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InSkillProduct {
    #[serde(rename = "productId")]
    pub product_id: String,
}

impl Directive {
    pub fn buy(product_id: &str, token: String) -> Directive {
        Directive::send_request(ConnectionName::Buy, product_id, None, token)
    }

    pub fn upsell(product_id: &str, upsell_message: String, token: String) -> Directive {
        Directive::send_request(
            ConnectionName::Upsell,
            product_id,
            Some(upsell_message),
            token,
        )
    }

    fn send_request(
        name: ConnectionName,
        product_id: &str,
        upsell_message: Option<String>,
        token: String,
    ) -> Directive {
        Directive {
            kind: SEND_REQUEST.to_owned(),
            name,
            payload: Payload {
                in_skill_product: InSkillProduct {
                    product_id: product_id.to_owned(),
                },
                upsell_message,
            },
            token,
        }
    }
}
