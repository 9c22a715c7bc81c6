use crate::response::ResponseBuilder;
use failure::{Error, ResultExt};
use log::debug;
use serde::Deserialize;

/// The parts of an Alexa request envelope the purchase helpers look at.
/// Everything else in the envelope is ignored.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: String,
    pub request: RequestBody,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody {
    #[serde(rename = "type")]
    pub reqtype: String,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub intent: Option<Intent>,
    /// `Buy` or `Upsell` on a `Connections.Response`.
    #[serde(default)]
    pub name: Option<String>,
    /// Correlation token echoed back on a `Connections.Response`.
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Intent {
    pub name: String,
}

/// One request turn: the incoming request plus the response being built
/// for it.
#[derive(Debug, Clone)]
pub struct HandlerInput {
    pub request_envelope: RequestEnvelope,
    pub response_builder: ResponseBuilder,
}

impl HandlerInput {
    pub fn new(request_envelope: RequestEnvelope) -> HandlerInput {
        HandlerInput {
            request_envelope,
            response_builder: ResponseBuilder::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<HandlerInput, Error> {
        let envelope: RequestEnvelope =
            serde_json::from_str(json).context("Could not parse request envelope")?;
        debug!("Request Type: {:?}", envelope.request.reqtype);
        Ok(HandlerInput::new(envelope))
    }

    /// Name of the intent being handled. `None` on turns that carry no
    /// intent, such as the `Connections.Response` that follows a purchase.
    pub fn intent_name(&self) -> Option<&str> {
        self.request_envelope
            .request
            .intent
            .as_ref()
            .map(|intent| intent.name.as_str())
    }
}

#[cfg(test)]
pub(crate) fn intent_request(intent: &str) -> HandlerInput {
    HandlerInput::from_json(&format!(
        r#"{{
            "version": "1.0",
            "request": {{
                "type": "IntentRequest",
                "requestId": "amzn1.echo-api.request.1",
                "locale": "en-US",
                "intent": {{ "name": "{}", "confirmationStatus": "NONE" }}
            }}
        }}"#,
        intent
    ))
    .unwrap()
}

#[cfg(test)]
pub(crate) fn connections_response() -> HandlerInput {
    HandlerInput::from_json(
        r#"{
            "version": "1.0",
            "session": { "new": false },
            "request": {
                "type": "Connections.Response",
                "requestId": "amzn1.echo-api.request.2",
                "locale": "en-US",
                "name": "Upsell",
                "status": { "code": "200", "message": "OK" },
                "payload": { "purchaseResult": "DECLINED", "productId": "amzn1.adg.product.1" },
                "token": "correlationToken"
            }
        }"#,
    )
    .unwrap()
}
