use crate::directive::Directive;
use serde::{Deserialize, Serialize};

const VERSION: &str = "1.0";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Speech {
    PlainText { text: String },
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

impl Speech {
    pub fn plain(text: &str) -> Speech {
        Speech::PlainText {
            text: text.to_owned(),
        }
    }

    pub fn ssml(ssml: &str) -> Speech {
        Speech::Ssml {
            ssml: ssml.to_owned(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: Speech,
}

/// The response envelope returned to Alexa.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Response {
    pub version: String,
    pub response: ResponseBody,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<Speech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

/// Accumulates the parts of a response over one request turn.
///
/// `get_response` consumes the builder, so a finished response can't be
/// changed through it afterwards.
#[derive(Debug, Clone, Default)]
pub struct ResponseBuilder {
    body: ResponseBody,
}

impl ResponseBuilder {
    pub fn new() -> ResponseBuilder {
        ResponseBuilder::default()
    }

    pub fn speak(&mut self, speech: Speech) -> &mut ResponseBuilder {
        self.body.output_speech = Some(speech);
        self
    }

    pub fn reprompt(&mut self, speech: Speech) -> &mut ResponseBuilder {
        self.body.reprompt = Some(Reprompt {
            output_speech: speech,
        });
        self
    }

    pub fn add_directive(&mut self, directive: Directive) -> &mut ResponseBuilder {
        self.body.directives.push(directive);
        self
    }

    pub fn with_should_end_session(&mut self, end: bool) -> &mut ResponseBuilder {
        self.body.should_end_session = Some(end);
        self
    }

    pub fn get_response(self) -> Response {
        Response {
            version: VERSION.to_owned(),
            response: self.body,
        }
    }
}
