//! Helpers for the in-skill purchasing flow of an Alexa skill.
//!
//! Nothing here talks to the network. The skill hands in the parsed request
//! and the product list it fetched from the ISP API, and gets back plain
//! values or a finished [`Response`] carrying a `Connections.SendRequest`
//! directive.

pub mod config;
pub mod directive;
pub mod product;
pub mod random;
pub mod request;
pub mod response;
pub mod skill;
pub mod speech;

pub use crate::{
    config::{Config, CONFIG},
    directive::{ConnectionName, CorrelationToken, Directive},
    product::{
        entitled_products, is_entitled, product_by_reference_name, CatalogError, Entitlement,
        Product, ProductList,
    },
    random::random_element,
    request::{HandlerInput, RequestEnvelope},
    response::{Response, ResponseBuilder},
    skill::{make_buy_offer, make_upsell, should_upsell},
    speech::{random_learn_more_prompt, speakable_list, upsell_message},
};

#[cfg(test)]
pub(crate) fn init_logger() {
    let _ = env_logger::Builder::from_default_env().is_test(true).try_init();
}
