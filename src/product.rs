use failure::{Error, Fail, ResultExt};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An in-skill product as listed by the ISP products API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: String,
    pub reference_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub entitled: Entitlement,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchasable: Option<String>,
}

/// Anything other than `ENTITLED`, including a missing field, `null` or a
/// non-string value, is not owned.
///
/// Serializing is lossy: every non-owned value is written back as
/// `NOT_ENTITLED`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(from = "Value", into = "&'static str")]
pub enum Entitlement {
    Entitled,
    NotEntitled,
}

impl Default for Entitlement {
    fn default() -> Entitlement {
        Entitlement::NotEntitled
    }
}

impl From<Value> for Entitlement {
    fn from(value: Value) -> Entitlement {
        match value.as_str() {
            Some("ENTITLED") => Entitlement::Entitled,
            _ => Entitlement::NotEntitled,
        }
    }
}

impl From<Entitlement> for &'static str {
    fn from(e: Entitlement) -> &'static str {
        match e {
            Entitlement::Entitled => "ENTITLED",
            Entitlement::NotEntitled => "NOT_ENTITLED",
        }
    }
}

/// Body of a `GET /v1/users/~current/skills/~current/inSkillProducts` call.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductList {
    pub in_skill_products: Vec<Product>,
    #[serde(default)]
    pub is_truncated: bool,
    #[serde(default)]
    pub next_token: Option<String>,
}

impl ProductList {
    pub fn from_json(json: &str) -> Result<ProductList, Error> {
        let list: ProductList =
            serde_json::from_str(json).context("Could not parse in-skill product list")?;
        debug!(
            "Parsed {} in-skill products (truncated: {})",
            list.in_skill_products.len(),
            list.is_truncated
        );
        Ok(list)
    }
}

#[derive(Debug, Fail, PartialEq)]
pub enum CatalogError {
    #[fail(display = "No product found with the reference name {}.", _0)]
    ReferenceNotFound(String),
    #[fail(
        display = "Found {} products with the reference name {}.",
        count, reference_name
    )]
    DuplicateReference { reference_name: String, count: usize },
}

pub fn is_entitled(product: Option<&Product>) -> bool {
    product.map_or(false, |p| p.entitled == Entitlement::Entitled)
}

/// Entitled products, in catalog order.
pub fn entitled_products(products: &[Product]) -> Vec<&Product> {
    products
        .iter()
        .filter(|p| p.entitled == Entitlement::Entitled)
        .collect()
}

/// Look up the single product carrying `reference_name`.
///
/// Fails with a [`CatalogError`] when there is no such product, or when the
/// catalog holds more than one.
pub fn product_by_reference_name<'a>(
    products: &'a [Product],
    reference_name: &str,
) -> Result<&'a Product, Error> {
    let matches: Vec<&Product> = products
        .iter()
        .filter(|p| p.reference_name == reference_name)
        .collect();

    match matches.as_slice() {
        [product] => Ok(*product),
        [] => {
            warn!("Product lookup failed for {:?}", reference_name);
            Err(Error::from(CatalogError::ReferenceNotFound(
                reference_name.to_owned(),
            )))
        }
        _ => {
            warn!(
                "Catalog holds {} products named {:?}",
                matches.len(),
                reference_name
            );
            Err(Error::from(CatalogError::DuplicateReference {
                reference_name: reference_name.to_owned(),
                count: matches.len(),
            }))
        }
    }
}

#[cfg(test)]
pub(crate) fn product(reference_name: &str, name: &str, entitled: Entitlement) -> Product {
    Product {
        product_id: format!("amzn1.adg.product.{}", reference_name),
        reference_name: reference_name.to_owned(),
        name: name.to_owned(),
        summary: format!("{} summary.", name),
        entitled,
        product_type: None,
        purchasable: None,
    }
}
