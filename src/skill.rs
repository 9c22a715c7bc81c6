use crate::{
    config::CONFIG,
    directive::Directive,
    product::Product,
    random::random_element,
    request::HandlerInput,
    response::Response,
    speech,
};
use log::{debug, info};
use rand::Rng;

pub fn should_upsell<R>(input: &HandlerInput, rng: &mut R) -> bool
where
    R: Rng + ?Sized,
{
    // Callback from a purchase flow
    if input.intent_name().is_none() {
        debug!("No intent on this turn, skipping upsell");
        return false;
    }

    let upsell = random_element(&[true, false], rng)
        .copied()
        .unwrap_or(false);
    debug!("Upsell: {}", upsell);
    upsell
}

pub fn make_buy_offer(input: HandlerInput, product: &Product) -> Response {
    let HandlerInput {
        mut response_builder,
        ..
    } = input;

    let token = CONFIG.correlation_token.issue();
    info!(
        "Buy request for {} ({}), token {}",
        product.reference_name, product.product_id, token
    );

    response_builder.add_directive(Directive::buy(&product.product_id, token));
    response_builder.get_response()
}

pub fn make_upsell<R>(
    input: HandlerInput,
    product: &Product,
    pre_upsell_message: &str,
    learn_more_prompts: Option<&[String]>,
    rng: &mut R,
) -> Response
where
    R: Rng + ?Sized,
{
    let HandlerInput {
        mut response_builder,
        ..
    } = input;

    let no_prompt = [String::new()];
    let prompt = speech::random_learn_more_prompt(
        Some(learn_more_prompts.unwrap_or(&no_prompt)),
        rng,
    )
    .unwrap_or("");
    let message = speech::upsell_message(pre_upsell_message, &product.summary, prompt);

    let token = CONFIG.correlation_token.issue();
    info!(
        "Upsell request for {} ({}), token {}",
        product.reference_name, product.product_id, token
    );
    debug!("Upsell message: {:?}", message);

    response_builder.add_directive(Directive::upsell(&product.product_id, message, token));
    response_builder.get_response()
}
