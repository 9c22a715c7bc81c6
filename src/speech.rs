use crate::{config::CONFIG, product::Product, random::random_element};
use rand::Rng;

pub fn speakable_list(products: &[Product]) -> String {
    let joined = products
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    match joined.rfind(',') {
        Some(i) => format!("{} and{}", &joined[..i], &joined[i + 1..]),
        None => joined,
    }
}

/// Falls back to the configured prompts.
pub fn random_learn_more_prompt<'a, R>(
    prompts: Option<&'a [String]>,
    rng: &mut R,
) -> Option<&'a str>
where
    R: Rng + ?Sized,
{
    let prompts = prompts.unwrap_or_else(|| CONFIG.learn_more_prompts.as_slice());
    random_element(prompts, rng).map(String::as_str)
}

pub fn upsell_message(pre_upsell_message: &str, summary: &str, prompt: &str) -> String {
    format!("{} {} {}", pre_upsell_message, summary, prompt)
        .trim()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{product, Entitlement::NotEntitled};
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn named(names: &[&str]) -> Vec<Product> {
        names.iter().map(|n| product(n, n, NotEntitled)).collect()
    }

    #[test]
    fn speakable_lists() {
        assert_eq!(speakable_list(&[]), "");
        assert_eq!(speakable_list(&named(&["A"])), "A");
        assert_eq!(speakable_list(&named(&["A", "B"])), "A and B");
        assert_eq!(speakable_list(&named(&["A", "B", "C"])), "A, B and C");
        assert_eq!(
            speakable_list(&named(&["Greetings Pack", "Goodbye Pack", "Premium", "Voices"])),
            "Greetings Pack, Goodbye Pack, Premium and Voices"
        );
    }

    #[test]
    fn comma_in_last_name_is_replaced() {
        assert_eq!(
            speakable_list(&named(&["A", "Hello, World"])),
            "A, Hello and World"
        );
    }

    #[test]
    fn prompt_from_given_set() {
        let mut rng = StdRng::seed_from_u64(1);
        let prompts = vec!["Want more?".to_owned()];
        assert_eq!(
            random_learn_more_prompt(Some(prompts.as_slice()), &mut rng),
            Some("Want more?")
        );
        assert_eq!(random_learn_more_prompt(Some(&[][..]), &mut rng), None);
    }

    #[test]
    fn prompt_from_configured_defaults() {
        let mut rng = StdRng::seed_from_u64(1);
        let prompt = random_learn_more_prompt(None, &mut rng).unwrap();
        assert!(CONFIG.learn_more_prompts.iter().any(|p| p == prompt));
    }

    #[test]
    fn upsell_message_joins_and_trims() {
        assert_eq!(
            upsell_message("Hi.", "Try it.", "Want more?"),
            "Hi. Try it. Want more?"
        );
        assert_eq!(upsell_message("", "Try it.", ""), "Try it.");
        assert_eq!(upsell_message("Hi.", "", "Want more?"), "Hi.  Want more?");
    }

    proptest! {
        #[test]
        fn every_name_is_spoken_once_with_one_and(
            names in prop::collection::vec("[A-Za-z]{1,12}", 2..8),
        ) {
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let spoken = speakable_list(&named(&refs));
            prop_assert_eq!(spoken.matches(',').count(), names.len() - 2);
            let expected_tail = format!(" and {}", names[names.len() - 1]);
            prop_assert!(spoken.ends_with(&expected_tail));
            prop_assert!(spoken.starts_with(names[0].as_str()));
        }
    }
}
