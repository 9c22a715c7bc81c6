use rand::{seq::SliceRandom, Rng};

pub fn random_element<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn empty_has_no_selection() {
        let mut rng = StdRng::seed_from_u64(7);
        let empty: [u8; 0] = [];
        assert_eq!(random_element(&empty, &mut rng), None);
    }

    #[test]
    fn single_element_always_chosen() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(random_element(&["only"], &mut rng), Some(&"only"));
        }
    }

    #[test]
    fn every_index_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = [0usize, 1, 2, 3];
        let mut seen = [0u32; 4];
        for _ in 0..4000 {
            seen[*random_element(&items, &mut rng).unwrap()] += 1;
        }
        // expected 1000 each
        for count in seen.iter() {
            assert!(*count > 800 && *count < 1200, "{:?}", seen);
        }
    }

    proptest! {
        #[test]
        fn chosen_element_is_a_member(
            items in prop::collection::vec(any::<i32>(), 1..64),
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let chosen = random_element(&items, &mut rng);
            prop_assert!(chosen.is_some());
            prop_assert!(items.contains(chosen.unwrap()));
        }
    }
}
