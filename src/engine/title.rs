//! Title randomizer: shuffles the letters of "Tkinter Demo" and recolours the
//! label background.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::engine::widgets::LabelWidget;
use crate::types::NamedColor;

/// The characters of the initial title, space included.
pub const TITLE_CHARS: [char; 12] = ['T', 'k', 'i', 'n', 't', 'e', 'r', ' ', 'D', 'e', 'm', 'o'];

/// Backgrounds the randomizer may pick from.
pub const TITLE_BACKGROUNDS: [NamedColor; 3] = [NamedColor::Red, NamedColor::Green, NamedColor::Blue];

/// Returns a uniformly random permutation of [`TITLE_CHARS`] as a string
/// (Fisher-Yates via `rand`'s slice shuffle).
pub fn shuffled_title<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut chars = TITLE_CHARS;
    chars.shuffle(rng);
    chars.iter().collect()
}

/// Picks one of [`TITLE_BACKGROUNDS`] uniformly.
pub fn pick_background<R: Rng + ?Sized>(rng: &mut R) -> NamedColor {
    TITLE_BACKGROUNDS[rng.random_range(0..TITLE_BACKGROUNDS.len())]
}

/// Applies a fresh shuffled title and a random background to `label`.
pub fn randomize_title<L, R>(label: &mut L, rng: &mut R)
where
    L: LabelWidget + ?Sized,
    R: Rng + ?Sized,
{
    let text = shuffled_title(rng);
    let color = pick_background(rng);
    log::debug!("title -> {text:?} on {color}");
    label.set_text(text);
    label.set_background(color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    const TRIALS: usize = 10_000;

    fn sorted(chars: impl Iterator<Item = char>) -> Vec<char> {
        let mut v: Vec<char> = chars.collect();
        v.sort_unstable();
        v
    }

    #[derive(Default)]
    struct FakeLabel {
        text: Option<String>,
        background: Option<NamedColor>,
    }

    impl LabelWidget for FakeLabel {
        fn set_text(&mut self, text: String) {
            self.text = Some(text);
        }
        fn set_background(&mut self, color: NamedColor) {
            self.background = Some(color);
        }
    }

    #[test]
    fn shuffle_is_always_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let expected = sorted(TITLE_CHARS.into_iter());
        for _ in 0..1_000 {
            let title = shuffled_title(&mut rng);
            assert_eq!(title.chars().count(), 12);
            assert_eq!(sorted(title.chars()), expected);
        }
    }

    #[test]
    fn background_is_always_red_green_or_blue() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1_000 {
            let color = pick_background(&mut rng);
            assert!(TITLE_BACKGROUNDS.contains(&color), "unexpected {color}");
        }
    }

    #[test]
    fn colours_are_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<NamedColor, usize> = HashMap::new();
        for _ in 0..TRIALS {
            *counts.entry(pick_background(&mut rng)).or_default() += 1;
        }
        assert_eq!(counts.len(), 3);
        let expected = TRIALS / 3;
        for (color, n) in counts {
            assert!(n.abs_diff(expected) < 300, "{color}: {n} vs ~{expected}");
        }
    }

    #[test]
    fn every_position_is_equally_likely_for_each_letter() {
        // 12! outcomes are too many to bin directly; uniform permutations put
        // each distinct letter in each slot with probability 1/12.
        let mut rng = StdRng::seed_from_u64(1234);
        let mut hits = [[0usize; 12]; 2];
        for _ in 0..TRIALS {
            let title: Vec<char> = shuffled_title(&mut rng).chars().collect();
            for (pos, c) in title.iter().enumerate() {
                match c {
                    'T' => hits[0][pos] += 1,
                    ' ' => hits[1][pos] += 1,
                    _ => {}
                }
            }
        }
        let expected = TRIALS / 12;
        for row in hits {
            for n in row {
                assert!(n.abs_diff(expected) < 150, "{n} vs ~{expected}");
            }
        }
    }

    #[test]
    fn shuffles_produce_many_distinct_titles() {
        let mut rng = StdRng::seed_from_u64(99);
        let distinct: std::collections::HashSet<String> =
            (0..500).map(|_| shuffled_title(&mut rng)).collect();
        assert!(distinct.len() > 490);
    }

    #[test]
    fn randomize_sets_both_text_and_background() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut label = FakeLabel::default();
        randomize_title(&mut label, &mut rng);

        let text = label.text.expect("text set");
        assert_eq!(sorted(text.chars()), sorted(TITLE_CHARS.into_iter()));
        assert!(TITLE_BACKGROUNDS.contains(&label.background.expect("background set")));
    }
}
