use approx::assert_relative_eq;
use graphic_charts::core::{HeuristicTextMeasurer, LabelWrapper, TextMeasurer, wrap};
use proptest::prelude::*;

fn ten_px_per_char(text: &str) -> f64 {
    text.chars().count() as f64 * 10.0
}

#[test]
fn each_word_gets_a_line_when_pairs_overflow() {
    let label = wrap("a b c", 15.0, 16.0, &ten_px_per_char);
    let texts: Vec<&str> = label.texts().collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
}

#[test]
fn words_fill_lines_greedily() {
    let label = wrap("the quick brown fox", 100.0, 16.0, &ten_px_per_char);
    let texts: Vec<&str> = label.texts().collect();
    assert_eq!(texts, vec!["the quick", "brown fox"]);
}

#[test]
fn overlong_word_is_kept_whole_on_its_own_line() {
    let label = wrap("supercalifragilistic tiny", 50.0, 16.0, &ten_px_per_char);
    let texts: Vec<&str> = label.texts().collect();
    assert_eq!(texts, vec!["supercalifragilistic", "tiny"]);
}

#[test]
fn first_line_is_never_empty() {
    let label = wrap("Liberal", 10.0, 16.0, &ten_px_per_char);
    assert_eq!(label.line_count(), 1);
    assert_eq!(label.lines[0].text, "Liberal");
}

#[test]
fn lines_step_down_from_the_anchor() {
    let wrapper = LabelWrapper::new(15.0, 16.0).with_anchor(42.0, 3.0);
    let label = wrapper.wrap("a b c", &ten_px_per_char);

    let offsets: Vec<(f64, f64)> = label.lines.iter().map(|l| (l.dx, l.dy)).collect();
    assert_eq!(offsets, vec![(42.0, 3.0), (42.0, 19.0), (42.0, 35.0)]);
}

#[test]
fn runs_of_whitespace_collapse() {
    let label = wrap("  Greens \t and\n others ", 1_000.0, 16.0, &ten_px_per_char);
    let texts: Vec<&str> = label.texts().collect();
    assert_eq!(texts, vec!["Greens and others"]);
}

#[test]
fn heuristic_measurer_is_usable_for_wrapping() {
    let measurer = HeuristicTextMeasurer::default();
    assert_relative_eq!(measurer.width("abcde"), 36.0, epsilon = 1e-9);
    let label = wrap("Labor Party of Australia", 80.0, 16.0, &measurer);
    assert!(label.line_count() >= 2);
}

proptest! {
    #[test]
    fn wrapping_is_deterministic_and_keeps_every_word(
        words in prop::collection::vec("[a-z]{1,12}", 1..12),
        max_width in 10.0f64..300.0
    ) {
        let text = words.join(" ");
        let first = wrap(&text, max_width, 16.0, &ten_px_per_char);
        let second = wrap(&text, max_width, 16.0, &ten_px_per_char);
        prop_assert_eq!(&first, &second);

        let rejoined: Vec<&str> = first.texts().collect();
        prop_assert_eq!(rejoined.join(" "), text);

        for line in first.texts() {
            let single_word = !line.contains(' ');
            prop_assert!(single_word || ten_px_per_char(line) <= max_width);
        }
    }
}
