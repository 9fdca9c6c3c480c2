use qeo_charts::render::{Color, PALETTE_LEN, darken_color, generate_colors};
use proptest::prelude::*;

proptest! {
    #[test]
    fn generate_colors_returns_exactly_n(count in 0usize..500, alternate in any::<bool>()) {
        prop_assert_eq!(generate_colors(count, alternate).len(), count);
    }

    #[test]
    fn up_to_ten_colors_are_distinct(count in 0usize..=PALETTE_LEN, alternate in any::<bool>()) {
        let colors = generate_colors(count, alternate);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                prop_assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn opacity_strictly_decreases_across_cycles(
        cycles in 2usize..30,
        slot in 0usize..PALETTE_LEN,
        alternate in any::<bool>()
    ) {
        let colors = generate_colors(cycles * PALETTE_LEN, alternate);
        for cycle in 1..cycles {
            let previous = colors[(cycle - 1) * PALETTE_LEN + slot];
            let current = colors[cycle * PALETTE_LEN + slot];
            prop_assert!(current.alpha < previous.alpha);
        }
    }

    #[test]
    fn darkening_never_goes_negative_and_keeps_alpha(
        red in 0u8..=255,
        green in 0u8..=255,
        blue in 0u8..=255,
        alpha in 0.0f64..=1.0,
        amount in 0.0f64..=150.0
    ) {
        let color = Color::rgba(red, green, blue, alpha);
        let darker = Color::parse(&darken_color(&color.to_string(), amount)).expect("parse back");

        prop_assert_eq!(darker.alpha, alpha);
        prop_assert!(darker.red <= red);
        prop_assert!(darker.green <= green);
        prop_assert!(darker.blue <= blue);
    }

    #[test]
    fn darken_by_twenty_is_about_twenty_percent(red in 0u8..=255, green in 0u8..=255, blue in 0u8..=255) {
        let darker = Color::rgb(red, green, blue).darken(20.0);
        for (before, after) in [(red, darker.red), (green, darker.green), (blue, darker.blue)] {
            let expected = f64::from(before) * 0.8;
            prop_assert!((f64::from(after) - expected).abs() <= 0.5);
        }
    }
}
