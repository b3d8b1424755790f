mod prop_tests {
    use crate::glyph::PinyinFormat;
    use crate::transliterator::Transliterator;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn simplification_is_idempotent(s in ".{0,200}") {
            let t = Transliterator::new();
            let once = t.to_simplified(&s);
            let twice = t.to_simplified(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn ascii_text_passes_through(s in "[ -~]{0,200}") {
            let t = Transliterator::new();
            prop_assert_eq!(t.to_pinyin(&s).unwrap(), s);
        }

        #[test]
        fn lenient_conversion_never_fails(s in ".{0,200}") {
            let t = Transliterator::new();
            // arbitrary input, including unmapped Han characters, must not
            // panic or error on the lenient path
            let _ = t.to_pinyin_lenient(&s);
            let _ = t.initials(&s);
            let _ = t.first_syllable(&s);
        }

        #[test]
        fn tone_number_tokens_carry_digits(s in "[你好中国人民银行重庆音乐了解便宜]{1,12}") {
            let t = Transliterator::new();
            let out = t.to_pinyin_with(&s, " ", PinyinFormat::WithToneNumber).unwrap();
            for token in out.split(' ') {
                let last = token.chars().last();
                prop_assert!(matches!(last, Some('1'..='5')), "token `{}`", token);
            }
        }

        #[test]
        fn script_conversion_preserves_char_count(s in ".{0,200}") {
            let t = Transliterator::new();
            prop_assert_eq!(t.to_simplified(&s).chars().count(), s.chars().count());
            prop_assert_eq!(t.to_traditional(&s).chars().count(), s.chars().count());
        }
    }
}
