use once_cell::sync::Lazy;
use regex::Regex;

/// Longest description kept after stripping markup.
pub const MAX_DESCRIPTION_CHARS: usize = 280;

const ELLIPSIS: &str = "...";

static MARKUP_TAG: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"<[^>]+>").ok());

static DURATION_PHRASE: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"(?i)([0-9]+)\s*(?:to\s*[0-9]+\s*)?(minutes?|hours?)").ok()
});

/// Turns an HTML summary into a single line of plain text, capped at
/// [`MAX_DESCRIPTION_CHARS`] characters ("..." terminated when cut).
pub fn strip_markup(html: &str) -> String {
    let without_tags = match MARKUP_TAG.as_ref() {
        Some(re) => re.replace_all(html, " ").into_owned(),
        None => html.to_string(),
    };
    // Unterminated "<" fragments are dropped too so the output never carries markup.
    let without_brackets = without_tags.replace('<', " ");
    let collapsed = without_brackets.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() > MAX_DESCRIPTION_CHARS {
        let keep = MAX_DESCRIPTION_CHARS - ELLIPSIS.len();
        let mut truncated: String = collapsed.chars().take(keep).collect();
        truncated.push_str(ELLIPSIS);
        truncated
    } else {
        collapsed
    }
}

/// Finds the first "<n> [to <m>] minutes|hours" phrase and returns it in
/// seconds. Ranges resolve to their lower bound.
pub fn detect_duration(text: &str) -> Option<u32> {
    let captures = DURATION_PHRASE.as_ref()?.captures(text)?;
    let amount: u32 = captures.get(1)?.as_str().parse().ok()?;
    let unit = captures.get(2)?.as_str();
    to_seconds(amount, unit)
}

/// Converts an amount in the given unit to seconds. Anything that is not an
/// hour unit counts as minutes.
pub fn to_seconds(amount: u32, unit: &str) -> Option<u32> {
    let factor = if unit.to_lowercase().starts_with("hour") {
        3600
    } else {
        60
    };
    amount.checked_mul(factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_strip_tags_and_collapse_whitespace() {
        let html = "<p>Pan-seared <b>salmon</b>\n\n  with   honey.</p>";
        assert_eq!(strip_markup(html), "Pan-seared salmon with honey.");
    }

    #[test]
    fn should_return_empty_string_for_empty_input() {
        assert_eq!(strip_markup(""), "");
        assert_eq!(strip_markup("<br/>"), "");
    }

    #[test]
    fn should_truncate_long_text_with_ellipsis() {
        let long = "a".repeat(400);

        let stripped = strip_markup(&long);

        assert_eq!(stripped.chars().count(), 280);
        assert!(stripped.ends_with("..."));
        assert_eq!(&stripped[..277], &long[..277]);
    }

    #[test]
    fn should_keep_text_of_exactly_max_length() {
        let exact = "b".repeat(280);
        assert_eq!(strip_markup(&exact), exact);
    }

    #[test]
    fn should_count_characters_not_bytes_when_truncating() {
        let accented = "é".repeat(300);

        let stripped = strip_markup(&accented);

        assert_eq!(stripped.chars().count(), 280);
    }

    #[test]
    fn should_treat_bracket_run_up_to_next_close_as_tag() {
        assert_eq!(strip_markup("5 < 6 and <b>bold"), "5 bold");
    }

    #[test]
    fn should_drop_unterminated_angle_brackets() {
        assert_eq!(strip_markup("5 < 6"), "5 6");
        assert_eq!(strip_markup("<b>a</b> <"), "a");
    }

    #[test]
    fn should_detect_minutes() {
        assert_eq!(detect_duration("cook for 8 minutes"), Some(480));
        assert_eq!(detect_duration("rest 1 minute"), Some(60));
    }

    #[test]
    fn should_detect_hours() {
        assert_eq!(detect_duration("simmer for 1 hour"), Some(3600));
        assert_eq!(detect_duration("chill 2 hours"), Some(7200));
    }

    #[test]
    fn should_use_lower_bound_of_range() {
        assert_eq!(detect_duration("bake 25 to 30 minutes"), Some(1500));
    }

    #[test]
    fn should_detect_case_insensitively() {
        assert_eq!(detect_duration("Roast 45 MINUTES"), Some(2700));
        assert_eq!(detect_duration("Braise 3 Hours"), Some(10800));
    }

    #[test]
    fn should_return_none_without_duration_phrase() {
        assert_eq!(detect_duration("stir well"), None);
        assert_eq!(detect_duration("add 2 eggs"), None);
    }

    #[test]
    fn should_return_none_on_overflowing_amount() {
        assert_eq!(detect_duration("wait 99999999999 hours"), None);
    }

    #[test]
    fn should_convert_units_to_seconds() {
        assert_eq!(to_seconds(15, "minutes"), Some(900));
        assert_eq!(to_seconds(2, "Hours"), Some(7200));
        assert_eq!(to_seconds(3, "secs"), Some(180));
    }

    proptest! {
        #[test]
        fn strip_markup_is_idempotent(input in ".{0,600}") {
            let once = strip_markup(&input);
            prop_assert_eq!(strip_markup(&once), once.clone());
        }

        #[test]
        fn strip_markup_output_is_bounded_and_tag_free(input in "(<[a-z]{1,4}>|[a-z ]{1,20}|<|>){0,60}") {
            let stripped = strip_markup(&input);
            prop_assert!(stripped.chars().count() <= MAX_DESCRIPTION_CHARS);
            prop_assert!(!stripped.contains('<'));
        }
    }
}
