//! Greedy budget-fitting of event lines into the platform limit.

use crate::types::{ShareConfig, ShareResult};

/// Hard character limit of the target platform.
pub const CHARACTER_LIMIT: usize = 280;

/// Characters as the platform counts them: Unicode scalars, not bytes.
/// Titles and the omission marker are Japanese text.
fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Marker substituted for the last included line when events were cut.
fn omission_marker(omitted: usize) -> String {
    format!("...他{omitted}件のイベント")
}

/// Fit as many lines as possible under [`CHARACTER_LIMIT`].
///
/// `lines` must already be sorted earliest-first. Inclusion is a strict
/// prefix of the input: iteration stops at the first line that does not
/// fit, never skipping ahead to a smaller later line. Earlier events are
/// the time-sensitive ones, so they are never sacrificed to fit a later
/// one.
///
/// The text is assembled as the base message, a blank line, the included
/// lines each on their own line, and the footer. Every included line
/// costs its length plus one separator newline; the base-to-body and
/// body-to-footer newlines are the two chars of fixed overhead. The sum
/// of those costs never exceeds [`CHARACTER_LIMIT`].
pub fn fit_lines(config: &ShareConfig, lines: &[String]) -> ShareResult {
    let base = &config.base_message;
    let footer = config.footer();
    let fixed_overhead = char_len(base) + char_len(&footer) + 2;
    let budget = CHARACTER_LIMIT as i64 - fixed_overhead as i64;

    // Base message and footer alone blow the limit. Degrade to the bare
    // destination link; this is the only path that drops the hashtags.
    if budget <= 0 {
        return ShareResult {
            share_text: format!("{}\n\n{}", base, config.destination_url),
            included_event_count: 0,
            was_truncated: true,
        };
    }
    let budget = budget as usize;

    let mut included: Vec<String> = Vec::new();
    let mut running = 0usize;
    for line in lines {
        let cost = char_len(line) + 1;
        if running + cost > budget {
            break;
        }
        running += cost;
        included.push(line.clone());
    }

    let was_truncated = included.len() < lines.len();
    let mut included_event_count = included.len();

    if was_truncated && !included.is_empty() {
        // The replaced slot counts back into the omitted total.
        let omitted = lines.len() - included.len() + 1;
        let marker = omission_marker(omitted);
        let last = included.len() - 1;
        // Only substitute when the marker fits the slot the line vacates;
        // otherwise the text stays unmarked even though events were cut.
        if char_len(&marker) <= char_len(&included[last]) {
            included[last] = marker;
            included_event_count -= 1;
        }
    }

    let share_text = if included.is_empty() {
        format!("{base}\n\n{footer}")
    } else {
        format!("{base}\n\n{}\n{footer}", included.join("\n"))
    };

    ShareResult {
        share_text,
        included_event_count,
        was_truncated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_base(base: impl Into<String>) -> ShareConfig {
        // "https://e.com" is 13 chars; no hashtags, so the footer is the
        // bare URL and the budget is 280 - base - 15.
        ShareConfig::new("https://e.com", base)
    }

    #[test]
    fn test_zero_lines_keeps_base_and_footer() {
        let config = config_with_base("Upcoming events");
        let result = fit_lines(&config, &[]);

        assert_eq!(result.share_text, "Upcoming events\n\nhttps://e.com");
        assert_eq!(result.included_event_count, 0);
        assert!(!result.was_truncated);
    }

    #[test]
    fn test_all_lines_fit() {
        let config = config_with_base("Upcoming events");
        let lines = vec![
            "01/20 React勉強会".to_string(),
            "01/25 Python入門".to_string(),
        ];
        let result = fit_lines(&config, &lines);

        assert_eq!(
            result.share_text,
            "Upcoming events\n\n01/20 React勉強会\n01/25 Python入門\nhttps://e.com"
        );
        assert_eq!(result.included_event_count, 2);
        assert!(!result.was_truncated);
    }

    #[test]
    fn test_exact_budget_fill_reaches_limit_without_exceeding_it() {
        // fixed overhead = 240 + 13 + 2 = 255, budget = 25;
        // line costs are 11 + 14 = 25, filling the budget exactly.
        let config = config_with_base("a".repeat(240));
        let lines = vec!["b".repeat(10), "c".repeat(13)];
        let result = fit_lines(&config, &lines);

        assert_eq!(result.included_event_count, 2);
        assert!(!result.was_truncated);
        assert_eq!(result.share_text.chars().count(), CHARACTER_LIMIT);
    }

    #[test]
    fn test_greedy_fill_stops_at_first_misfit() {
        // budget = 25; the second line costs 15 and pushes past it, so
        // the third line must not be considered even though it would fit.
        let config = config_with_base("a".repeat(240));
        let lines = vec!["b".repeat(10), "c".repeat(14), "d".repeat(2)];
        let result = fit_lines(&config, &lines);

        assert!(result.was_truncated);
        assert!(result.share_text.contains(&"b".repeat(10)));
        assert!(!result.share_text.contains(&"d".repeat(2)));
    }

    #[test]
    fn test_marker_replaces_last_included_line() {
        // fixed overhead = 220 + 13 + 2 = 235, budget = 45: two lines of
        // cost 21 fit, the third does not.
        let config = config_with_base("x".repeat(220));
        let lines = vec!["a".repeat(20), "b".repeat(20), "c".repeat(10)];
        let result = fit_lines(&config, &lines);

        assert!(result.was_truncated);
        // two lines omitted: the misfit plus the replaced slot
        assert!(result.share_text.contains("...他2件のイベント"));
        assert!(!result.share_text.contains(&"b".repeat(20)));
        assert_eq!(result.included_event_count, 1);
        assert!(result.share_text.chars().count() <= CHARACTER_LIMIT);
    }

    #[test]
    fn test_marker_omitted_when_replaced_line_is_too_short() {
        // budget = 25 fits only the first 10-char line; the marker needs
        // 11 chars and the vacated slot holds 10, so the text stays
        // unmarked while the counters still report the cut.
        let config = config_with_base("a".repeat(240));
        let lines = vec!["b".repeat(10), "c".repeat(14), "d".repeat(14)];
        let result = fit_lines(&config, &lines);

        assert!(result.was_truncated);
        assert!(!result.share_text.contains("他"));
        assert!(result.share_text.contains(&"b".repeat(10)));
        assert_eq!(result.included_event_count, 1);
    }

    #[test]
    fn test_single_oversized_line_yields_empty_body() {
        let config = config_with_base("Upcoming events");
        let lines = vec!["e".repeat(260)];
        let result = fit_lines(&config, &lines);

        assert_eq!(result.share_text, "Upcoming events\n\nhttps://e.com");
        assert_eq!(result.included_event_count, 0);
        assert!(result.was_truncated);
    }

    #[test]
    fn test_fallback_when_base_and_footer_exceed_limit() {
        let base = "a".repeat(300);
        let config = config_with_base(base.clone()).with_hashtags(["イベント"]);
        let lines = vec!["01/20 React勉強会".to_string()];
        let result = fit_lines(&config, &lines);

        assert_eq!(result.share_text, format!("{base}\n\nhttps://e.com"));
        assert_eq!(result.included_event_count, 0);
        assert!(result.was_truncated);
    }

    #[test]
    fn test_fallback_on_zero_budget() {
        // fixed overhead = 265 + 13 + 2 = 280: nothing left for lines.
        let base = "a".repeat(265);
        let config = config_with_base(base.clone());
        let result = fit_lines(&config, &["01/20 会".to_string()]);

        assert_eq!(result.share_text, format!("{base}\n\nhttps://e.com"));
        assert!(result.was_truncated);
    }

    #[test]
    fn test_budget_counts_chars_not_bytes() {
        // 100 Japanese chars are 300 bytes; byte arithmetic would leave
        // no budget at all.
        let config = config_with_base("あ".repeat(100));
        let lines = vec!["い".repeat(160)];
        let result = fit_lines(&config, &lines);

        assert_eq!(result.included_event_count, 1);
        assert!(!result.was_truncated);
        assert!(result.share_text.chars().count() <= CHARACTER_LIMIT);
    }
}
