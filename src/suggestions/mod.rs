//! Quick-reply chip derivation. A linear scan of the assistant reply against
//! a static keyword table, nothing learned or provider-backed.

struct SuggestionRule {
    keywords: &'static [&'static str],
    replies: &'static [&'static str],
}

/// Rules are checked in order; earlier rules win the limited chip slots.
static RULES: &[SuggestionRule] = &[
    SuggestionRule {
        keywords: &["预算", "价格", "价位", "多少钱"],
        replies: &["这个价位不错", "能便宜点吗", "我想看看推荐"],
    },
    SuggestionRule {
        keywords: &["男朋友", "女朋友", "送礼对象"],
        replies: &["告诉你更多喜好", "看看推荐吧", "预算500左右"],
    },
    SuggestionRule {
        keywords: &["生日", "纪念日", "节日"],
        replies: &["想要惊喜感", "实用性为主", "看看推荐"],
    },
    SuggestionRule {
        keywords: &["推荐", "建议"],
        replies: &["看看具体商品", "预算可以调整", "还有其他选择吗"],
    },
    // Clarifying questions from the assistant get direct-answer chips.
    SuggestionRule {
        keywords: &["？", "?", "请问", "方便告诉我"],
        replies: &["我还没想好", "帮我决定吧"],
    },
];

static DEFAULT_SUGGESTIONS: &[&str] = &["我想看看推荐", "还有其他的吗", "这些不错"];

/// Derive up to `max_suggestions` quick-reply chips from the assistant reply.
///
/// Pure function of its inputs and the static table: identical inputs always
/// yield identical chips. An empty or unmatched reply falls back to the
/// default set, truncated to the cap.
pub fn derive_suggestions(reply_text: &str, max_suggestions: usize) -> Vec<String> {
    if max_suggestions == 0 {
        return Vec::new();
    }

    let reply = reply_text.trim();
    let mut chips: Vec<String> = Vec::new();

    if !reply.is_empty() {
        for rule in RULES {
            if chips.len() >= max_suggestions {
                break;
            }
            if rule.keywords.iter().any(|kw| reply.contains(kw)) {
                for reply_chip in rule.replies {
                    if chips.len() >= max_suggestions {
                        break;
                    }
                    if !chips.iter().any(|c| c == reply_chip) {
                        chips.push((*reply_chip).to_string());
                    }
                }
            }
        }
    }

    if chips.is_empty() {
        chips = DEFAULT_SUGGESTIONS
            .iter()
            .take(max_suggestions)
            .map(|s| (*s).to_string())
            .collect();
    }

    chips
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_keywords_map_to_budget_chips() {
        let chips = derive_suggestions("这个预算可以买到不错的耳机", 3);
        assert_eq!(chips, ["这个价位不错", "能便宜点吗", "我想看看推荐"]);
    }

    #[test]
    fn earlier_rules_win_the_cap() {
        // Both the occasion rule and the recommendation rule match; the
        // occasion rule comes first in the table.
        let chips = derive_suggestions("生日的话我推荐这几款", 2);
        assert_eq!(chips, ["想要惊喜感", "实用性为主"]);
    }

    #[test]
    fn clarifying_question_gets_answer_chips() {
        let chips = derive_suggestions("请问你的预算大概是多少呢？", 4);
        assert!(chips.contains(&"我还没想好".to_string()));
    }

    #[test]
    fn empty_reply_returns_default_set() {
        assert_eq!(derive_suggestions("", 3), DEFAULT_SUGGESTIONS);
        assert_eq!(derive_suggestions("   \n", 3).len(), 3);
    }

    #[test]
    fn unmatched_reply_returns_default_set_truncated() {
        let chips = derive_suggestions("hello there", 2);
        assert_eq!(chips, ["我想看看推荐", "还有其他的吗"]);
    }

    #[test]
    fn zero_cap_yields_no_chips() {
        assert!(derive_suggestions("推荐这款", 0).is_empty());
        assert!(derive_suggestions("", 0).is_empty());
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = derive_suggestions("预算500，生日礼物推荐？", 4);
        let b = derive_suggestions("预算500，生日礼物推荐？", 4);
        assert_eq!(a, b);
    }
}
