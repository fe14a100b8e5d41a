use std::collections::{BTreeSet, HashMap, HashSet};

/// Translation completeness test for the bilingual pair.
///
/// The site is strictly two-locale, so the check runs both directions:
/// every key in the fallback (zh-CN) must exist in en-US and vice versa,
/// no file may define a key twice, and no message may be empty (a blank
/// variant would render as missing content in one language).
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
#[test]
fn both_locales_define_the_same_nonempty_keys() {
    const ZH_CN: &str = include_str!("../i18n/zh-CN/lingxiao-ui.ftl");
    const EN_US: &str = include_str!("../i18n/en-US/lingxiao-ui.ftl");

    let locales: &[(&str, &str)] = &[("zh-CN", ZH_CN), ("en-US", EN_US)];

    let mut keys_by_locale: HashMap<&str, HashSet<String>> = HashMap::new();
    let mut failures = Vec::new();

    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let messages = extract_messages(src);
        assert!(!messages.is_empty(), "Locale {locale} contains no keys.");

        let empty: BTreeSet<_> = messages
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(key, _)| key.clone())
            .collect();
        if !empty.is_empty() {
            failures.push(format!(
                "Locale {locale} has {} empty message(s):\n  {}",
                empty.len(),
                empty.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }

        keys_by_locale.insert(locale, messages.into_keys().collect());
    }

    for (locale, keys) in &keys_by_locale {
        for (other_locale, other_keys) in &keys_by_locale {
            if locale == other_locale {
                continue;
            }
            let missing: BTreeSet<_> = keys.difference(other_keys).cloned().collect();
            if !missing.is_empty() {
                failures.push(format!(
                    "Locale {other_locale} is missing {} key(s) present in {locale}:\n  {}",
                    missing.len(),
                    missing.into_iter().collect::<Vec<_>>().join("\n  ")
                ));
            }
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from the other locale, then translate.",
            failures.join("\n\n")
        );
    }
}

/// Extract message keys and single-line values from a Fluent file (simple
/// heuristic).
fn extract_messages(src: &str) -> HashMap<String, String> {
    let mut messages = HashMap::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Skip attribute or continuation lines (start with '.' or indent).
        if line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let (left, right) = line.split_at(eq_pos);
            let key = left.trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                messages.insert(key.to_string(), right[1..].trim().to_string());
            }
        }
    }

    messages
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for line in src.lines() {
        let raw = line;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                if !seen.insert(key.to_string()) {
                    dups.insert(format!("{key}  (line: \"{raw}\")"));
                }
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
