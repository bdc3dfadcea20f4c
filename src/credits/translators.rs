//! Translation credits.

use super::CreditsError;
use indexmap::IndexMap;

/// Translators per language: language display name to a comma separated list
/// of translator names, sorted by language name.
pub type TranslationCredits = Vec<(String, String)>;

/// Translators with a smaller share of a language's translations (in whole
/// percent) are not listed.
const MIN_SHARE_PERCENT: i64 = 2;

/// Parses translation credits.
///
/// The YAML maps language tags to translator names to the number of
/// translated strings. `display_name` turns a language tag into the name
/// shown to the user. English is not a translation and is skipped.
pub fn translators<F>(
    yaml: &str,
    and_more: &str,
    display_name: F,
) -> Result<TranslationCredits, CreditsError>
where
    F: Fn(&str) -> String,
{
    let mut languages: IndexMap<String, IndexMap<String, i64>> = serde_yaml::from_str(yaml)?;

    for translators in languages.values_mut() {
        let total: i64 = translators.values().sum();
        if total <= 0 {
            continue;
        }
        let before = translators.len();
        translators.retain(|_, count| 100 * *count / total >= MIN_SHARE_PERCENT);
        if translators.len() < before {
            // placeholder sorted last, turned into "and more" below
            translators.insert(String::new(), 1);
        }
    }
    languages.shift_remove("en");

    let mut tag_by_name: IndexMap<String, String> = IndexMap::new();
    for tag in languages.keys() {
        tag_by_name.insert(display_name(tag), tag.clone());
    }
    let mut names: Vec<&String> = tag_by_name.keys().collect();
    names.sort();

    let credits = names
        .into_iter()
        .filter_map(|name| {
            let translators = languages.get(&tag_by_name[name])?;
            let mut entries: Vec<(&String, &i64)> = translators.iter().collect();
            entries.sort_by(|a, b| b.1.cmp(a.1));
            let joined = entries
                .iter()
                .map(|(name, _)| name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            let joined = match joined.strip_suffix(", ") {
                Some(listed) => format!("{} {}", listed, and_more),
                None => joined,
            };
            Some((name.clone(), joined))
        })
        .collect();
    Ok(credits)
}
