//! Code contributors.

use super::CreditsError;
use serde::{Deserialize, Serialize};

/// GitHub users already credited as main contributors.
pub const MAIN_AUTHORS: &[&str] = &["westnordost", "FloEdelmann", "matkoniecz", "ENT8R"];

/// Minimum score to be listed as a code contributor.
const MIN_SCORE: i32 = 50;

/// A contributor to the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    pub name: String,
    #[serde(default)]
    pub github_username: Option<String>,
    #[serde(default)]
    pub lines_of_code_changed: i32,
    #[serde(default)]
    pub lines_of_interface_markup_changed: i32,
    #[serde(default)]
    pub asset_files_changed: i32,
}

impl Contributor {
    /// Weighted size of the contribution. Markup is cheap, asset files are
    /// worth a bunch of lines each.
    pub fn score(&self) -> i32 {
        self.lines_of_code_changed
            + self.lines_of_interface_markup_changed / 5
            + self.asset_files_changed * 15
    }

    pub fn text_with_link(&self) -> String {
        text_with_link(&self.name, self.github_username.as_deref())
    }
}

/// Formats a name, linking to the GitHub profile if there is one.
pub fn text_with_link(name: &str, github_username: Option<&str>) -> String {
    match github_username {
        None => name.to_string(),
        Some(user) if user == name => github_link(user),
        Some(user) => format!("{} ({})", name, github_link(user)),
    }
}

fn github_link(user: &str) -> String {
    format!("<a href=\"https://github.com/{0}\">{0}</a>", user)
}

/// Parses the code contributors, keeping those with a notable contribution,
/// largest first, followed by `and_more`.
pub fn code_contributors(yaml: &str, and_more: &str) -> Result<Vec<String>, CreditsError> {
    let mut contributors: Vec<Contributor> = serde_yaml::from_str(yaml)?;
    contributors.retain(|c| {
        let is_main_author = c
            .github_username
            .as_deref()
            .is_some_and(|user| MAIN_AUTHORS.contains(&user));
        !is_main_author && c.score() >= MIN_SCORE
    });
    contributors.sort_by(|a, b| b.score().cmp(&a.score()));

    let mut lines: Vec<String> = contributors.iter().map(Contributor::text_with_link).collect();
    lines.push(and_more.to_string());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contributor(code: i32, markup: i32, assets: i32) -> Contributor {
        Contributor {
            name: "x".to_string(),
            github_username: None,
            lines_of_code_changed: code,
            lines_of_interface_markup_changed: markup,
            asset_files_changed: assets,
        }
    }

    #[test]
    fn test_score() {
        assert_eq!(contributor(10, 0, 0).score(), 10);
        assert_eq!(contributor(0, 24, 0).score(), 4);
        assert_eq!(contributor(1, 5, 2).score(), 32);
    }

    #[test]
    fn test_text_with_link() {
        assert_eq!(text_with_link("Anna", None), "Anna");
        assert_eq!(
            text_with_link("anna", Some("anna")),
            "<a href=\"https://github.com/anna\">anna</a>"
        );
        assert_eq!(
            text_with_link("Anna", Some("anna")),
            "Anna (<a href=\"https://github.com/anna\">anna</a>)"
        );
    }

    #[test]
    fn test_code_contributors_filtered_and_sorted() {
        let yaml = "
- name: Small
  linesOfCodeChanged: 49
- name: Main
  githubUsername: westnordost
  linesOfCodeChanged: 100000
- name: Artist
  assetFilesChanged: 10
- name: Coder
  githubUsername: coder
  linesOfCodeChanged: 400
- name: Designer
  linesOfInterfaceMarkupChanged: 250
";
        let lines = code_contributors(yaml, "and more").unwrap();
        assert_eq!(
            lines,
            vec![
                "Coder (<a href=\"https://github.com/coder\">coder</a>)".to_string(),
                "Artist".to_string(),
                "Designer".to_string(),
                "and more".to_string(),
            ]
        );
    }
}
