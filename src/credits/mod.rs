//! Credits of the app.
//!
//! Contributor lists are bundled as YAML files and assembled into HTML
//! snippets for the about screen.

mod contributor;
mod translators;

pub use contributor::{code_contributors, text_with_link, Contributor, MAIN_AUTHORS};
pub use translators::{translators, TranslationCredits};

use std::fmt;
use std::path::{Path, PathBuf};

/// Errors that can occur while reading credits.
#[derive(Debug)]
pub enum CreditsError {
    /// A credits file could not be read.
    Io(PathBuf, std::io::Error),
    /// A credits file is not in the expected format.
    Yaml(serde_yaml::Error),
}

impl fmt::Display for CreditsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreditsError::Io(path, e) => write!(f, "Failed to read {}: {}", path.display(), e),
            CreditsError::Yaml(e) => write!(f, "Failed to parse credits: {}", e),
        }
    }
}

impl std::error::Error for CreditsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CreditsError::Io(_, e) => Some(e),
            CreditsError::Yaml(e) => Some(e),
        }
    }
}

impl From<serde_yaml::Error> for CreditsError {
    fn from(e: serde_yaml::Error) -> Self {
        CreditsError::Yaml(e)
    }
}

/// Formats items as an HTML bullet list.
pub fn html_list(items: &[String]) -> String {
    let items: String = items.iter().map(|item| format!("<li>{}</li>", item)).collect();
    format!("<ul>{}</ul>", items)
}

/// Parses the main contributors, formatted with links to their profiles.
pub fn main_contributors(yaml: &str) -> Result<Vec<String>, CreditsError> {
    let contributors: Vec<Contributor> = serde_yaml::from_str(yaml)?;
    Ok(contributors.iter().map(Contributor::text_with_link).collect())
}

/// Parses a plain list of credited names or projects.
pub fn plain_list(yaml: &str) -> Result<Vec<String>, CreditsError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Name and GitHub user of the app's author.
pub const AUTHOR: (&str, &str) = ("Tobias Zwick", "westnordost");

/// Reads and parses one credits file, logging files that fail to parse.
fn load_file<T, F>(dir: &Path, name: &str, parse: F) -> Result<T, CreditsError>
where
    F: FnOnce(&str) -> Result<T, CreditsError>,
{
    let path = dir.join(name);
    let yaml = match std::fs::read_to_string(&path) {
        Ok(yaml) => yaml,
        Err(e) => return Err(CreditsError::Io(path, e)),
    };
    parse(&yaml).map_err(|e| {
        log::warn!("Failed to parse {}: {}", path.display(), e);
        e
    })
}

/// All credits sections, ready for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credits {
    /// Author line, with a link to the profile
    pub author: String,
    pub main: Vec<String>,
    pub projects: Vec<String>,
    pub art: Vec<String>,
    pub code: Vec<String>,
    pub translations: TranslationCredits,
}

impl Credits {
    /// Reads all `credits_*.yaml` files from a directory.
    ///
    /// `and_more` is the localized text appended to lists that are not
    /// complete.
    pub fn load_dir(dir: impl AsRef<Path>, and_more: &str) -> Result<Self, CreditsError> {
        let dir = dir.as_ref();
        let credits = Self {
            author: text_with_link(AUTHOR.0, Some(AUTHOR.1)),
            main: load_file(dir, "credits_main.yaml", main_contributors)?,
            projects: load_file(dir, "credits_projects.yaml", plain_list)?,
            art: load_file(dir, "credits_art.yaml", plain_list)?,
            code: load_file(dir, "credits_contributors.yaml", |yaml| {
                code_contributors(yaml, and_more)
            })?,
            translations: load_file(dir, "credits_translators.yaml", |yaml| {
                translators(yaml, and_more, |tag| tag.to_string())
            })?,
        };
        log::info!(
            "Loaded credits: {} code contributors, {} translated languages",
            credits.code.len(),
            credits.translations.len()
        );
        Ok(credits)
    }

    /// Renders all sections as HTML: the author line, then one titled block
    /// per section.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        if !self.author.is_empty() {
            html.push_str(&format!("<p>{}</p>\n", self.author));
        }
        for (title, items) in [
            ("Main contributors", &self.main),
            ("Projects", &self.projects),
            ("Art", &self.art),
            ("Code", &self.code),
        ] {
            html.push_str(&format!("<h2>{}</h2>\n{}\n", title, html_list(items)));
        }
        html.push_str("<h2>Translations</h2>\n");
        for (language, names) in &self.translations {
            html.push_str(&format!("<p><b>{}</b>: {}</p>\n", language, names));
        }
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_list() {
        assert_eq!(
            html_list(&["a".to_string(), "b".to_string()]),
            "<ul><li>a</li><li>b</li></ul>"
        );
        assert_eq!(html_list(&[]), "<ul></ul>");
    }

    #[test]
    fn test_main_contributors() {
        let yaml = "
- name: Jane Doe
  githubUsername: jdoe
- name: Mapper
";
        assert_eq!(
            main_contributors(yaml).unwrap(),
            vec![
                "Jane Doe (<a href=\"https://github.com/jdoe\">jdoe</a>)".to_string(),
                "Mapper".to_string(),
            ]
        );
    }

    #[test]
    fn test_plain_list() {
        assert_eq!(
            plain_list("- OpenStreetMap\n- Tangram").unwrap(),
            vec!["OpenStreetMap".to_string(), "Tangram".to_string()]
        );
        assert!(matches!(
            plain_list("key: value"),
            Err(CreditsError::Yaml(_))
        ));
    }

    fn write_credits(dir: &Path, contributors: &str) {
        let files = [
            ("credits_main.yaml", "- name: Main\n  githubUsername: main\n"),
            ("credits_projects.yaml", "- OpenStreetMap\n"),
            ("credits_art.yaml", "- Painter\n"),
            ("credits_contributors.yaml", contributors),
            ("credits_translators.yaml", "de:\n  Hans: 10\n"),
        ];
        for (name, content) in files {
            std::fs::write(dir.join(name), content).unwrap();
        }
    }

    #[test]
    fn test_load_dir_and_render() {
        let dir = tempfile::tempdir().unwrap();
        write_credits(dir.path(), "- name: Coder\n  linesOfCodeChanged: 100\n");

        let credits = Credits::load_dir(dir.path(), "and more").unwrap();
        assert_eq!(credits.code, vec!["Coder".to_string(), "and more".to_string()]);
        assert_eq!(credits.translations, vec![("de".to_string(), "Hans".to_string())]);

        let html = credits.to_html();
        assert!(html.starts_with(
            "<p>Tobias Zwick (<a href=\"https://github.com/westnordost\">westnordost</a>)</p>\n"
        ));
        assert!(html.contains("<ul><li>OpenStreetMap</li></ul>"));
        assert!(html.contains("<p><b>de</b>: Hans</p>"));
    }

    #[test]
    fn test_load_dir_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        write_credits(dir.path(), "name: not a list");

        let err = Credits::load_dir(dir.path(), "and more").unwrap_err();
        assert!(matches!(err, CreditsError::Yaml(_)));
    }

    #[test]
    fn test_default_credits_have_no_author_line() {
        let html = Credits::default().to_html();
        assert!(html.starts_with("<h2>Main contributors</h2>\n<ul></ul>\n"));
        assert!(!html.contains("<p>"));
    }

    #[test]
    fn test_load_missing_dir() {
        let err = Credits::load_dir("/nonexistent/credits", "and more").unwrap_err();
        assert!(matches!(err, CreditsError::Io(_, _)));
    }
}
