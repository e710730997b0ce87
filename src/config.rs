use std::path::PathBuf;

use anyhow::Result;
use crossterm::style::Stylize;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::default_colors::*;

pub const CONFIG_FILE: &str = "bookview.toml";
pub const ENV_PREFIX: &str = "BOOKVIEW_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    bold:   bool,
    italic: bool,
    color:  crossterm::style::Color,
}

impl StyleConfig {
    fn style(&self, s: impl ToString) -> String {
        let mut s = s.to_string().with(self.color);
        if self.bold {
            s = s.bold();
        }
        if self.italic {
            s = s.italic();
        }
        s.to_string()
    }
}

pub trait Styleable {
    fn style(&self, c: &StyleConfig) -> String;
}

impl<T> Styleable for T
where
    T: ToString + std::fmt::Display,
{
    fn style(&self, c: &StyleConfig) -> String {
        c.style(self)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            color:  COLOR_TEXT,
            bold:   false,
            italic: false,
        }
    }
}

/// How one piece of the page is printed in the terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub prefix:            String,
    pub suffix:            String,
    pub description:       String,
    pub separator:         String,
    pub style_prefix:      StyleConfig,
    pub style_suffix:      StyleConfig,
    pub style_description: StyleConfig,
    pub style_separator:   StyleConfig,
    pub style_content:     StyleConfig,
}

impl OutputConfig {
    pub fn format_str(&self, content: impl ToString) -> String {
        let prefix = self.prefix.style(&self.style_prefix);
        let suffix = self.suffix.style(&self.style_suffix);
        let content = content.to_string().style(&self.style_content);
        if self.description.is_empty() {
            return format!("{prefix}{content}{suffix}");
        }
        let description = self.description.style(&self.style_description);
        format!("{prefix}{description} {content}{suffix}")
    }

    pub fn format_vec(&self, content: &[impl ToString]) -> String {
        let separator = self.separator.style(&self.style_separator);
        let joined = content
            .iter()
            .map(|x| x.to_string().style(&self.style_content))
            .collect::<Vec<_>>()
            .join(&separator);
        let prefix = self.prefix.style(&self.style_prefix);
        let suffix = self.suffix.style(&self.style_suffix);
        if self.description.is_empty() {
            return format!("{prefix}{joined}{suffix}");
        }
        let description = self.description.style(&self.style_description);
        format!("{prefix}{description} {joined}{suffix}")
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            prefix:            "".into(),
            suffix:            "".into(),
            description:       "".into(),
            separator:         ", ".into(),
            style_prefix:      StyleConfig::default(),
            style_suffix:      StyleConfig::default(),
            style_description: StyleConfig {
                bold: true,
                ..StyleConfig::default()
            },
            style_separator:   StyleConfig::default(),
            style_content:     StyleConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub api_base_url:         String,
    pub listen_addr:          String,
    pub history_file:         PathBuf,
    pub token:                Option<String>,
    pub token_file:           Option<PathBuf>,
    pub request_timeout_secs: Option<u64>,
    pub output_title:         OutputConfig,
    pub output_author:        OutputConfig,
    pub output_genre:         OutputConfig,
    pub output_rating:        OutputConfig,
    pub output_cover:         OutputConfig,
    pub output_heading:       OutputConfig,
    pub output_edition:       OutputConfig,
    pub output_review:        OutputConfig,
    pub output_username:      OutputConfig,
    pub output_link:          OutputConfig,
    pub output_placeholder:   OutputConfig,
    pub output_error:         OutputConfig,
}

impl Config {
    pub fn default_as_string() -> Result<String> {
        Ok(toml::to_string(&Self::default())?)
    }

    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn read_config() -> Result<Self> {
        Ok(Self::figment().extract()?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url:         "http://localhost:5000".into(),
            listen_addr:          "127.0.0.1:3000".into(),
            history_file:         PathBuf::from(".bookview_history"),
            token:                None,
            token_file:           None,
            request_timeout_secs: None,
            output_title:         OutputConfig {
                style_content: StyleConfig {
                    color: COLOR_TITLE,
                    bold: true,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_author:        OutputConfig {
                description: "Author:".into(),
                style_content: StyleConfig {
                    color: COLOR_AUTHOR,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_genre:         OutputConfig {
                description: "Genre:".into(),
                style_content: StyleConfig {
                    color: COLOR_GENRE,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_rating:        OutputConfig {
                description: "Average Rating:".into(),
                style_content: StyleConfig {
                    color: COLOR_RATING,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_cover:         OutputConfig {
                description: "Cover:".into(),
                style_content: StyleConfig {
                    color: COLOR_LINK,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_heading:       OutputConfig {
                style_content: StyleConfig {
                    color: COLOR_HEADING,
                    bold: true,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_edition:       OutputConfig {
                separator: " | ".into(),
                style_separator: StyleConfig {
                    color: COLOR_DIMMED,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_review:        OutputConfig {
                description: "Rating:".into(),
                style_content: StyleConfig {
                    color: COLOR_RATING,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_username:      OutputConfig {
                style_content: StyleConfig {
                    color: COLOR_USERNAME,
                    bold: true,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_link:          OutputConfig {
                prefix: "(".into(),
                suffix: ")".into(),
                style_content: StyleConfig {
                    color: COLOR_LINK,
                    italic: true,
                    ..StyleConfig::default()
                },
                style_prefix: StyleConfig {
                    color: COLOR_DIMMED,
                    ..StyleConfig::default()
                },
                style_suffix: StyleConfig {
                    color: COLOR_DIMMED,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_placeholder:   OutputConfig {
                style_content: StyleConfig {
                    color: COLOR_DIMMED,
                    italic: true,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_error:         OutputConfig {
                description: "Error:".into(),
                style_content: StyleConfig {
                    color: COLOR_ERROR,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_round_trip_through_toml() {
        let s = Config::default_as_string().unwrap();
        let parsed: Config = toml::from_str(&s).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn file_and_env_override_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                api_base_url = "http://books.example:8080/api"
                request_timeout_secs = 5
                "#,
            )?;
            jail.set_env("BOOKVIEW_TOKEN", "from-env");
            let config: Config = Config::figment().extract()?;
            assert_eq!(config.api_base_url, "http://books.example:8080/api");
            assert_eq!(config.request_timeout_secs, Some(5));
            assert_eq!(config.token.as_deref(), Some("from-env"));
            assert_eq!(config.listen_addr, "127.0.0.1:3000");
            Ok(())
        });
    }
}
