use crate::directive::CorrelationToken;
use lazy_static::lazy_static;
use log::{debug, warn};
use std::{env, ffi::OsString};

const LEARN_MORE_PROMPTS_VAR: &str = "ISP_LEARN_MORE_PROMPTS";
const CORRELATION_TOKEN_VAR: &str = "ISP_CORRELATION_TOKEN";

const DEFAULT_LEARN_MORE_PROMPTS: [&str; 4] = [
    "Want to learn more about it?",
    "Should I tell you more about it?",
    "Want to learn about it?",
    "Interested in learning more about it?",
];

lazy_static! {
    /// Read from the process environment the first time it is touched.
    pub static ref CONFIG: Config = Config::from_env();
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub learn_more_prompts: Vec<String>,
    pub correlation_token: CorrelationToken,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            learn_more_prompts: default_learn_more_prompts(),
            correlation_token: CorrelationToken::Unique,
        }
    }
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_os_vars(
            [LEARN_MORE_PROMPTS_VAR, CORRELATION_TOKEN_VAR]
                .iter()
                .filter_map(|key| env::var_os(key).map(|value| (*key, value))),
        )
    }

    fn from_os_vars<'a, I>(vars: I) -> Config
    where
        I: IntoIterator<Item = (&'a str, OsString)>,
    {
        Config::from_vars(
            vars.into_iter()
                .filter_map(|(key, value)| match value.into_string() {
                    Ok(value) => Some((key, value)),
                    Err(value) => {
                        warn!("{} is not valid unicode ({:?}), ignoring it", key, value);
                        None
                    }
                }),
        )
    }

    /// Build a config from key / value pairs, ignoring keys it doesn't know.
    ///
    /// `ISP_LEARN_MORE_PROMPTS` holds `|` separated prompts, blank entries are
    /// skipped. `ISP_CORRELATION_TOKEN` is either `unique` or `literal`.
    pub fn from_vars<I, K, V>(vars: I) -> Config
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Config::default();

        for (key, value) in vars {
            let value = value.as_ref();
            match key.as_ref() {
                LEARN_MORE_PROMPTS_VAR => {
                    let prompts = parse_prompts(value);
                    if prompts.is_empty() {
                        warn!(
                            "{} has no usable prompts, keeping the defaults",
                            LEARN_MORE_PROMPTS_VAR
                        );
                    } else {
                        config.learn_more_prompts = prompts;
                    }
                }
                CORRELATION_TOKEN_VAR => match value.trim().to_lowercase().as_str() {
                    "unique" => config.correlation_token = CorrelationToken::Unique,
                    "literal" => config.correlation_token = CorrelationToken::Literal,
                    other => {
                        warn!(
                            "Unknown {} value {:?}, using unique tokens",
                            CORRELATION_TOKEN_VAR, other
                        );
                        config.correlation_token = CorrelationToken::Unique;
                    }
                },
                _ => {}
            }
        }

        debug!("Loaded config: {:?}", config);
        config
    }
}

fn default_learn_more_prompts() -> Vec<String> {
    DEFAULT_LEARN_MORE_PROMPTS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn parse_prompts(value: &str) -> Vec<String> {
    value
        .split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
