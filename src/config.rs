use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub max_questions: usize,
    pub verbose_parse_logging: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            max_questions: env::var("QUIZ_MAX_QUESTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            verbose_parse_logging: env::var("QUIZ_VERBOSE_PARSE_LOGGING")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            max_questions: 100,
            verbose_parse_logging: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(config.max_questions > 0);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.max_questions, 100);
        assert!(!config.verbose_parse_logging);
    }
}
