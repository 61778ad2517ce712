use std::path::PathBuf;

/// データファイルを指定する環境変数。
pub const DATA_FILE_ENV: &str = "LIBRARY_DATA_FILE";
pub const DEFAULT_DATA_FILE: &str = "books_data.json";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
}

impl Config {
    /// 優先順位: 第1引数 > `LIBRARY_DATA_FILE` > `books_data.json`
    pub fn from_env_and_args() -> Self {
        Self::resolve(
            std::env::args().nth(1),
            std::env::var(DATA_FILE_ENV).ok(),
        )
    }

    pub fn resolve(arg: Option<String>, env: Option<String>) -> Self {
        let data_file = arg
            .or(env)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
        Self { data_file }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arg_wins_over_env() {
        let c = Config::resolve(Some("a.json".into()), Some("b.json".into()));
        assert_eq!(c.data_file, PathBuf::from("a.json"));
    }

    #[test]
    fn env_used_without_arg() {
        let c = Config::resolve(None, Some("b.json".into()));
        assert_eq!(c.data_file, PathBuf::from("b.json"));
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(Config::resolve(None, None).data_file, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(
            Config::resolve(None, Some("  ".into())).data_file,
            PathBuf::from(DEFAULT_DATA_FILE)
        );
    }
}
