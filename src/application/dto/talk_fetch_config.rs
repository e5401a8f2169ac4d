//! # Talk Fetch Configuration DTO
//!
//! トーク収集設定のData Transfer Object

/// トーク収集設定
#[derive(Debug, Clone)]
pub struct TalkFetchConfig {
    /// このプレフィックスで始まるセッションURLだけを取得する
    pub session_url_prefix: String,
    /// 同時に取得するセッションページ数の上限
    pub max_concurrent_requests: usize,
}

impl TalkFetchConfig {
    /// 新しいトーク収集設定を作成します。
    ///
    /// 同時取得数は最低1に切り上げられます。
    ///
    /// ```
    /// use siamprog::application::dto::talk_fetch_config::TalkFetchConfig;
    ///
    /// let config = TalkFetchConfig::new("https://meetings.siam.org/sess".to_string(), 0);
    ///
    /// assert_eq!(config.max_concurrent_requests, 1);
    /// assert!(config.should_fetch("https://meetings.siam.org/sess/dsp_programsess.cfm?SESSIONCODE=1"));
    /// assert!(!config.should_fetch("#"));
    /// ```
    pub fn new(session_url_prefix: String, max_concurrent_requests: usize) -> Self {
        Self {
            session_url_prefix,
            max_concurrent_requests: max_concurrent_requests.max(1),
        }
    }

    /// セッションページを取得する対象か
    pub fn should_fetch(&self, session_url: &str) -> bool {
        session_url.starts_with(&self.session_url_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_fetch_prefix() {
        let config = TalkFetchConfig::new("https://meetings.siam.org/sess".to_string(), 10);

        assert!(config.should_fetch("https://meetings.siam.org/sess/dsp_programsess.cfm?SESSIONCODE=1"));
        assert!(!config.should_fetch("https://meetings.siam.org/program.cfm?CONFCODE=SODA25"));
        assert!(!config.should_fetch("#"));
    }

    #[test]
    fn test_concurrency_keeps_given_value() {
        let config = TalkFetchConfig::new(String::new(), 4);
        assert_eq!(config.max_concurrent_requests, 4);
    }
}
