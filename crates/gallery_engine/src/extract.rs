use gallery_logging::gallery_debug;
use url::Url;

/// Default cap on extracted URLs per submission.
pub const DEFAULT_URL_LIMIT: usize = 50;
/// Cap used by the large-list variant.
pub const LARGE_LIST_URL_LIMIT: usize = 500;

/// How raw input is cut into candidate tokens. Both policies assume one URL
/// per token; `Newlines` merely tolerates spaces inside a pasted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitPolicy {
    Whitespace,
    Newlines,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractSettings {
    pub limit: usize,
    pub split: SplitPolicy,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_URL_LIMIT,
            split: SplitPolicy::Whitespace,
        }
    }
}

/// Extraction result: the surviving ordered list plus how many tokens failed
/// URL validation (dropped silently as far as the user is concerned).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractReport {
    pub urls: Vec<String>,
    pub dropped: usize,
}

/// Turns raw freeform text into an ordered list of syntactically valid URLs,
/// truncated to `settings.limit`. Purely syntactic; no network access.
pub fn extract_urls(raw: &str, settings: &ExtractSettings) -> ExtractReport {
    let tokens: Vec<&str> = match settings.split {
        SplitPolicy::Whitespace => raw.split_whitespace().collect(),
        SplitPolicy::Newlines => raw.lines().collect(),
    };

    let mut report = ExtractReport::default();
    for token in tokens {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if Url::parse(token).is_err() {
            gallery_debug!("Dropping token that is not an absolute URL: {token}");
            report.dropped += 1;
            continue;
        }
        if report.urls.len() < settings.limit {
            report.urls.push(token.to_owned());
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::{extract_urls, ExtractSettings, SplitPolicy};

    #[test]
    fn newline_policy_keeps_inner_spaces_within_a_line() {
        let settings = ExtractSettings {
            limit: 10,
            split: SplitPolicy::Newlines,
        };
        // A line with an inner space is one token; it fails URL validation
        // only if the parser rejects it.
        let report = extract_urls("https://a.example.com/x\nnot a url\n", &settings);
        assert_eq!(report.urls, vec!["https://a.example.com/x".to_string()]);
        assert_eq!(report.dropped, 1);
    }

    #[test]
    fn whitespace_policy_splits_every_run() {
        let settings = ExtractSettings::default();
        let report = extract_urls("https://a.example.com \t https://b.example.com", &settings);
        assert_eq!(report.urls.len(), 2);
        assert_eq!(report.dropped, 0);
    }

    #[test]
    fn limit_zero_is_a_valid_degenerate_configuration() {
        let settings = ExtractSettings {
            limit: 0,
            split: SplitPolicy::Whitespace,
        };
        let report = extract_urls("https://a.example.com", &settings);
        assert!(report.urls.is_empty());
        assert_eq!(report.dropped, 0);
    }
}
