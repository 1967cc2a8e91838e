//! Base server URL

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Error;

/// Base URL of a PowerAuth server, e.g. `https://api.example.com/enrollment-server`
///
/// Scheme and host are lowercased and trailing slashes are removed. The path keeps its case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BaseUrl(String);

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BaseUrl::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl BaseUrl {
    fn format_url(url: &str) -> Result<String, Error> {
        let url = url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(Error::InvalidUrl);
        }

        let (scheme, rest) = url.split_once("://").ok_or(Error::InvalidUrl)?;
        let (host, path) = match rest.split_once('/') {
            Some((host, path)) => (host, path),
            None => (rest, ""),
        };
        if scheme.is_empty() || host.is_empty() {
            return Err(Error::InvalidUrl);
        }

        let mut formatted_url = format!("{}://{}", scheme.to_lowercase(), host.to_lowercase());
        if !path.is_empty() {
            formatted_url.push('/');
            formatted_url.push_str(path);
        }

        // Reject anything the url crate cannot represent
        Url::parse(&formatted_url)?;

        Ok(formatted_url)
    }

    /// Append an address onto the base URL
    ///
    /// Leading slashes of `address` are ignored, so `/pa/activation/status` and
    /// `pa/activation/status` resolve to the same URL and never replace the base path. A query
    /// or fragment carried by `address` is kept as such instead of becoming part of the path.
    pub fn join(&self, address: &str) -> Result<Url, Error> {
        let mut url = Url::parse(&self.0)?;

        let (address, fragment) = match address.split_once('#') {
            Some((address, fragment)) => (address, Some(fragment)),
            None => (address, None),
        };
        let (path, query) = match address.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (address, None),
        };
        let path = path.trim_start_matches('/');

        let base_path = url.path();
        let joined_path = if base_path.ends_with('/') {
            format!("{base_path}{path}")
        } else {
            format!("{base_path}/{path}")
        };

        url.set_path(&joined_path);
        if query.is_some() {
            url.set_query(query);
        }
        if fragment.is_some() {
            url.set_fragment(fragment);
        }
        Ok(url)
    }
}

impl FromStr for BaseUrl {
    type Err = Error;

    fn from_str(url: &str) -> Result<Self, Self::Err> {
        Self::format_url(url).map(Self)
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_trailing_slashes() {
        let very_unformatted_url = "http://url-to-check.com////";
        let unformatted_url = "http://url-to-check.com/";
        let formatted_url = "http://url-to-check.com";

        let very_trimmed_url = BaseUrl::from_str(very_unformatted_url).unwrap();
        assert_eq!("http://url-to-check.com", very_trimmed_url.to_string());

        let trimmed_url = BaseUrl::from_str(unformatted_url).unwrap();
        assert_eq!("http://url-to-check.com", trimmed_url.to_string());

        let unchanged_url = BaseUrl::from_str(formatted_url).unwrap();
        assert_eq!("http://url-to-check.com", unchanged_url.to_string());
    }

    #[test]
    fn test_case_insensitive_host() {
        let url = BaseUrl::from_str("HTTPS://API.Example.COM/Enrollment-Server/").unwrap();
        assert_eq!("https://api.example.com/Enrollment-Server", url.to_string());
    }

    #[test]
    fn test_invalid_urls() {
        assert_eq!(BaseUrl::from_str(""), Err(Error::InvalidUrl));
        assert_eq!(BaseUrl::from_str("///"), Err(Error::InvalidUrl));
        assert_eq!(BaseUrl::from_str("api.example.com"), Err(Error::InvalidUrl));
        assert_eq!(BaseUrl::from_str("https://"), Err(Error::InvalidUrl));
    }

    #[test]
    fn test_join() {
        let url = BaseUrl::from_str("http://url-to-check.com").unwrap();
        assert_eq!(
            "http://url-to-check.com/pa/activation/status",
            url.join("/pa/activation/status").unwrap().to_string()
        );
        assert_eq!(
            "http://url-to-check.com/pa/activation/status",
            url.join("pa/activation/status").unwrap().to_string()
        );

        let url = BaseUrl::from_str("http://url-to-check.com/enrollment-server/").unwrap();
        assert_eq!(
            "http://url-to-check.com/enrollment-server/pa/v2/signature/validate",
            url.join("/pa/v2/signature/validate").unwrap().to_string()
        );
    }

    #[test]
    fn test_join_keeps_query_and_fragment() {
        let url = BaseUrl::from_str("https://api.example.com/srv").unwrap();

        let joined = url.join("/pa/token/remove?x=1").unwrap();
        assert_eq!("https://api.example.com/srv/pa/token/remove?x=1", joined.to_string());
        assert_eq!(joined.path(), "/srv/pa/token/remove");
        assert_eq!(joined.query(), Some("x=1"));

        let joined = url.join("pa/vault/unlock?a=1&b=2#section").unwrap();
        assert_eq!(
            "https://api.example.com/srv/pa/vault/unlock?a=1&b=2#section",
            joined.to_string()
        );
        assert_eq!(joined.fragment(), Some("section"));

        let joined = url.join("/pa/activation/status#top").unwrap();
        assert_eq!(joined.query(), None);
        assert_eq!(joined.fragment(), Some("top"));
    }

    #[test]
    fn test_serde() {
        let url: BaseUrl = serde_json::from_str(r#""https://Example.com/api/""#).unwrap();
        assert_eq!(url.to_string(), "https://example.com/api");
        assert_eq!(
            serde_json::to_string(&url).unwrap(),
            r#""https://example.com/api""#
        );

        let invalid: Result<BaseUrl, _> = serde_json::from_str(r#""example.com""#);
        assert!(invalid.is_err());
    }
}
