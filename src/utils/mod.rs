//! Utility functions and helpers.

pub mod http;

use url::Url;

/// How a dataset location string should be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// `http` or `https` URL
    Remote(Url),
    /// Filesystem path, given directly or as a `file://` URL
    Local(std::path::PathBuf),
}

/// Classify a location string as a remote URL or a local path.
///
/// Anything that does not parse as an absolute URL with a known scheme is
/// treated as a path, so `db.json` and `C:\data\db.json` both stay local.
pub fn parse_location(location: &str) -> Location {
    match Url::parse(location) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Location::Remote(url),
        Ok(url) if url.scheme() == "file" => match url.to_file_path() {
            Ok(path) => Location::Local(path),
            Err(()) => Location::Local(location.into()),
        },
        _ => Location::Local(location.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_remote() {
        assert!(matches!(
            parse_location("https://example.com/db.json"),
            Location::Remote(_)
        ));
        assert!(matches!(
            parse_location("http://example.com/db.json"),
            Location::Remote(_)
        ));
    }

    #[test]
    fn test_parse_local() {
        assert_eq!(
            parse_location("data/db.json"),
            Location::Local("data/db.json".into())
        );
        assert_eq!(
            parse_location("/tmp/db.json"),
            Location::Local("/tmp/db.json".into())
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_parse_file_url() {
        assert_eq!(
            parse_location("file:///tmp/db.json"),
            Location::Local("/tmp/db.json".into())
        );
    }
}
