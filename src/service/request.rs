//! Request shapes sent to the processing service.

use serde::Serialize;
use url::Url;

/// One multipart form field carrying a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Part {
    pub field: &'static str,
    pub filename: String,
    pub content_type: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl Part {
    pub fn new(
        field: &'static str,
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            field,
            filename: filename.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// An SVG document uploaded as `input.svg`.
    pub fn svg(field: &'static str, bytes: Vec<u8>) -> Self {
        Self::new(field, "input.svg", "image/svg+xml", bytes)
    }
}

/// Endpoint path, query pairs and multipart body of one service call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceRequest {
    /// Path relative to the service root, e.g. `api/hatch-svg`.
    pub path: &'static str,
    pub query: Vec<(String, String)>,
    pub parts: Vec<Part>,
}

impl ServiceRequest {
    pub fn new(path: &'static str) -> Self {
        Self {
            path,
            query: Vec::new(),
            parts: Vec::new(),
        }
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    /// Full request URL under `base`.
    ///
    /// `base` is treated as a directory, so `http://host/prefix` and
    /// `http://host/prefix/` both resolve to `http://host/prefix/api/..`.
    pub fn url(&self, base: &Url) -> Result<Url, url::ParseError> {
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut url = base.join(self.path)?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_path_and_query() {
        let base = Url::parse("http://localhost:8000").unwrap();
        let request = ServiceRequest::new("api/layout")
            .query("width", 264)
            .query("landscape", false);
        assert_eq!(
            request.url(&base).unwrap().as_str(),
            "http://localhost:8000/api/layout?width=264&landscape=false"
        );
    }

    #[test]
    fn test_url_keeps_base_prefix() {
        let request = ServiceRequest::new("api/hatch");
        for base in ["http://host/plot", "http://host/plot/"] {
            let base = Url::parse(base).unwrap();
            assert_eq!(request.url(&base).unwrap().as_str(), "http://host/plot/api/hatch");
        }
    }

    #[test]
    fn test_url_encodes_query_values() {
        let base = Url::parse("http://host/").unwrap();
        let request = ServiceRequest::new("api/hatch-svg").query("unit", "m m");
        assert_eq!(
            request.url(&base).unwrap().query(),
            Some("unit=m+m")
        );
    }

    #[test]
    fn test_svg_part() {
        let part = Part::svg("file", b"<svg/>".to_vec());
        assert_eq!(part.filename, "input.svg");
        assert_eq!(part.content_type, "image/svg+xml");
    }
}
