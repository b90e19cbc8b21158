//! Client side of the remote processing service.
//!
//! Each call builds a [`ServiceRequest`] (endpoint path, query pairs and
//! multipart parts) and hands it to a [`Transport`], which owns the actual
//! HTTP exchange:
//!
//! ```text
//! Document ──► *_request() ──► ServiceRequest ──► Transport::send ──► ServiceResponse
//!                                                                        │
//!                                      ServiceOutput / Document  ◄───────┘
//! ```
//!
//! Non-2xx responses become [`ServiceError::Status`]; nothing is retried.

mod endpoint;
mod params;
mod request;

pub use endpoint::{
    assign_pens_request, clean_pixelart_request, depth_lines_request, hatch_request,
    hatch_svg_request, layout_request, pixelart_to_svg_request, stroke_colors_to_layers_request,
    vectorize_request, Endpoint, Image,
};
pub use params::{
    HatchParams, LayoutParams, PixelartParams, VectorizeMode, VectorizeParams,
    CLEAN_PIXELART_COLORS,
};
pub use request::{Part, ServiceRequest};

use thiserror::Error;
use url::Url;

use crate::svg::{Document, SvgError};

/// Service root used when nothing is configured.
pub const DEFAULT_URL: &str = "http://localhost:8000";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("service responded with HTTP {0}")]
    Status(u16),
    #[error("invalid service url")]
    Url(#[from] url::ParseError),
    #[error("service returned malformed SVG")]
    Svg(#[from] SvgError),
    #[error("request failed")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Raw reply of one service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResponse {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl ServiceResponse {
    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_svg(&self) -> bool {
        self.content_type.starts_with("image/svg")
    }
}

/// Sends a request to `url` and returns the reply, whatever its status.
pub trait Transport {
    fn send(&self, url: &Url, request: &ServiceRequest) -> Result<ServiceResponse, ServiceError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, url: &Url, request: &ServiceRequest) -> Result<ServiceResponse, ServiceError> {
        (**self).send(url, request)
    }
}

/// Result of an endpoint that may answer with either SVG or a raster image.
#[derive(Debug, Clone)]
pub enum ServiceOutput {
    Svg(Document),
    Raster { content_type: String, bytes: Vec<u8> },
}

impl ServiceOutput {
    fn from_response(response: ServiceResponse) -> Result<Self, ServiceError> {
        if response.is_svg() {
            Ok(ServiceOutput::Svg(Document::parse(&response.body)?))
        } else {
            Ok(ServiceOutput::Raster {
                content_type: response.content_type,
                bytes: response.body,
            })
        }
    }
}

/// Processing service bound to a root URL and a transport.
pub struct Service<T> {
    base: Url,
    transport: T,
}

impl<T: Transport> Service<T> {
    pub fn new(base: Url, transport: T) -> Self {
        Self { base, transport }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Send `request` and fail on a non-2xx status.
    pub fn send(&self, request: &ServiceRequest) -> Result<ServiceResponse, ServiceError> {
        let url = request.url(&self.base)?;
        crate::debug!("service"; "POST {}", url);

        let response = self.transport.send(&url, request)?;
        if !response.is_success() {
            crate::log!("error"; "{} answered HTTP {}", request.path, response.status);
            return Err(ServiceError::Status(response.status));
        }
        Ok(response)
    }

    fn send_svg(&self, request: &ServiceRequest) -> Result<Document, ServiceError> {
        let response = self.send(request)?;
        Ok(Document::parse(&response.body)?)
    }

    /// Preview mode answers with a raster image, production with SVG.
    pub fn vectorize(
        &self,
        image: Image,
        params: &VectorizeParams,
    ) -> Result<ServiceOutput, ServiceError> {
        ServiceOutput::from_response(self.send(&vectorize_request(image, params))?)
    }

    pub fn hatch(&self, image: Image) -> Result<ServiceOutput, ServiceError> {
        ServiceOutput::from_response(self.send(&hatch_request(image))?)
    }

    /// Hatch the filled shapes of `doc`; `doc` itself is not modified.
    pub fn hatch_svg(&self, doc: &Document, params: &HatchParams) -> Result<Document, ServiceError> {
        self.send_svg(&hatch_svg_request(doc, params))
    }

    pub fn layout(&self, doc: &Document, params: &LayoutParams) -> Result<Document, ServiceError> {
        self.send_svg(&layout_request(doc, params))
    }

    /// Returns the cleaned image as raw bytes.
    pub fn clean_pixelart(&self, image: Image) -> Result<ServiceResponse, ServiceError> {
        self.send(&clean_pixelart_request(image))
    }

    pub fn pixelart_to_svg(
        &self,
        image: Image,
        params: &PixelartParams,
    ) -> Result<Document, ServiceError> {
        self.send_svg(&pixelart_to_svg_request(image, params))
    }

    pub fn depth_lines(&self, image: Image, mask: Image) -> Result<Document, ServiceError> {
        self.send_svg(&depth_lines_request(image, mask))
    }

    pub fn stroke_colors_to_layers(&self, doc: &Document) -> Result<Document, ServiceError> {
        self.send_svg(&stroke_colors_to_layers_request(doc))
    }

    pub fn assign_pens<S: AsRef<str>>(
        &self,
        doc: &Document,
        pen_ids: &[S],
    ) -> Result<Document, ServiceError> {
        self.send_svg(&assign_pens_request(doc, pen_ids))
    }
}
