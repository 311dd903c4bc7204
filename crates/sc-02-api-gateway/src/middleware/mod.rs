//! Middleware stack for the API Gateway.
//!
//! Layer order: Request → RequestSpan → Envelope → BodyLimit → Timeout → Handler

pub mod envelope;
pub mod timeout;
pub mod tracing;

pub use self::envelope::envelope_rejections;
pub use self::timeout::TimeoutLayer;
pub use self::tracing::RequestSpanLayer;
