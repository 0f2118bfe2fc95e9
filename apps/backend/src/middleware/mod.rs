pub mod open_cors;
pub mod request_trace;
pub mod structured_logger;
pub mod trace_span;

pub use open_cors::OpenCors;
pub use request_trace::RequestTrace;
pub use structured_logger::StructuredLogger;
pub use trace_span::TraceSpan;
