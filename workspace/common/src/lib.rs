//! Common transport-layer types shared between the chat frontend and the
//! query service. These structs mirror the service's request/response
//! payloads so the frontend can deserialize API responses without
//! duplicating shapes. The chart merge and the transcript state machine
//! live here too, so they stay testable without a browser.

mod chart;
mod query;
mod transcript;

pub use chart::{
    merge_rows, ChartKind, ChartSpec, Dataset, DisplayRow, ForecastPoint, ForecastSeries,
    FORECAST_FIELD,
};
pub use query::{QueryRequest, QueryResponse, Record};
pub use transcript::{ChatAction, ChatState, EntryContent, Speaker, TranscriptEntry};
