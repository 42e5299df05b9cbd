//! Wire and domain models for the analysis service.
//!
//! - `result`: the `AnalysisResult` record returned for one analyzed URL
//! - `response`: the request body and the response envelope, decoded once into
//!   an `AnalysisOutcome`

mod response;
mod result;

pub use response::{AnalysisOutcome, AnalysisRequest};
pub use result::{
    AnalysisResult, HeadingsCount, PageMetadata, SecurityHeaders, SecurityInfo, SocialLinks,
};
