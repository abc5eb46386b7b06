pub mod engine;
pub mod extract;
pub mod request;
pub mod status;

pub use crate::domain::model::FetchReport;
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
