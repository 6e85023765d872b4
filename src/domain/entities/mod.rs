//! Domain Entities
//!
//! - `UploadRequest` - files and destination template for one upload
//! - `PathTemplate` - destination path with `{Key}` placeholders
//! - `UploadReport` - what a finished upload transferred

mod path_template;
mod upload_report;
mod upload_request;

pub use path_template::{PathTemplate, PlaceholderToken};
pub use upload_report::{UploadReport, UploadedFile};
pub use upload_request::{remote_file_name, UploadRequest};
