pub mod file_utils;
pub mod url_utils;

pub use file_utils::ReportFile;
pub use url_utils::validate_url;
