use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Module name under which product media is stored.
pub const PRODUCT_MEDIA_MODULE: &str = "Product";

/// A media record attached to an entity of some module.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MediaFile {
    /// Unique identifier of the media record.
    pub id: i32,
    /// Module the record belongs to, e.g. `"Product"`.
    pub module: String,
    /// Identifier of the owning entity within the module.
    pub module_id: i32,
    /// Original file name.
    pub file_name: String,
    /// Storage path of the file.
    pub file_path: String,
    /// Optional MIME type recorded at upload time.
    pub content_type: Option<String>,
    /// Timestamp for when the record was created.
    pub created_at: NaiveDateTime,
}
