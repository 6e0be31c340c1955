use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::media::MediaFile as DomainMediaFile;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::media_files)]
pub struct MediaFile {
    pub id: i32,
    pub module: String,
    pub module_id: i32,
    pub file_name: String,
    pub file_path: String,
    pub content_type: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::media_files)]
pub struct NewMediaFile<'a> {
    pub module: &'a str,
    pub module_id: i32,
    pub file_name: &'a str,
    pub file_path: &'a str,
    pub content_type: Option<&'a str>,
}

impl From<MediaFile> for DomainMediaFile {
    fn from(value: MediaFile) -> Self {
        Self {
            id: value.id,
            module: value.module,
            module_id: value.module_id,
            file_name: value.file_name,
            file_path: value.file_path,
            content_type: value.content_type,
            created_at: value.created_at,
        }
    }
}
