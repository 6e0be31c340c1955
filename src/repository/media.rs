use diesel::prelude::*;

use crate::{
    domain::media::MediaFile as DomainMediaFile,
    models::media::MediaFile as DbMediaFile,
    repository::{DieselRepository, MediaReader},
    repository::errors::RepositoryResult,
    schema::media_files,
};

impl MediaReader for DieselRepository {
    fn get_media_by_module_id(
        &self,
        module: &str,
        module_id: i32,
    ) -> RepositoryResult<Vec<DomainMediaFile>> {
        let mut conn = self.conn()?;
        let rows = media_files::table
            .filter(media_files::module.eq(module))
            .filter(media_files::module_id.eq(module_id))
            .order(media_files::id.asc())
            .load::<DbMediaFile>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn get_media_by_module_ids(
        &self,
        module: &str,
        module_ids: &[i32],
    ) -> RepositoryResult<Vec<DomainMediaFile>> {
        if module_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn()?;
        let rows = media_files::table
            .filter(media_files::module.eq(module))
            .filter(media_files::module_id.eq_any(module_ids))
            .order(media_files::id.asc())
            .load::<DbMediaFile>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
