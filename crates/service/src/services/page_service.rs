use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use models::page_content::{self, PageSectionInput};

use tracing::instrument;

use crate::errors::{db_err, ServiceError};

/// All sections of a page ordered by `sort_order`. Unknown page names are
/// rejected; a known page without sections yields an empty list.
pub async fn get_page(db: &DatabaseConnection, page: &str) -> Result<Vec<page_content::Model>, ServiceError> {
    let page = page_content::page(page)?;
    page_content::Entity::find()
        .filter(page_content::Column::Page.eq(page))
        .order_by_asc(page_content::Column::SortOrder)
        .order_by_asc(page_content::Column::Section)
        .all(db)
        .await
        .map_err(db_err)
}

async fn find_section(db: &DatabaseConnection, page: &str, section: &str) -> Result<Option<page_content::Model>, ServiceError> {
    page_content::Entity::find()
        .filter(page_content::Column::Page.eq(page))
        .filter(page_content::Column::Section.eq(section))
        .one(db)
        .await
        .map_err(db_err)
}

/// Create or overwrite one section. Returns the row and whether it was new.
#[instrument(skip(db, input))]
pub async fn upsert_section(db: &DatabaseConnection, page: &str, section: &str, input: PageSectionInput) -> Result<(page_content::Model, bool), ServiceError> {
    let page = page_content::page(page)?;
    let section = page_content::section(section)?;
    match find_section(db, &page, &section).await? {
        Some(existing) => {
            let mut am: page_content::ActiveModel = existing.into();
            input.apply(&mut am)?;
            Ok((am.update(db).await.map_err(db_err)?, false))
        }
        None => Ok((page_content::create(db, &page, &section, input).await?, true)),
    }
}

pub async fn delete_section(db: &DatabaseConnection, page: &str, section: &str) -> Result<(), ServiceError> {
    let page = page_content::page(page)?;
    let res = page_content::Entity::delete_many()
        .filter(page_content::Column::Page.eq(page))
        .filter(page_content::Column::Section.eq(section.trim()))
        .exec(db)
        .await
        .map_err(db_err)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("page section"));
    }
    Ok(())
}
