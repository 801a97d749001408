use std::collections::HashMap;

use diesel::dsl::count_star;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::area::{Area as DomainArea, AreaSummary, NewArea as DomainNewArea};
use crate::models::area::{Area as DbArea, NewArea as DbNewArea};
use crate::repository::errors::RepositoryResult;
use crate::repository::{AreaReader, AreaWriter, DieselRepository};

impl AreaReader for DieselRepository {
    fn list_areas(&self, restaurant_id: i32) -> RepositoryResult<Vec<AreaSummary>> {
        use crate::schema::areas;

        let mut conn = self.conn()?;

        let rows = areas::table
            .filter(areas::restaurant_id.eq(restaurant_id))
            .order((areas::sort_order.asc(), areas::created_at.desc()))
            .load::<DbArea>(&mut conn)?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let mut counts = count_tables_per_area(&mut conn, restaurant_id)?;

        let summaries = rows
            .into_iter()
            .map(|row| {
                let table_count = counts.remove(&row.id).unwrap_or_default();
                AreaSummary {
                    area: row.into(),
                    table_count,
                }
            })
            .collect();

        Ok(summaries)
    }

    fn get_area_by_id(
        &self,
        area_id: i32,
        restaurant_id: i32,
    ) -> RepositoryResult<Option<DomainArea>> {
        use crate::schema::areas;

        let mut conn = self.conn()?;

        let area = areas::table
            .filter(areas::id.eq(area_id))
            .filter(areas::restaurant_id.eq(restaurant_id))
            .first::<DbArea>(&mut conn)
            .optional()?;

        Ok(area.map(DomainArea::from))
    }

    fn get_area_by_name(
        &self,
        restaurant_id: i32,
        name: &str,
    ) -> RepositoryResult<Option<DomainArea>> {
        use crate::schema::areas;

        let mut conn = self.conn()?;

        let area = areas::table
            .filter(areas::restaurant_id.eq(restaurant_id))
            .filter(areas::name.eq(name))
            .first::<DbArea>(&mut conn)
            .optional()?;

        Ok(area.map(DomainArea::from))
    }
}

impl AreaWriter for DieselRepository {
    fn create_area(&self, new_area: &DomainNewArea) -> RepositoryResult<DomainArea> {
        use crate::schema::areas;

        let mut conn = self.conn()?;

        let insertable = DbNewArea::from(new_area);

        let created = diesel::insert_into(areas::table)
            .values(&insertable)
            .get_result::<DbArea>(&mut conn)?;

        Ok(created.into())
    }
}

fn count_tables_per_area(
    conn: &mut SqliteConnection,
    restaurant_id: i32,
) -> RepositoryResult<HashMap<i32, i64>> {
    use crate::schema::dining_tables;

    let counts = dining_tables::table
        .filter(dining_tables::restaurant_id.eq(restaurant_id))
        .group_by(dining_tables::area_id)
        .select((dining_tables::area_id, count_star()))
        .load::<(i32, i64)>(conn)?;

    Ok(counts.into_iter().collect())
}
