use diesel::prelude::*;

use crate::domain::table::{
    DiningTable as DomainDiningTable, DiningTableWithArea, NewDiningTable as DomainNewDiningTable,
};
use crate::models::table::{DiningTable as DbDiningTable, NewDiningTable as DbNewDiningTable};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, TableReader, TableWriter};

impl TableReader for DieselRepository {
    fn list_tables(&self, restaurant_id: i32) -> RepositoryResult<Vec<DiningTableWithArea>> {
        use crate::schema::{areas, dining_tables};

        let mut conn = self.conn()?;

        let rows = dining_tables::table
            .inner_join(areas::table)
            .filter(dining_tables::restaurant_id.eq(restaurant_id))
            .filter(areas::restaurant_id.eq(restaurant_id))
            .order(dining_tables::table_number.asc())
            .select((DbDiningTable::as_select(), areas::name))
            .load::<(DbDiningTable, String)>(&mut conn)?;

        let tables = rows
            .into_iter()
            .map(|(table, area_name)| DiningTableWithArea {
                table: table.into(),
                area_name,
            })
            .collect();

        Ok(tables)
    }

    fn get_table_by_number(
        &self,
        restaurant_id: i32,
        area_id: i32,
        table_number: &str,
    ) -> RepositoryResult<Option<DomainDiningTable>> {
        use crate::schema::dining_tables;

        let mut conn = self.conn()?;

        let table = dining_tables::table
            .filter(dining_tables::restaurant_id.eq(restaurant_id))
            .filter(dining_tables::area_id.eq(area_id))
            .filter(dining_tables::table_number.eq(table_number))
            .first::<DbDiningTable>(&mut conn)
            .optional()?;

        Ok(table.map(DomainDiningTable::from))
    }
}

impl TableWriter for DieselRepository {
    fn create_table(
        &self,
        new_table: &DomainNewDiningTable,
    ) -> RepositoryResult<DomainDiningTable> {
        use crate::schema::dining_tables;

        let mut conn = self.conn()?;

        let insertable = DbNewDiningTable::from(new_table);

        let created = diesel::insert_into(dining_tables::table)
            .values(&insertable)
            .get_result::<DbDiningTable>(&mut conn)?;

        Ok(created.into())
    }
}
