use diesel::prelude::*;

use crate::domain::restaurant::{
    NewRestaurant as DomainNewRestaurant, Restaurant as DomainRestaurant,
};
use crate::models::restaurant::{NewRestaurant as DbNewRestaurant, Restaurant as DbRestaurant};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, RestaurantReader, RestaurantWriter};

impl RestaurantReader for DieselRepository {
    fn list_restaurants(&self) -> RepositoryResult<Vec<DomainRestaurant>> {
        use crate::schema::restaurants;

        let mut conn = self.conn()?;

        let rows = restaurants::table
            .order(restaurants::id.asc())
            .load::<DbRestaurant>(&mut conn)?;

        Ok(rows.into_iter().map(DomainRestaurant::from).collect())
    }

    fn get_restaurant_by_id(&self, id: i32) -> RepositoryResult<Option<DomainRestaurant>> {
        use crate::schema::restaurants;

        let mut conn = self.conn()?;

        let restaurant = restaurants::table
            .filter(restaurants::id.eq(id))
            .first::<DbRestaurant>(&mut conn)
            .optional()?;

        Ok(restaurant.map(DomainRestaurant::from))
    }

    fn get_restaurant_by_username(
        &self,
        username: &str,
    ) -> RepositoryResult<Option<DomainRestaurant>> {
        use crate::schema::restaurants;

        let mut conn = self.conn()?;

        let restaurant = restaurants::table
            .filter(restaurants::username.eq(username))
            .first::<DbRestaurant>(&mut conn)
            .optional()?;

        Ok(restaurant.map(DomainRestaurant::from))
    }
}

impl RestaurantWriter for DieselRepository {
    fn create_restaurant(
        &self,
        new_restaurant: &DomainNewRestaurant,
    ) -> RepositoryResult<DomainRestaurant> {
        use crate::schema::restaurants;

        let mut conn = self.conn()?;

        let insertable = DbNewRestaurant::from(new_restaurant);

        let created = diesel::insert_into(restaurants::table)
            .values(&insertable)
            .get_result::<DbRestaurant>(&mut conn)?;

        Ok(created.into())
    }
}
