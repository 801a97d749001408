use crate::domain::restaurant::Restaurant;
use crate::repository::RestaurantReader;
use crate::services::ServiceResult;

/// How the API picks a restaurant when the caller does not name one.
///
/// An explicit id always wins. Otherwise the restaurant owned by
/// `fallback_username` is looked up, and `default_restaurant_id` is used when
/// the handle is unset, unknown, or the lookup fails. This is a testing
/// convenience and grants no access control of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantPolicy {
    pub fallback_username: Option<String>,
    pub default_restaurant_id: i32,
}

impl TenantPolicy {
    pub fn new(fallback_username: Option<String>, default_restaurant_id: i32) -> Self {
        Self {
            fallback_username,
            default_restaurant_id,
        }
    }

    /// Resolve the restaurant a request operates on.
    pub fn resolve<R>(&self, repo: &R, requested: Option<i32>) -> i32
    where
        R: RestaurantReader + ?Sized,
    {
        if let Some(id) = requested {
            return id;
        }

        let Some(username) = self.fallback_username.as_deref() else {
            return self.default_restaurant_id;
        };

        match repo.get_restaurant_by_username(username) {
            Ok(Some(restaurant)) => restaurant.id,
            Ok(None) => {
                log::debug!(
                    "Fallback user `{username}` not found, using restaurant {}",
                    self.default_restaurant_id
                );
                self.default_restaurant_id
            }
            Err(err) => {
                log::warn!("Failed to look up fallback user `{username}`: {err}");
                self.default_restaurant_id
            }
        }
    }
}

impl Default for TenantPolicy {
    fn default() -> Self {
        Self::new(None, crate::config::DEFAULT_RESTAURANT_ID)
    }
}

/// Lists every restaurant, oldest first.
pub fn list_restaurants<R>(repo: &R) -> ServiceResult<Vec<Restaurant>>
where
    R: RestaurantReader + ?Sized,
{
    Ok(repo.list_restaurants()?)
}
