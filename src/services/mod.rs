pub mod city_service;
pub mod restaurant_service;

pub use city_service::CityService;
pub use restaurant_service::RestaurantService;
