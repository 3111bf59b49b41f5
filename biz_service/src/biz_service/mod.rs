pub mod country_neighbour_service;
pub mod country_service;
