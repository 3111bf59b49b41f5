pub mod country_entity;
pub mod country_neighbour_entity;
