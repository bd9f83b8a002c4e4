pub const STARWARS_SCHEMA: &str = include_str!("starwars_schema.graphql");
pub const SIMPLE_QUERY: &str = include_str!("simple_query.graphql");
pub const COMPLEX_QUERY: &str = include_str!("complex_query.graphql");

pub mod operations;
pub mod schema;
