mod graphql_parser_property_tests;
mod graphql_parser_tests;
mod graphql_parser_value_tests;
mod graphql_tokenizer_tests;
mod utils;
