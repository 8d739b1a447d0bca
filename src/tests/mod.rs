mod model_tests;
mod query_tests;
