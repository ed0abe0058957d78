mod occurrence_tests;
mod upload_tests;
