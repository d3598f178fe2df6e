//! API Integration Tests

mod application_tests;
mod company_tests;
mod health_tests;
mod job_tests;
mod page_tests;
