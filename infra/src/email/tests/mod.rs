//! Unit tests for the email module

mod mock_email_tests;
