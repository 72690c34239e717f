//! Unit tests for the queue module
