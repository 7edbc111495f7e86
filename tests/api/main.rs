//! HTTP API integration tests.

mod support;
