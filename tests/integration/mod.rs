//! Integration tests
//!
//! Each module drives one relay endpoint through an in-process actix service
//! against mocked vendor APIs.

mod voice_tests;
