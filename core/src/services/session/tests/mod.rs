//! Tests for the login session coordinator
