//! Checks the layout of the test suite against the source tree
