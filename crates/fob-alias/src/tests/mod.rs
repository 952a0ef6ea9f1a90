//! Crate-level tests exercising the resolver, scanner and rewriter together.

mod rewrite_tests;
