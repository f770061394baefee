use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;

use chewcheck_api::application::http::server::http_server::{router, state};
use chewcheck_api::args::Args;

pub fn server_with_args(argv: &[&str]) -> TestServer {
    let mut full_argv = vec!["chewcheck-api"];
    full_argv.extend_from_slice(argv);
    // Shield the tests from an OPENAI_API_KEY in the environment; an
    // empty key leaves the vision fallback unconfigured.
    full_argv.extend_from_slice(&["--openai-api-key", ""]);

    let args = Arc::new(Args::parse_from(full_argv));
    let state = state(args).expect("failed to build app state");
    let router = router(state).expect("failed to build router");

    TestServer::new(router).expect("failed to start test server")
}

/// Server without a classifier endpoint: analyze requests are rejected
/// as unavailable.
pub fn server() -> TestServer {
    server_with_args(&[])
}

/// Server pointed at a classifier endpoint nothing listens on: analyze
/// requests degrade to the unknown-food fallback.
pub fn server_with_unreachable_classifier() -> TestServer {
    server_with_args(&["--classifier-endpoint", "http://127.0.0.1:9"])
}
