use tracing_subscriber::EnvFilter;

use crate::env::get_env_bool;

pub fn init() {
    // stdout carries exactly one ABI-encoded value per invocation, so logs go to stderr.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);

    if get_env_bool("LOG_JSON").unwrap_or(false) {
        builder.json().init();
    } else {
        builder.init();
    };
}
