mod chain;
mod env;

use raws3_core::{Context, StaticEnv};
use std::collections::HashMap;

pub fn create_test_context_with_env(envs: HashMap<String, String>) -> Context {
    let _ = env_logger::builder().is_test(true).try_init();

    Context::new().with_env(StaticEnv { envs })
}
