#![allow(dead_code)]

use wordscope_resolve::{NameResolver, ResolverConfig, SourceText, SourceToken};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A resolver with an empty root scope and `names` defined in the global scope.
pub fn resolver_with(names: &[&str]) -> NameResolver {
    init_logging();
    let mut resolver = NameResolver::with_config(ResolverConfig::default().without_builtins());
    for name in names {
        resolver.define_name(*name);
    }
    resolver
}

pub fn words(text: &str) -> Vec<SourceToken> {
    SourceText::new(text).split_words()
}
