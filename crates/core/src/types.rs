use std::collections::BTreeMap;

/// Key/value pairs produced by exactly one provider invocation.
///
/// Bundles are transient: a provider builds one, hands it to the environment
/// sink, and drops it. A `BTreeMap` keeps application order deterministic so a
/// failing write always leaves the same prefix of keys applied.
pub type Bundle = BTreeMap<String, String>;
