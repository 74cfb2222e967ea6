use anyhow::Context as _;

/// Add context to document store errors
pub fn store_context(operation: &str, key: &str) -> String {
    format!("Failed to {} document: {}", operation, key)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Wrap result with document store context
pub fn with_store_context<T, E>(result: Result<T, E>, operation: &str, key: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| store_context(operation, key))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type))
}
