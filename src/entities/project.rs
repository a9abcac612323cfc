use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub stars: u64,
    pub language: Option<String>,
}

/// Case-sensitive substring match, so `Template-Kit` is kept and `my-template` is not.
pub fn is_placeholder(name: &str) -> bool {
    name.contains("template") || name.contains("example")
}
