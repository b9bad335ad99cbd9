use serde::{Deserialize, Serialize};

/// One route registration, fully resolved against its enclosing groups.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: String,
    pub path: String,
    /// Non-empty group segments, outermost first.
    pub groups: Vec<String>,
    /// 1-based line of the registration call.
    pub line: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FileRoute {
    /// Path relative to the scanned workspace, `/`-separated.
    pub file: String,
    #[serde(flatten)]
    pub route: Route,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProjectRoutes {
    /// Project directory relative to the workspace, `.` for the workspace itself.
    pub root: String,
    pub routes: Vec<FileRoute>,
}
