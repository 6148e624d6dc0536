//! Endpoint and query-string description of one upstream request.

use std::fmt;

/// Upstream endpoints used by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Sessions,
    Drivers,
    Position,
}

impl Endpoint {
    /// Path relative to the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::Sessions => "sessions",
            Self::Drivers => "drivers",
            Self::Position => "position",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A GET request: endpoint plus ordered, scalar query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    endpoint: Endpoint,
    params: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            params: Vec::new(),
        }
    }

    /// Append a query parameter.
    pub fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Value of the first parameter named `key`.
    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}
