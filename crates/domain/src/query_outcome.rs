use std::fmt;

/// How a query was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryRoute {
    /// Answered from the record store.
    Local,
    /// No local match; handed to the upstream resolvers.
    Proxied,
    /// No local match and forwarding is disabled.
    Terminal,
}

impl QueryRoute {
    pub fn unmatched(forwarding_enabled: bool) -> Self {
        if forwarding_enabled {
            QueryRoute::Proxied
        } else {
            QueryRoute::Terminal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryRoute::Local => "local",
            QueryRoute::Proxied => "proxied",
            QueryRoute::Terminal => "terminal",
        }
    }

    pub fn marker(&self) -> char {
        match self {
            QueryRoute::Local => 'O',
            QueryRoute::Proxied => 'P',
            QueryRoute::Terminal => 'T',
        }
    }
}

impl fmt::Display for QueryRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final outcome of a query as seen by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryOutcome {
    Success,
    Failure,
}

impl QueryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, QueryOutcome::Success)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryOutcome::Success => "success",
            QueryOutcome::Failure => "failure",
        }
    }

    pub fn marker(&self) -> char {
        match self {
            QueryOutcome::Success => 'S',
            QueryOutcome::Failure => 'F',
        }
    }
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
