//! SPA route allow-list.
//!
//! Client-side routing owns these paths; the server only needs to know which
//! ones should receive the shell.

use clap::ValueEnum;

/// Built-in deployment route sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RouteProfile {
    /// Alerts, cases and playbooks console.
    #[default]
    Soc,
    /// Cyber inject request portal.
    Injects,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    exact: Vec<String>,
    prefixes: Vec<String>,
}

impl RouteTable {
    /// Builds a table. Every prefix must end in `/`.
    pub fn new<E, P>(exact: E, prefixes: P) -> Self
    where
        E: IntoIterator,
        E::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let exact = exact.into_iter().map(Into::into).collect();
        let prefixes = prefixes
            .into_iter()
            .map(|prefix| {
                let mut prefix: String = prefix.into();
                if !prefix.ends_with('/') {
                    prefix.push('/');
                }
                prefix
            })
            .collect();
        Self { exact, prefixes }
    }

    pub fn for_profile(profile: RouteProfile) -> Self {
        match profile {
            RouteProfile::Soc => Self::new(
                ["/", "/alerts", "/cases", "/playbooks"],
                ["/alerts/", "/cases/", "/playbooks/"],
            ),
            RouteProfile::Injects => Self::new(["/"], ["/injects/"]),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        self.exact.iter().any(|exact| exact == path)
            || self.prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
    }

    pub fn exact(&self) -> &[String] {
        &self.exact
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}
