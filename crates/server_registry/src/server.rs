//! Listed-server models and the `address:port` identifier used for favorites.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator between address and port in a [`ServerIdentifier`].
pub const IDENTIFIER_SEPARATOR: char = ':';

/// `address:port` identifier of a listed server.
///
/// Two identifiers are equal iff their text is equal: comparison is case-sensitive and the
/// address is never normalized. Deserialization accepts any string so previously persisted
/// entries are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerIdentifier(String);

impl ServerIdentifier {
    /// Forms the identifier for `address` and `port`.
    pub fn new(address: impl AsRef<str>, port: u16) -> Self {
        Self(format!("{}{IDENTIFIER_SEPARATOR}{port}", address.as_ref()))
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits the identifier at its last separator.
    ///
    /// Returns `None` for persisted entries that do not carry a numeric port.
    pub fn parts(&self) -> Option<(&str, u16)> {
        let (address, port) = self.0.rsplit_once(IDENTIFIER_SEPARATOR)?;
        Some((address, port.parse().ok()?))
    }
}

impl fmt::Display for ServerIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ServerIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors produced while parsing a [`ServerIdentifier`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServerIdentifierError {
    /// No `:` separator was found.
    #[error("server identifier `{0}` has no port separator")]
    MissingSeparator(String),
    /// The part before the last separator is empty.
    #[error("server identifier `{0}` has an empty address")]
    EmptyAddress(String),
    /// The part after the last separator is not a valid port.
    #[error("server identifier `{value}` has invalid port `{port}`")]
    InvalidPort {
        /// Full identifier text.
        value: String,
        /// Offending port text.
        port: String,
    },
}

impl FromStr for ServerIdentifier {
    type Err = ServerIdentifierError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (address, port) = value
            .rsplit_once(IDENTIFIER_SEPARATOR)
            .ok_or_else(|| ServerIdentifierError::MissingSeparator(value.to_string()))?;
        if address.is_empty() {
            return Err(ServerIdentifierError::EmptyAddress(value.to_string()));
        }
        port.parse::<u16>()
            .map_err(|_| ServerIdentifierError::InvalidPort {
                value: value.to_string(),
                port: port.to_string(),
            })?;
        Ok(Self(value.to_string()))
    }
}

/// Game configuration advertised by a listed server.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfiguration {
    /// Short game-style code (`CTF`, `FFA`, `OFFA`, `Rabbit`, ...).
    #[serde(default)]
    pub game_style: String,
}

/// The part of a server-list entry the favorites and notification core consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSummary {
    /// Host name or IP address.
    pub address: String,
    /// Listening port.
    pub port: u16,
    /// Server title shown in the list.
    #[serde(default)]
    pub title: String,
    /// Players currently connected.
    #[serde(default)]
    pub players_count: u32,
    /// Advertised game configuration.
    #[serde(default)]
    pub configuration: ServerConfiguration,
}

impl ServerSummary {
    /// Returns the favorites identifier for this server.
    pub fn identifier(&self) -> ServerIdentifier {
        ServerIdentifier::new(&self.address, self.port)
    }
}

/// Returns the detail-page route for `server`.
pub fn server_route(server: &ServerSummary) -> String {
    format!("/s/{}/{}", server.address, server.port)
}

/// Returns the detail-page route that immediately offers to join `server`.
pub fn server_play_route(server: &ServerSummary) -> String {
    format!("{}?play", server_route(server))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn summary() -> ServerSummary {
        serde_json::from_str(
            r#"{
                "address": "bzflag.allejo.io",
                "port": 5150,
                "title": "Capture the flag",
                "playersCount": 7,
                "configuration": {"gameStyle": "CTF"},
                "timestamp": 1700000000
            }"#,
        )
        .expect("server summary")
    }

    #[test]
    fn identifier_concatenates_address_and_port() {
        let server = summary();
        assert_eq!(server.identifier().as_str(), "bzflag.allejo.io:5150");
        assert_eq!(server.players_count, 7);
        assert_eq!(server.configuration.game_style, "CTF");
    }

    #[test]
    fn identifiers_compare_case_sensitively() {
        assert_ne!(
            ServerIdentifier::new("Example.org", 5154),
            ServerIdentifier::new("example.org", 5154)
        );
    }

    #[test]
    fn parse_splits_at_last_separator() {
        let id: ServerIdentifier = "::1:5154".parse().expect("ipv6 loopback");
        assert_eq!(id.parts(), Some(("::1", 5154)));
        assert_eq!(id.to_string(), "::1:5154");
    }

    #[test]
    fn parse_rejects_malformed_identifiers() {
        assert_eq!(
            "example.org".parse::<ServerIdentifier>(),
            Err(ServerIdentifierError::MissingSeparator("example.org".to_string()))
        );
        assert_eq!(
            ":5154".parse::<ServerIdentifier>(),
            Err(ServerIdentifierError::EmptyAddress(":5154".to_string()))
        );
        assert_eq!(
            "example.org:70000".parse::<ServerIdentifier>(),
            Err(ServerIdentifierError::InvalidPort {
                value: "example.org:70000".to_string(),
                port: "70000".to_string(),
            })
        );
        assert!("example.org:".parse::<ServerIdentifier>().is_err());
    }

    #[test]
    fn identifiers_serialize_as_plain_strings() {
        let json = serde_json::to_string(&vec![ServerIdentifier::new("a.example", 1)])
            .expect("serialize");
        assert_eq!(json, r#"["a.example:1"]"#);

        let legacy: Vec<ServerIdentifier> =
            serde_json::from_str(r#"["no-port"]"#).expect("legacy entries deserialize");
        assert_eq!(legacy[0].parts(), None);
    }

    #[test]
    fn routes_point_at_server_detail_page() {
        let server = summary();
        assert_eq!(server_route(&server), "/s/bzflag.allejo.io/5150");
        assert_eq!(server_play_route(&server), "/s/bzflag.allejo.io/5150?play");
    }
}
