//! Core domain types shared by every gateway operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// Number of quarks in one Kin.
pub const QUARKS_PER_KIN: i64 = 100_000;

/// Amount in quarks, the smallest unit of the ledger's currency.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub struct Quark(pub i64);

impl Quark {
    #[must_use]
    pub fn from_kin(kin: i64) -> Self {
        Self(kin * QUARKS_PER_KIN)
    }

    pub fn as_kin(&self) -> f64 {
        self.0 as f64 / QUARKS_PER_KIN as f64
    }
}

impl std::fmt::Display for Quark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Network the gateway talks to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum NetworkEnvironment {
    MainNet,
    #[default]
    TestNet,
}

impl NetworkEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MainNet => "mainnet",
            Self::TestNet => "testnet",
        }
    }

    /// Agora endpoint for this network.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::MainNet => "https://api.agorainfra.net:443",
            Self::TestNet => "https://api.agorainfra.dev:443",
        }
    }

    /// Read the network from `AGORA_NETWORK`, defaulting to testnet.
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var("AGORA_NETWORK")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

impl std::str::FromStr for NetworkEnvironment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Self::MainNet),
            "testnet" => Ok(Self::TestNet),
            _ => Err(format!("Invalid network environment: {}", s)),
        }
    }
}

impl std::fmt::Display for NetworkEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Account identifier carrying both wire representations.
///
/// V3 requests address the account by its ledger-native address string;
/// V4 requests use the raw ed25519 public key. Key derivation happens
/// upstream — this type only keeps the two representations paired so the
/// bridge cannot mix them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct KinAccountId {
    address: String,
    public_key: [u8; 32],
}

impl KinAccountId {
    #[must_use]
    pub fn new(address: impl Into<String>, public_key: [u8; 32]) -> Self {
        Self {
            address: address.into(),
            public_key,
        }
    }

    /// Ledger-native address string (V3 representation).
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Raw public key bytes (V4 representation).
    pub fn public_key(&self) -> &[u8; 32] {
        &self.public_key
    }

    pub fn solana_pubkey(&self) -> Pubkey {
        Pubkey::new_from_array(self.public_key)
    }
}

/// Version-native transaction identifier: a 32-byte stellar hash for V3,
/// a 64-byte solana signature for V4.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TransactionHash(pub Vec<u8>);

impl TransactionHash {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for TransactionHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", bs58::encode(&self.0).into_string())
    }
}

/// Requested ordering for transaction history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransactionOrder {
    Ascending,
    #[default]
    Descending,
}

/// Where a transaction sits in its lifecycle, with the evidence gathered
/// at that point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionRecord {
    /// Submitted by this client, not yet acknowledged.
    InFlight { timestamp: DateTime<Utc> },
    /// Acknowledged by the service with its result blob.
    Acknowledged {
        timestamp: DateTime<Utc>,
        result_xdr: Vec<u8>,
    },
    /// Fetched from history with its paging position.
    Historical {
        timestamp: DateTime<Utc>,
        result_xdr: Vec<u8>,
        paging_token: String,
    },
}

/// A transaction with its version-native encoded envelope and record
/// state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KinTransaction {
    envelope: Vec<u8>,
    record: TransactionRecord,
    network: NetworkEnvironment,
}

impl KinTransaction {
    /// Returns `None` for an empty envelope; a transaction without its
    /// encoded payload cannot be acted on by callers.
    #[must_use]
    pub fn in_flight(envelope: Vec<u8>, network: NetworkEnvironment) -> Option<Self> {
        Self::build(
            envelope,
            TransactionRecord::InFlight {
                timestamp: Utc::now(),
            },
            network,
        )
    }

    #[must_use]
    pub fn acknowledged(
        envelope: Vec<u8>,
        result_xdr: Vec<u8>,
        network: NetworkEnvironment,
    ) -> Option<Self> {
        Self::build(
            envelope,
            TransactionRecord::Acknowledged {
                timestamp: Utc::now(),
                result_xdr,
            },
            network,
        )
    }

    #[must_use]
    pub fn historical(
        envelope: Vec<u8>,
        result_xdr: Vec<u8>,
        paging_token: String,
        network: NetworkEnvironment,
    ) -> Option<Self> {
        Self::build(
            envelope,
            TransactionRecord::Historical {
                timestamp: Utc::now(),
                result_xdr,
                paging_token,
            },
            network,
        )
    }

    fn build(
        envelope: Vec<u8>,
        record: TransactionRecord,
        network: NetworkEnvironment,
    ) -> Option<Self> {
        if envelope.is_empty() {
            return None;
        }
        Some(Self {
            envelope,
            record,
            network,
        })
    }

    pub fn envelope(&self) -> &[u8] {
        &self.envelope
    }

    pub fn record(&self) -> &TransactionRecord {
        &self.record
    }

    pub fn network(&self) -> NetworkEnvironment {
        self.network
    }

    /// Paging position when this transaction came from history.
    pub fn paging_token(&self) -> Option<&str> {
        match &self.record {
            TransactionRecord::Historical { paging_token, .. } => Some(paging_token),
            _ => None,
        }
    }
}

/// Account state as reported by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountInfo {
    /// Display address; the V3 ledger-native string, or the base58 form
    /// of the V4 public key.
    pub address: String,
    pub balance: Quark,
    /// Present on V3 only; V4 accounts have no sequence number.
    pub sequence_number: Option<i64>,
}

/// Service-level configuration for building V4 transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Account funding fees on behalf of clients, when subsidized.
    pub subsidizer_account: Option<Pubkey>,
    pub token_program: Pubkey,
    pub token: Pubkey,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_quark_kin_conversion() {
        assert_eq!(Quark::from_kin(1), Quark(100_000));
        assert_eq!(Quark::from_kin(25).as_kin(), 25.0);
        assert_eq!(Quark(50_000).as_kin(), 0.5);
    }

    #[test]
    fn test_network_environment_display_and_parsing() {
        let networks = vec![
            (NetworkEnvironment::MainNet, "mainnet"),
            (NetworkEnvironment::TestNet, "testnet"),
        ];

        for (network, string) in networks {
            assert_eq!(network.as_str(), string);
            assert_eq!(network.to_string(), string);
            assert_eq!(NetworkEnvironment::from_str(string).unwrap(), network);
        }

        assert!(NetworkEnvironment::from_str("devnet").is_err());
    }

    #[test]
    fn test_network_endpoints_differ() {
        assert_ne!(
            NetworkEnvironment::MainNet.endpoint(),
            NetworkEnvironment::TestNet.endpoint()
        );
    }

    #[test]
    fn test_transaction_requires_envelope() {
        assert!(KinTransaction::in_flight(vec![], NetworkEnvironment::TestNet).is_none());
        let tx = KinTransaction::acknowledged(vec![1, 2, 3], vec![], NetworkEnvironment::TestNet)
            .unwrap();
        assert_eq!(tx.envelope(), &[1, 2, 3]);
        assert!(tx.paging_token().is_none());
    }

    #[test]
    fn test_historical_paging_token() {
        let tx = KinTransaction::historical(
            vec![9],
            vec![],
            "cursor-1".to_string(),
            NetworkEnvironment::MainNet,
        )
        .unwrap();
        assert_eq!(tx.paging_token(), Some("cursor-1"));
        assert_eq!(tx.network(), NetworkEnvironment::MainNet);
    }

    #[test]
    fn test_transaction_serialization_roundtrip() {
        let tx = KinTransaction::historical(
            vec![1, 2, 3],
            vec![4, 5],
            "cursor-9".to_string(),
            NetworkEnvironment::TestNet,
        )
        .unwrap();

        let json = serde_json::to_string(&tx).unwrap();
        let deserialized: KinTransaction = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, tx);
    }

    #[test]
    fn test_account_id_keeps_representations_paired() {
        let id = KinAccountId::new("GABC", [7u8; 32]);
        assert_eq!(id.address(), "GABC");
        assert_eq!(id.public_key(), &[7u8; 32]);
        assert_eq!(id.solana_pubkey().to_bytes(), [7u8; 32]);
    }
}
