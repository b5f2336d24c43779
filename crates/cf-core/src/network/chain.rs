use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Networks the factory contract is deployed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Chain {
    #[default]
    PolygonAmoy,
    Sepolia,
}

impl Chain {
    /// Every chain with a deployed factory.
    pub const ALL: [Chain; 2] = [Chain::PolygonAmoy, Chain::Sepolia];

    pub fn chain_id(&self) -> u64 {
        match self {
            Self::PolygonAmoy => 80_002,
            Self::Sepolia => 11_155_111,
        }
    }

    /// Address of the campaign factory on this chain.
    pub fn factory_address(&self) -> &'static str {
        match self {
            Self::PolygonAmoy => "0x9f41C64d4a8C0111bF023072606548dDD9f8871c",
            Self::Sepolia => "0x0f3429A6eC46AD1C440F23Be9AB477904EDa7e30",
        }
    }

    pub fn explorer_address_url(&self, address: &str) -> String {
        let base = match self {
            Self::PolygonAmoy => "https://amoy.polygonscan.com",
            Self::Sepolia => "https://sepolia.etherscan.io",
        };
        format!("{base}/address/{address}")
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PolygonAmoy => "polygon-amoy",
            Self::Sepolia => "sepolia",
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Chain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "polygon-amoy" | "amoy" => Ok(Self::PolygonAmoy),
            "sepolia" => Ok(Self::Sepolia),
            other => Err(format!("unsupported chain: {other}")),
        }
    }
}
