// src/mode/config.rs
use serde::{Deserialize, Serialize};

use crate::lexer::tables::{ExtraRule, State};

const BALZAC_KEYWORDS: &str = "AIAO|AINO|AISO|BTC|SIAO|SINO|SISO|_|absLock|address|assert|between|block|bool|boolean|checkBlock|checkBlockDelay|checkDate|checkTimeDelay|const|date|else|eval|false|fees|from|fun|hash|hash160|hash256|if|import|input|int|key|mainnet|max|min|network|of|output|package|participant|private|pubkey|relLock|ripemd160|sha1|sha256|sig|signature|size|string|testnet|then|this|toAddress|toPubkey|transaction|true|txid|value|versig|void";

const BTM_KEYWORDS: &str = "AIAO|AINO|AISO|BTC|SIAO|SINO|SISO|_|absLock|address|between|block|bool|boolean|checkBlock|checkBlockDelay|checkDate|checkTimeDelay|const|date|else|eval|false|from|fun|hash|hash160|hash256|if|import|input|int|key|mainnet|max|min|network|of|output|package|participant|pubkey|regtest|relLock|ripemd160|sha1|sha256|sig|signature|size|string|testnet|then|this|toAddress|toPubkey|transaction|true|value|versig|void";

/// Everything that distinguishes one DSL variant's mode from another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeConfig {
    /// Name the host registers the mode under, e.g. `xtext/balzac`.
    pub id: String,
    /// Case-sensitive reserved words.
    pub keywords: Vec<String>,
    /// Start-state rules tried after the delimiter rules and before words.
    #[serde(default)]
    pub extra_rules: Vec<ExtraRule>,
    #[serde(default)]
    pub line_comment: Option<String>,
    #[serde(default)]
    pub dont_indent_states: Vec<State>,
}

fn split_keywords(list: &str) -> Vec<String> {
    list.split('|').map(str::to_owned).collect()
}

impl ModeConfig {
    pub fn balzac() -> Self {
        Self {
            id: "xtext/balzac".to_string(),
            keywords: split_keywords(BALZAC_KEYWORDS),
            extra_rules: Vec::new(),
            line_comment: Some("//".to_string()),
            dont_indent_states: vec![State::InBlockComment],
        }
    }

    /// The older BitcoinTM variant: no `assert`/`fees`/`private`/`txid`, adds `regtest`.
    pub fn btm() -> Self {
        Self {
            id: "xtext/btm".to_string(),
            keywords: split_keywords(BTM_KEYWORDS),
            extra_rules: Vec::new(),
            line_comment: None,
            dont_indent_states: Vec::new(),
        }
    }

    pub fn builtin() -> Vec<ModeConfig> {
        vec![Self::balzac(), Self::btm()]
    }
}
