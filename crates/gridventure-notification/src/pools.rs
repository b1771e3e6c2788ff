//! Message pools keyed by category.

use gridventure_core::error::DomainError;
use gridventure_core::rng::DeterministicRng;
use serde::{Deserialize, Serialize};

use crate::message::{Message, MessageCategory};

/// The texts a theme offers for each category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePools {
    /// Candidates shown after a boost.
    pub boost: Vec<String>,
    /// Candidates shown after a setback.
    pub setback: Vec<String>,
    /// The single win message.
    pub win: String,
}

impl MessagePools {
    /// The pools shipped with the standard board.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            boost: [
                "🎓 DeFi allows peer-to-peer financial services without banks!",
                "💡 Smart contracts execute automatically when conditions are met!",
                "🔐 Your private keys = your crypto. Never share them!",
                "🌍 Ethereum enables global, permissionless innovation!",
                "⚡ Layer 2 solutions make transactions faster and cheaper!",
                "🏗️ DApps run on decentralized networks, not single servers!",
                "💎 HODLing means holding for long-term value growth!",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            setback: [
                "😱 FUD Alert: 'Crypto is just a bubble that will burst!'",
                "🚨 FUD Alert: 'Government will ban all cryptocurrencies!'",
                "💥 FUD Alert: 'Ethereum will be replaced by newer blockchains!'",
                "⚠️ FUD Alert: 'DeFi is too risky for normal people!'",
                "🔥 FUD Alert: 'Crypto mining destroys the environment!'",
                "💸 FUD Alert: 'You'll lose all your money in crypto!'",
                "🌪️ FUD Alert: 'Crypto is only used by criminals!'",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            win: "🎉 Congratulations! You've mastered the Ethereum ecosystem! 🎉".to_owned(),
        }
    }

    /// Checks that every category has at least one message and that no
    /// message is blank.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBoard` naming the offending pool.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (name, pool) in [("boost", &self.boost), ("setback", &self.setback)] {
            if pool.is_empty() {
                return Err(DomainError::InvalidBoard(format!(
                    "{name} message pool is empty"
                )));
            }
            if let Some(index) = pool.iter().position(|m| m.trim().is_empty()) {
                return Err(DomainError::InvalidBoard(format!(
                    "{name} message {index} is blank"
                )));
            }
        }
        if self.win.trim().is_empty() {
            return Err(DomainError::InvalidBoard("win message is empty".to_owned()));
        }
        Ok(())
    }

    /// Draws one message uniformly from the pool for `category`.
    ///
    /// The win category has a single message and consumes no randomness.
    pub fn pick(&self, category: MessageCategory, rng: &mut dyn DeterministicRng) -> Message {
        let text = match category {
            MessageCategory::Boost => pick_from(&self.boost, rng),
            MessageCategory::Setback => pick_from(&self.setback, rng),
            MessageCategory::Win => self.win.clone(),
        };
        Message { text, category }
    }
}

impl Default for MessagePools {
    fn default() -> Self {
        Self::standard()
    }
}

fn pick_from(pool: &[String], rng: &mut dyn DeterministicRng) -> String {
    let index = rng.next_index(pool.len());
    pool.get(index)
        .or_else(|| pool.first())
        .cloned()
        .unwrap_or_default()
}
