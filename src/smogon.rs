use crate::{Reqwest, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One value or a list of interchangeable alternatives, the set dumps mix
/// both shapes freely (a move slot, an item, a nature...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            OneOrMany::One(v) => std::slice::from_ref(v).iter(),
            OneOrMany::Many(v) => v.iter(),
        }
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.iter().next()
    }
}

impl OneOrMany<String> {
    pub fn joined(&self, sep: &str) -> String {
        self.iter().map(String::as_str).collect::<Vec<_>>().join(sep)
    }
}

pub type StatsConfig = HashMap<String, u8>;

/// A single competitive build. Early generation dumps have no items,
/// natures nor EV spreads, so everything but the moves is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveSet {
    pub moves: Vec<OneOrMany<String>>,
    #[serde(default)]
    pub ability: Option<OneOrMany<String>>,
    #[serde(default)]
    pub item: Option<OneOrMany<String>>,
    #[serde(default)]
    pub nature: Option<OneOrMany<String>>,
    /// Stats absent from an IV override are 31.
    #[serde(default)]
    pub ivs: Option<OneOrMany<StatsConfig>>,
    #[serde(default)]
    pub evs: Option<OneOrMany<StatsConfig>>,
    #[serde(default)]
    pub teratypes: Option<OneOrMany<String>>,
}

/// Set name -> build, for one tier.
pub type TierSets = BTreeMap<String, MoveSet>;
/// Tier -> sets, everything a generation knows about one pokemon.
pub type PokemonSets = BTreeMap<String, TierSets>;
/// Pokemon name -> its sets, a whole generation dump.
pub type GenerationSets = BTreeMap<String, PokemonSets>;

impl MoveSet {
    /// Numbered move slots, alternatives joined like "2. Volt Switch / Surf".
    pub fn move_slots(&self) -> Vec<String> {
        self.moves
            .iter()
            .zip(1..)
            .map(|(slot, i)| format!("{}. {}", i, slot.joined(" / ")))
            .collect()
    }

    /// EV spreads as display strings, empty allocations dropped.
    pub fn ev_config(&self) -> Vec<String> {
        spread_config(self.evs.as_ref(), 0)
    }

    /// IV overrides as display strings, default 31s dropped.
    pub fn iv_config(&self) -> Vec<String> {
        spread_config(self.ivs.as_ref(), 31)
    }
}

const STAT_ORDER: [&str; 6] = ["hp", "atk", "def", "spa", "spd", "spe"];

fn spread_config(spreads: Option<&OneOrMany<StatsConfig>>, default: u8) -> Vec<String> {
    spreads
        .map(|spreads| {
            spreads
                .iter()
                .map(|stats| {
                    STAT_ORDER
                        .iter()
                        .filter_map(|k| stats.get(*k).map(|v| (*k, *v)))
                        .filter(|(_, value)| *value != default)
                        .map(|(k, v)| stats_display(k, v))
                        .collect::<Vec<_>>()
                        .join(" / ")
                })
                .collect()
        })
        .unwrap_or_default()
}

fn stats_display(stats: &str, value: u8) -> String {
    let k = match stats {
        "hp" => "HP",
        "atk" => "Attack",
        "def" => "Defend",
        "spa" => "Sp. Attack",
        "spd" => "Sp. Defend",
        "spe" => "Speed",
        _ => "Unknown stats",
    };

    format!("{} {}", value, k)
}

#[async_trait]
pub trait SetsRequester {
    /// The full competitive set dump of one generation.
    async fn generation_sets(&self, gen: u8) -> Result<GenerationSets>;
}

/// Fetches `gen{N}.json` documents below a configured base url.
#[derive(Debug, Clone)]
pub struct SetsClient {
    client: Reqwest,
    base_url: String,
}

impl SetsClient {
    pub fn new(client: Reqwest, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { client, base_url }
    }
}

#[async_trait]
impl SetsRequester for SetsClient {
    async fn generation_sets(&self, gen: u8) -> Result<GenerationSets> {
        let url = format!("{}/gen{}.json", self.base_url, gen);
        let text = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        // decoded apart from the transport so a malformed document
        // surfaces as its own error kind
        let sets = serde_json::from_str(&text)?;
        Ok(sets)
    }
}
