use crate::types::Type;
use crate::{Error, Reqwest, Result};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

const API_ENDPOINT: &str = "https://pokeapi.co/api/v2/";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokeApiData {
    pub name: String,
    pub url: String,
}

/// The slice of the API record the viewer renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: i64,
    pub name: String,
    pub height: i64,
    pub weight: i64,
    pub types: Vec<PokemonType>,
    pub sprites: Sprites,
    pub abilities: Vec<Ability>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: i64,
    #[serde(rename = "type")]
    pub type_field: PokeApiData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ability {
    pub ability: PokeApiData,
    pub is_hidden: bool,
    pub slot: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub base_stat: i64,
    pub effort: i64,
    pub stat: PokeApiData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_default: Option<String>,
    pub back_shiny: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: ArtworkSprites,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkSprites {
    pub front_default: Option<String>,
}

impl Pokemon {
    /// Defensive typing in slot order, names the chart doesn't know are
    /// skipped.
    pub fn typing(&self) -> Vec<Type> {
        self.types
            .iter()
            .filter_map(|v| v.type_field.name.parse::<Type>().ok())
            .collect()
    }

    /// Best display image, the official artwork when present.
    pub fn artwork(&self) -> Option<&str> {
        self.sprites
            .other
            .as_ref()
            .and_then(|other| other.official_artwork.front_default.as_deref())
            .or_else(|| self.sprites.front_default.as_deref())
    }
}

#[async_trait]
pub trait PokeApi {
    /// Fetch a pokemon record by name, `NotFound` when the API has no such
    /// pokemon.
    async fn pokemon<D: AsRef<str> + Send + 'async_trait>(&self, name: D) -> Result<Pokemon>;
}

#[async_trait]
impl PokeApi for Reqwest {
    async fn pokemon<D: AsRef<str> + Send + 'async_trait>(&self, name: D) -> Result<Pokemon> {
        let name = name.as_ref().to_lowercase();
        let url = format!("{}pokemon/{}", API_ENDPOINT, name);

        let res = self.get(&url).send().await?;
        if res.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(name));
        }

        let pokemon = res.error_for_status()?.json().await?;
        Ok(pokemon)
    }
}
