//! Data pipeline of the pokemon viewer.
//!
//! Given a name, this crate fetches the species record from PokeAPI,
//! resolves competitive set data from the per-generation dumps (newest
//! generation first) and derives type matchups from the typing, merged
//! into one [`CombinedData`] record for the UI to render.

#[macro_use]
extern crate log;

#[macro_use]
extern crate async_trait;

mod config;
mod effectiveness;
mod error;
mod pokeapi;
mod smogon;
mod store;
mod types;
mod viewer;

pub use crate::config::Config;
pub use crate::effectiveness::{type_matchups, TypeMatchups};
pub use crate::error::Error;
pub use crate::pokeapi::{
    Ability, ArtworkSprites, OtherSprites, PokeApi, PokeApiData, Pokemon, PokemonType, Sprites,
    Stat,
};
pub use crate::smogon::{
    GenerationSets, MoveSet, OneOrMany, PokemonSets, SetsClient, SetsRequester, StatsConfig,
    TierSets,
};
pub use crate::store::{SetStore, GENERATIONS};
pub use crate::types::{Effectiveness, ParseTypeError, Type};
pub use crate::viewer::{CombinedData, PokeViewer};

pub use reqwest::Client as Reqwest;
pub use reqwest::Error as ReqwestError;

pub type Result<T> = std::result::Result<T, Error>;
