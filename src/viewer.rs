use crate::config::Config;
use crate::effectiveness::{type_matchups, TypeMatchups};
use crate::pokeapi::{PokeApi, Pokemon};
use crate::smogon::{PokemonSets, SetsClient, SetsRequester};
use crate::store::SetStore;
use crate::{Error, Reqwest, Result};
use futures::future;
use serde::Serialize;

/// One search result: the API record joined with the matched generation's
/// set data and the matchups derived from the typing. Built fresh per
/// search, nothing here outlives the next one.
#[derive(Debug, Clone, Serialize)]
pub struct CombinedData {
    pub pokemon: Pokemon,
    /// Which generation dump the sets came from.
    pub generation: u8,
    pub sets: PokemonSets,
    pub matchups: TypeMatchups,
}

/// The viewer core. Owns the http client, the dump fetcher and the
/// session caches; the UI on top is expected to call `search` and
/// `suggest` and render whatever comes back.
pub struct PokeViewer {
    client: Reqwest,
    sets: SetsClient,
    store: SetStore,
}

impl PokeViewer {
    pub fn new() -> Result<Self> {
        Ok(Self::with_config(Config::from_env()?))
    }

    pub fn with_config(config: Config) -> Self {
        let client = Reqwest::new();
        let sets = SetsClient::new(client.clone(), config.data_url);

        Self {
            client,
            sets,
            store: SetStore::new(),
        }
    }

    /// Look a pokemon up by name.
    ///
    /// The API fetch and the local set data search run concurrently, they
    /// don't depend on each other. Fails with `NotFound` when the API has
    /// no such pokemon and with `LocalDataMissing` when no generation dump
    /// contains it; a stale result superseding a newer search is the
    /// caller's problem to discard.
    pub async fn search(&self, name: &str) -> Result<CombinedData> {
        info!("searching for {}", name);
        combine(&self.client, &self.sets, &self.store, name).await
    }

    /// Autocomplete candidates from the name index, building the index on
    /// the first call.
    pub async fn suggest(&self, prefix: &str) -> Vec<String> {
        self.store.suggest(&self.sets, prefix).await
    }

    /// Whether the name index has been built yet.
    pub fn names_loaded(&self) -> bool {
        self.store.names_loaded()
    }
}

pub(crate) async fn combine<A, S>(
    api: &A,
    sets: &S,
    store: &SetStore,
    name: &str,
) -> Result<CombinedData>
where
    A: PokeApi + Sync,
    S: SetsRequester + Sync,
{
    let (pokemon, local) = future::join(api.pokemon(name), store.resolve(sets, name)).await;

    let pokemon = pokemon?;
    let (generation, sets) = local.ok_or_else(|| Error::LocalDataMissing(name.to_owned()))?;
    let matchups = type_matchups(&pokemon.typing());

    Ok(CombinedData {
        pokemon,
        generation,
        sets,
        matchups,
    })
}
