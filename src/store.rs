use crate::smogon::{GenerationSets, PokemonSets, SetsRequester};
use dashmap::DashMap;
use futures::future;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Newest first, the resolver stops at the first generation that matches.
pub const GENERATIONS: [u8; 9] = [9, 8, 7, 6, 5, 4, 3, 2, 1];

/// Session-wide cache of generation dumps plus the autocomplete name index.
/// Dumps are immutable once fetched, everything here works through `&self`
/// so the store can sit behind an `Arc`.
#[derive(Default)]
pub struct SetStore {
    generations: DashMap<u8, Arc<GenerationSets>>,
    names: OnceCell<Vec<String>>,
}

impl SetStore {
    pub fn new() -> Self {
        Default::default()
    }

    /// Cached dump of one generation, fetched on first use. Two callers
    /// racing on a cold generation may fetch it twice, the loser's copy
    /// just replaces an identical one.
    async fn generation<R>(&self, req: &R, gen: u8) -> crate::Result<Arc<GenerationSets>>
    where
        R: SetsRequester + Sync,
    {
        if let Some(data) = self.generations.get(&gen) {
            return Ok(Arc::clone(&data));
        }

        let data = Arc::new(req.generation_sets(gen).await?);
        debug!("cached gen{} set data ({} pokemon)", gen, data.len());
        self.generations.insert(gen, Arc::clone(&data));

        Ok(data)
    }

    /// Find set data for a name, newest generation first.
    ///
    /// Tries a case-insensitive exact key match, then falls back to the
    /// lexicographically first `Name-Form` variant. A generation that fails
    /// to load is logged and skipped, never fatal on its own.
    pub async fn resolve<R>(&self, req: &R, name: &str) -> Option<(u8, PokemonSets)>
    where
        R: SetsRequester + Sync,
    {
        let name = name.to_lowercase();

        for &gen in GENERATIONS.iter() {
            let data = match self.generation(req, gen).await {
                Ok(data) => data,
                Err(why) => {
                    warn!("skipping gen{} set data: {}", gen, why);
                    continue;
                }
            };

            if let Some((key, sets)) = find_in(&data, &name) {
                debug!("found {} in gen{}", key, gen);
                return Some((gen, sets.clone()));
            }
        }

        None
    }

    /// Every name known to any generation, built once per process and
    /// reused for the rest of the session. Generations that fail to load
    /// are logged and skipped, partial coverage is accepted.
    pub async fn all_names<R>(&self, req: &R) -> &[String]
    where
        R: SetsRequester + Sync,
    {
        self.names
            .get_or_init(|| async {
                let fetches = GENERATIONS.iter().map(|&gen| self.generation(req, gen));
                let results = future::join_all(fetches).await;

                let mut names = BTreeSet::new();
                for (result, gen) in results.into_iter().zip(&GENERATIONS) {
                    match result {
                        Ok(data) => names.extend(data.keys().cloned()),
                        Err(why) => warn!("name index is missing gen{}: {}", gen, why),
                    }
                }

                info!("name index built with {} names", names.len());
                names.into_iter().collect()
            })
            .await
    }

    /// Autocomplete candidates whose name starts with the prefix, sorted,
    /// matched without case.
    pub async fn suggest<R>(&self, req: &R, prefix: &str) -> Vec<String>
    where
        R: SetsRequester + Sync,
    {
        let prefix = prefix.to_lowercase();

        self.all_names(req)
            .await
            .iter()
            .filter(|name| name.to_lowercase().starts_with(&prefix))
            .cloned()
            .collect()
    }

    /// Whether the name index has been built yet.
    pub fn names_loaded(&self) -> bool {
        self.names.initialized()
    }
}

/// Exact key match first, variant fallback second. `name` must already be
/// lowercased. Map order makes the variant pick deterministic.
fn find_in<'a>(data: &'a GenerationSets, name: &str) -> Option<(&'a str, &'a PokemonSets)> {
    let exact = data.iter().find(|(key, _)| key.to_lowercase() == name);
    if let Some((key, sets)) = exact {
        return Some((key, sets));
    }

    let prefix = format!("{}-", name);
    data.iter()
        .find(|(key, _)| key.to_lowercase().starts_with(&prefix))
        .map(|(key, sets)| (key.as_str(), sets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smogon::SetsRequester;
    use crate::{Error, Result};
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubSets {
        data: HashMap<u8, GenerationSets>,
        hits: AtomicUsize,
    }

    impl StubSets {
        fn new(gens: Vec<(u8, serde_json::Value)>) -> Self {
            let data = gens
                .into_iter()
                .map(|(gen, value)| (gen, serde_json::from_value(value).unwrap()))
                .collect();

            Self {
                data,
                hits: AtomicUsize::new(0),
            }
        }

        fn hits(&self) -> usize {
            self.hits.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SetsRequester for StubSets {
        async fn generation_sets(&self, gen: u8) -> Result<GenerationSets> {
            self.hits.fetch_add(1, Ordering::SeqCst);

            match self.data.get(&gen) {
                Some(data) => Ok(data.clone()),
                // same error kind a malformed download produces
                None => Err(Error::from(
                    serde_json::from_str::<GenerationSets>("<!DOCTYPE html>").unwrap_err(),
                )),
            }
        }
    }

    fn entry(tier: &str) -> serde_json::Value {
        json!({ tier: { "Standard": { "moves": ["Tackle"] } } })
    }

    #[tokio::test]
    async fn newest_generation_wins() {
        let stub = StubSets::new(vec![
            (1, json!({ "Pikachu": entry("OU") })),
            (9, json!({ "Pikachu": entry("ZU") })),
        ]);
        let store = SetStore::new();

        let (gen, sets) = store.resolve(&stub, "pikachu").await.unwrap();
        assert_eq!(gen, 9);
        assert!(sets.contains_key("ZU"));
    }

    #[tokio::test]
    async fn exact_match_beats_variants() {
        let stub = StubSets::new(vec![(9, json!({
            "Pikachu": entry("OU"),
            "Pikachu-Gmax": entry("Ubers"),
        }))]);
        let store = SetStore::new();

        let (_, sets) = store.resolve(&stub, "PIKACHU").await.unwrap();
        assert!(sets.contains_key("OU"));

        let (_, sets) = store.resolve(&stub, "pikachu-gmax").await.unwrap();
        assert!(sets.contains_key("Ubers"));
    }

    #[tokio::test]
    async fn variant_fallback_picks_the_first_key() {
        let stub = StubSets::new(vec![(9, json!({
            "Rotom-Heat": entry("UU"),
            "Rotom-Wash": entry("OU"),
        }))]);
        let store = SetStore::new();

        let (_, sets) = store.resolve(&stub, "rotom").await.unwrap();
        assert!(sets.contains_key("UU"));
    }

    #[tokio::test]
    async fn failing_generations_are_skipped() {
        // only gen 3 exists, everything newer errors out
        let stub = StubSets::new(vec![(3, json!({ "Snorlax": entry("OU") }))]);
        let store = SetStore::new();

        let (gen, _) = store.resolve(&stub, "snorlax").await.unwrap();
        assert_eq!(gen, 3);

        assert!(store.resolve(&stub, "missingno").await.is_none());
    }

    #[tokio::test]
    async fn datasets_are_fetched_once() {
        let stub = StubSets::new(vec![(9, json!({ "Pikachu": entry("OU") }))]);
        let store = SetStore::new();

        // gen 9 matches right away, older generations are never touched
        store.resolve(&stub, "pikachu").await.unwrap();
        assert_eq!(stub.hits(), 1);

        // the second search reuses the cached dump
        store.resolve(&stub, "pikachu").await.unwrap();
        assert_eq!(stub.hits(), 1);
    }

    #[tokio::test]
    async fn name_index_is_merged_sorted_and_built_once() {
        let stub = StubSets::new(vec![
            (9, json!({ "Pikachu": entry("OU"), "Zacian": entry("Ubers") })),
            (1, json!({ "Pikachu": entry("OU"), "Abra": entry("NU") })),
        ]);
        let store = SetStore::new();
        assert!(!store.names_loaded());

        let names = store.all_names(&stub).await.to_vec();
        assert_eq!(names, vec!["Abra", "Pikachu", "Zacian"]);
        assert!(store.names_loaded());

        let hits = stub.hits();
        store.all_names(&stub).await;
        assert_eq!(stub.hits(), hits);
    }

    #[tokio::test]
    async fn suggestions_ignore_case() {
        let stub = StubSets::new(vec![(9, json!({
            "Pikachu": entry("OU"),
            "Pidgeot": entry("UU"),
            "Snorlax": entry("OU"),
        }))]);
        let store = SetStore::new();

        assert_eq!(
            store.suggest(&stub, "pi").await,
            vec!["Pidgeot", "Pikachu"]
        );
        assert_eq!(store.suggest(&stub, "PIK").await, vec!["Pikachu"]);
        assert!(store.suggest(&stub, "mew").await.is_empty());
    }
}
