//! Seed dataset generation.
//!
//! The shape of the dataset (ids, names, categories, tags, editability) is a
//! pure function of the config; only `value` draws from the injected RNG.

use indexmap::IndexSet;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::ExplorerConfig;
use crate::model::Parameter;
use crate::navigation::leaf_names;

/// Generate the parameter collection described by `config`, drawing values
/// from `rng`.
pub fn generate_parameters<R: Rng + ?Sized>(config: &ExplorerConfig, rng: &mut R) -> Vec<Parameter> {
    let cats = leaf_names(&config.categories);
    if cats.is_empty() {
        return Vec::new();
    }
    let stride = config.editable_every.max(1);
    let range = config.value_range.max(1);

    (1..=config.parameter_count)
        .map(|i| {
            let cat = &cats[i % cats.len()];
            let tags: IndexSet<String> = config
                .tags
                .get(cat)
                .map(|t| t.iter().cloned().collect())
                .unwrap_or_default();
            Parameter {
                id: format!("PARAM_{i}"),
                name: format!("Parameter {i}"),
                category: cat.clone(),
                editable: i % stride == 0,
                tags,
                description: format!("Controls behavior of {cat} subsystem (parameter {i})."),
                value: serde_json::Value::from(rng.random_range(0..range)),
            }
        })
        .collect()
}

/// Build the RNG for a config: seeded when `seed` is set, otherwise from a
/// fresh random seed. Returns the seed actually used so it can be logged.
pub fn make_rng(seed: Option<u64>) -> (SmallRng, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    (SmallRng::seed_from_u64(seed), seed)
}
