use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use replyomat_model::{DefaultPool, ResponseTable};

use config::ResponderConfig;

pub mod config;
mod parser;
pub(crate) mod store;

/// Generates a reply for a set of input words. A word matching a known
/// keyword returns its canned response; anything else draws a uniformly
/// random entry from the default pool.
pub struct Responder {
    table: ResponseTable,
    pool: DefaultPool,
    // The only mutable state. Embedders running turns concurrently must
    // confine the Responder to one thread or lock it themselves.
    rng: StdRng,
}

impl Responder {
    /// Loads both resources named by the config. Missing or unreadable
    /// resources degrade to an empty table and the fixed fallback pool.
    pub fn new(config: &ResponderConfig) -> Self {
        let table = store::load_response_table(&config.responses_file);
        let pool = store::load_default_pool(&config.default_responses_file);
        Self::with_parts(table, pool, StdRng::from_entropy())
    }

    /// Assembles a responder from pre-built parts. Seeding the rng makes
    /// default selection deterministic.
    pub fn with_parts(table: ResponseTable, pool: DefaultPool, rng: StdRng) -> Self {
        Responder { table, pool, rng }
    }

    /// Always returns a response: the first word (in the caller's iteration
    /// order) matching a keyword wins, otherwise a random default.
    pub fn generate_response(
        &mut self,
        words: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> String {
        for word in words {
            if let Some(body) = self.table.lookup(word.as_ref()) {
                return body.to_string();
            }
        }
        self.pick_default_response()
    }

    fn pick_default_response(&mut self) -> String {
        self.pool
            .responses()
            .choose(&mut self.rng)
            .expect("default pool is never empty")
            .clone()
    }
}
