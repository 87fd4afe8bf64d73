use super::fingerprint::Fingerprint;
use super::model::Pool;

/// Port for the pool cache. Expiry is the adapter's business; a later `set`
/// for the same fingerprint replaces the earlier one.
pub trait PoolCache: Send + Sync {
    fn get(&self, fingerprint: &Fingerprint) -> Option<Pool>;
    fn set(&self, fingerprint: Fingerprint, pool: Pool);
}
