pub mod pool_cache;
