pub mod application {
    pub mod draw {
        pub mod spin;
        pub mod spin_weekly;
    }
    pub mod pool {
        pub mod fetcher;
        pub mod load;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod retry;
    pub mod draw {
        pub mod engine;
        pub mod model;
        pub mod use_cases {
            pub mod spin;
            pub mod spin_weekly;
        }
    }
    pub mod filter {
        pub mod predicates;
        pub mod query_params;
    }
    pub mod pool {
        pub mod cache;
        pub mod fingerprint;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod load;
        }
    }
    pub mod preferences {
        pub mod value_objects;
    }
    pub mod recipe {
        pub mod canonicalize;
        pub mod fixtures;
        pub mod model;
        pub mod raw;
        pub mod text;
    }
}
